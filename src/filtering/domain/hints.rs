//! Validation hints: engine-specific parameters selecting rule groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contextual parameter passed to a hint-aware validation engine.
///
/// Hints are opaque to the filtering layer; the validation engine decides
/// what they mean, typically selecting which rule groups apply for a given
/// call.
///
/// # Examples
///
/// ```
/// use wren::filtering::domain::ValidationHint;
///
/// let hint = ValidationHint::new("checkout");
/// assert_eq!(hint.as_str(), "checkout");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationHint(String);

impl ValidationHint {
    /// Creates a hint from any string-like value.
    #[must_use]
    pub fn new(hint: impl Into<String>) -> Self {
        Self(hint.into())
    }

    /// Returns the hint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ValidationHint {
    fn from(hint: &str) -> Self {
        Self::new(hint)
    }
}

impl From<String> for ValidationHint {
    fn from(hint: String) -> Self {
        Self(hint)
    }
}

impl fmt::Display for ValidationHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

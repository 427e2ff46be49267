//! Binding results collecting validation failures for a payload.
//!
//! A [`BindingResult`] is the error-collection context handed to a
//! validation engine. It is named after the payload type so that failure
//! reports identify which object was being validated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validation failure recorded against a payload.
///
/// Failures are either field-level (a named property violated a rule) or
/// object-level (the payload as a whole violated a rule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationFailure {
    /// A named field violated a constraint.
    Field {
        /// Path of the offending field (dotted for nested structures).
        field: String,
        /// Machine-readable constraint code.
        code: String,
        /// Human-readable description of the violation.
        message: String,
    },
    /// The payload as a whole violated a constraint.
    Object {
        /// Machine-readable constraint code.
        code: String,
        /// Human-readable description of the violation.
        message: String,
    },
}

impl ValidationFailure {
    /// Creates a field-level failure.
    #[must_use]
    pub fn field(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Field {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an object-level failure.
    #[must_use]
    pub fn object(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Object {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns the constraint code of this failure.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Field { code, .. } | Self::Object { code, .. } => code,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field {
                field,
                code,
                message,
            } => write!(f, "field '{field}' [{code}]: {message}"),
            Self::Object { code, message } => write!(f, "object [{code}]: {message}"),
        }
    }
}

/// Error-collection context for validating a single payload.
///
/// The object name is derived from the payload's simple type name in
/// lower-camel case, so validating an `OrderRequest` payload produces a
/// binding result named `orderRequest`.
///
/// An empty failure list means the payload is valid.
///
/// # Examples
///
/// ```
/// use wren::filtering::domain::BindingResult;
///
/// struct OrderRequest;
///
/// let mut result = BindingResult::for_payload::<OrderRequest>();
/// assert_eq!(result.object_name(), "orderRequest");
/// assert!(!result.has_errors());
///
/// result.reject_field("customer", "length", "must not be empty");
/// assert!(result.has_errors());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingResult {
    object_name: String,
    failures: Vec<ValidationFailure>,
}

impl BindingResult {
    /// Creates an empty binding result with an explicit object name.
    #[must_use]
    pub const fn new(object_name: String) -> Self {
        Self {
            object_name,
            failures: Vec::new(),
        }
    }

    /// Creates an empty binding result named after the payload type `T`.
    #[must_use]
    pub fn for_payload<T>() -> Self {
        Self::new(lower_camel(simple_type_name::<T>()))
    }

    /// Returns the name of the object under validation.
    #[must_use]
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Records a field-level failure.
    pub fn reject_field(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.failures.push(ValidationFailure::field(field, code, message));
    }

    /// Records an object-level failure.
    pub fn reject(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.failures.push(ValidationFailure::object(code, message));
    }

    /// Returns `true` if any failure has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns the number of recorded failures.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    /// Returns the recorded failures in insertion order.
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }
}

impl fmt::Display for BindingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "'{}' is valid", self.object_name);
        }
        let joined = self
            .failures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "'{}' has {} validation failure(s): {joined}",
            self.object_name,
            self.failures.len()
        )
    }
}

/// Returns the simple name of a type: the last path segment with generic
/// arguments stripped.
///
/// # Examples
///
/// ```
/// use wren::filtering::domain::simple_type_name;
///
/// assert_eq!(simple_type_name::<std::string::String>(), "String");
/// assert_eq!(simple_type_name::<Vec<u8>>(), "Vec");
/// ```
#[must_use]
pub fn simple_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// Lowercases the first character of a name, leaving the rest untouched.
fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

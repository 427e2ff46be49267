//! Message identifier newtype.
//!
//! Wrapping the raw UUID keeps message identifiers from being confused
//! with other identifier kinds as the platform grows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier stamped on every message envelope.
///
/// # Examples
///
/// ```
/// use wren::filtering::domain::MessageId;
///
/// let id = MessageId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, for callers that assign identifiers
    /// themselves.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Generates a fresh random identifier, equivalent to [`MessageId::new`].
impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for MessageId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

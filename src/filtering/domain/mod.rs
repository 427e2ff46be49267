//! Domain types for the filtering subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are serialisable via serde; the message envelope is immutable
//! after construction.

mod binding;
mod headers;
mod hints;
mod ids;
mod message;

pub use binding::{BindingResult, ValidationFailure, simple_type_name};
pub use headers::MessageHeaders;
pub use hints::ValidationHint;
pub use ids::MessageId;
pub use message::{Message, MessageBuilder};

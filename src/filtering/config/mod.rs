//! Declarative filter configuration.
//!
//! A [`FilterDefinition`] is the declarative description of a validating
//! filter (typically deserialised from JSON or YAML); a
//! [`FilterRegistry`] holds the named components the definition may
//! reference. Binding the two produces a ready
//! [`MessageFilter`](crate::filtering::services::MessageFilter).

pub mod definition;
pub mod registry;

pub use definition::FilterDefinition;
pub use registry::FilterRegistry;

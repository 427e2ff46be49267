//! Payload validation implementation.
//!
//! This module provides the validating selector and the hint resolution
//! strategies it consumes.

pub mod resolver;
pub mod selector;

pub use resolver::{FnResolver, HeaderHints, NoHints, StaticHints};
pub use selector::ValidatingSelector;

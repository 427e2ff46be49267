//! Filtering services.
//!
//! Services compose ports into message-processing endpoints.

pub mod filter;

pub use filter::MessageFilter;

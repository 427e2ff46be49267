//! Adapter implementations of the filtering ports.
//!
//! - [`DeriveValidator`]: validation engine backed by the `validator`
//!   crate's derived rules, the platform's default engine.
//! - [`InMemoryChannel`]: a collecting channel for tests and small
//!   deployments.

mod derive;
mod memory;

pub use derive::DeriveValidator;
pub use memory::InMemoryChannel;

//! Unit tests for the filtering module.
//!
//! Tests are organised by component, covering happy paths, error cases,
//! and edge cases for all public APIs.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod binding_tests;
mod resolver_tests;
mod selector_tests;

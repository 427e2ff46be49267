//! Message filtering and payload validation for Wren.
//!
//! This module implements the validating selector, the filter endpoint that
//! consumes it, and the declarative configuration binder that wires both
//! from named component references.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::BindingResult`],
//!   [`domain::ValidationHint`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::validator::PayloadValidator`],
//!   [`ports::selector::MessageSelector`], [`ports::channel::MessageChannel`])
//! - **Adapters**: Concrete implementations ([`adapters::DeriveValidator`],
//!   [`adapters::InMemoryChannel`])
//! - **Validation**: The payload-validating selector and hint resolution strategies
//! - **Services**: The filter endpoint with discard routing
//! - **Config**: Declarative filter definitions and the component registry
//!
//! # Example
//!
//! ```
//! use mockable::DefaultClock;
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//! use validator::Validate;
//! use wren::filtering::adapters::DeriveValidator;
//! use wren::filtering::domain::Message;
//! use wren::filtering::ports::selector::MessageSelector;
//! use wren::filtering::validation::ValidatingSelector;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize, Validate)]
//! struct Order {
//!     #[validate(length(min = 1))]
//!     customer: String,
//! }
//!
//! let clock = DefaultClock;
//! let selector = ValidatingSelector::new(Arc::new(DeriveValidator::new()));
//!
//! let order = Order { customer: "ACME".into() };
//! let message = Message::new(order, &clock);
//! assert!(selector.accept(&message).expect("engine raised no rejection"));
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;

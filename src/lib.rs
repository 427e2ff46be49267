//! Wren: payload-validating message filtering.
//!
//! This crate provides the message-filtering building blocks for the Wren
//! integration platform: a selector that validates a message's payload
//! against a pluggable validation engine, a filter endpoint that routes
//! rejected messages to a discard channel, and a declarative configuration
//! binder that wires the two together from named component references.
//!
//! # Architecture
//!
//! Wren follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (validation engines, channels)
//!
//! # Modules
//!
//! - [`filtering`]: Message envelope, validating selector, filter endpoint,
//!   and configuration binder

pub mod filtering;

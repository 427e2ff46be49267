//! Hint resolution strategies.
//!
//! Resolvers turn an in-flight message into the hints handed to a
//! hint-aware validation engine. The default strategy, [`NoHints`],
//! resolves to an empty list.

use crate::filtering::domain::{Message, ValidationHint};
use crate::filtering::ports::validator::HintsResolver;
use serde_json::Value;

/// The default resolver: no hints, ever.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHints;

impl<P> HintsResolver<P> for NoHints {
    fn resolve(&self, _message: &Message<P>) -> Vec<ValidationHint> {
        Vec::new()
    }
}

/// A resolver returning the same fixed hints for every message.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use wren::filtering::domain::{Message, ValidationHint};
/// use wren::filtering::ports::validator::HintsResolver;
/// use wren::filtering::validation::StaticHints;
///
/// let resolver = StaticHints::new(vec![ValidationHint::new("checkout")]);
/// let message = Message::new("payload", &DefaultClock);
/// assert_eq!(resolver.resolve(&message).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHints {
    hints: Vec<ValidationHint>,
}

impl StaticHints {
    /// Creates a resolver that always returns the given hints.
    #[must_use]
    pub const fn new(hints: Vec<ValidationHint>) -> Self {
        Self { hints }
    }
}

impl<P> HintsResolver<P> for StaticHints {
    fn resolve(&self, _message: &Message<P>) -> Vec<ValidationHint> {
        self.hints.clone()
    }
}

/// A resolver reading hints from a named message header.
///
/// A string-valued header yields a single hint; an array of strings yields
/// one hint per element. A missing header, or one of any other shape,
/// yields no hints.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use serde_json::json;
/// use wren::filtering::domain::{Message, ValidationHint};
/// use wren::filtering::ports::validator::HintsResolver;
/// use wren::filtering::validation::HeaderHints;
///
/// let resolver = HeaderHints::new("validation-groups");
/// let message = Message::builder("payload")
///     .with_header("validation-groups", json!(["checkout", "express"]))
///     .build(&DefaultClock);
/// assert_eq!(
///     resolver.resolve(&message),
///     vec![ValidationHint::new("checkout"), ValidationHint::new("express")],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HeaderHints {
    header: String,
}

impl HeaderHints {
    /// Creates a resolver reading the given header.
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }

    /// Returns the header this resolver reads.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }
}

impl<P> HintsResolver<P> for HeaderHints {
    fn resolve(&self, message: &Message<P>) -> Vec<ValidationHint> {
        match message.headers().get(&self.header) {
            Some(Value::String(hint)) => vec![ValidationHint::new(hint.clone())],
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(Value::as_str)
                .map(ValidationHint::new)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Adapter turning a closure into a resolver.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use wren::filtering::domain::{Message, ValidationHint};
/// use wren::filtering::ports::validator::HintsResolver;
/// use wren::filtering::validation::FnResolver;
///
/// let resolver = FnResolver::new(|message: &Message<String>| {
///     vec![ValidationHint::new(format!("for-{}", message.payload()))]
/// });
/// let message = Message::new("checkout".to_owned(), &DefaultClock);
/// assert_eq!(resolver.resolve(&message), vec![ValidationHint::new("for-checkout")]);
/// ```
#[derive(Debug, Clone)]
pub struct FnResolver<F>(F);

impl<F> FnResolver<F> {
    /// Wraps the given closure.
    pub const fn new(resolve: F) -> Self {
        Self(resolve)
    }
}

impl<P, F> HintsResolver<P> for FnResolver<F>
where
    F: Fn(&Message<P>) -> Vec<ValidationHint> + Send + Sync,
{
    fn resolve(&self, message: &Message<P>) -> Vec<ValidationHint> {
        (self.0)(message)
    }
}

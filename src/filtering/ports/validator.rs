//! Validation engine and hint resolution ports.
//!
//! Two engine capabilities exist: plain validation and hint-aware
//! validation. A selector decides once, at construction, which capability
//! to exercise; there is no per-call re-detection.

use crate::filtering::domain::{BindingResult, Message, ValidationHint};

/// Port for a payload validation engine.
///
/// Implementations evaluate the payload against their rule set and record
/// every violation on the supplied binding result. An engine must not
/// short-circuit on the first violation; callers rely on the full failure
/// list for reporting.
///
/// Implementations should be stateless and thread-safe: a single engine
/// instance is shared across concurrent selector calls.
pub trait PayloadValidator<P>: Send + Sync {
    /// Validates the payload, recording failures on `result`.
    fn validate(&self, payload: &P, result: &mut BindingResult);
}

/// Port for a validation engine that understands validation hints.
///
/// Hints select which rule groups apply for a particular call. Engines
/// that receive an empty hint slice should behave exactly like their plain
/// [`PayloadValidator::validate`] counterpart.
pub trait SmartPayloadValidator<P>: PayloadValidator<P> {
    /// Validates the payload under the given hints, recording failures on
    /// `result`.
    fn validate_with_hints(
        &self,
        payload: &P,
        result: &mut BindingResult,
        hints: &[ValidationHint],
    );
}

/// Port for resolving validation hints from an in-flight message.
///
/// Resolvers inspect the message (typically its headers) and produce the
/// hints handed to a hint-aware engine for that call. Ad-hoc resolvers
/// can be written as closures via
/// [`FnResolver`](crate::filtering::validation::FnResolver).
pub trait HintsResolver<P>: Send + Sync {
    /// Resolves the hints to apply when validating `message`.
    fn resolve(&self, message: &Message<P>) -> Vec<ValidationHint>;
}

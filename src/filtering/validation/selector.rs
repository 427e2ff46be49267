//! The payload-validating selector.
//!
//! Implements the [`MessageSelector`] port by running a validation engine
//! over a message's payload and inspecting the resulting binding result.

use crate::filtering::domain::{BindingResult, Message};
use crate::filtering::error::MessageRejectedError;
use crate::filtering::ports::selector::MessageSelector;
use crate::filtering::ports::validator::{
    HintsResolver, PayloadValidator, SmartPayloadValidator,
};
use crate::filtering::validation::resolver::NoHints;
use std::fmt;
use std::sync::Arc;

/// The validation capability fixed when the selector is constructed.
///
/// Hinted mode is chosen once, when the selector is built from a
/// hint-aware engine; there is no per-call re-detection.
enum ValidationStrategy<P> {
    Plain(Arc<dyn PayloadValidator<P>>),
    Hinted(Arc<dyn SmartPayloadValidator<P>>),
}

/// A message selector that validates the payload of each message.
///
/// For every call, the selector derives a [`BindingResult`] named after the
/// payload type, runs the validation engine, and accepts the message only
/// when no failures were recorded. Rejections either return `Ok(false)`
/// (the default) or raise [`MessageRejectedError`] when
/// [`set_throw_exception_on_rejection`](Self::set_throw_exception_on_rejection)
/// has enabled rejection-as-error.
///
/// The hints resolver and rejection flag are plain setters intended for
/// configuration-time mutation; after setup the selector is shared
/// read-only across callers.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
/// use validator::Validate;
/// use wren::filtering::adapters::DeriveValidator;
/// use wren::filtering::domain::Message;
/// use wren::filtering::ports::selector::MessageSelector;
/// use wren::filtering::validation::ValidatingSelector;
///
/// #[derive(Debug, Clone, Serialize, Deserialize, Validate)]
/// struct Signup {
///     #[validate(email)]
///     email: String,
/// }
///
/// let selector = ValidatingSelector::new(Arc::new(DeriveValidator::new()));
/// let clock = DefaultClock;
///
/// let valid = Message::new(Signup { email: "a@example.com".into() }, &clock);
/// assert!(selector.accept(&valid).expect("no rejection raised"));
///
/// let invalid = Message::new(Signup { email: "not-an-email".into() }, &clock);
/// assert!(!selector.accept(&invalid).expect("no rejection raised"));
/// ```
pub struct ValidatingSelector<P> {
    strategy: ValidationStrategy<P>,
    hints_resolver: Arc<dyn HintsResolver<P>>,
    throw_exception_on_rejection: bool,
}

impl<P> ValidatingSelector<P> {
    /// Creates a selector around a plain validation engine.
    ///
    /// The engine is invoked without hints on every call, regardless of any
    /// hints resolver configured later.
    #[must_use]
    pub fn new(validator: Arc<dyn PayloadValidator<P>>) -> Self {
        Self {
            strategy: ValidationStrategy::Plain(validator),
            hints_resolver: Arc::new(NoHints),
            throw_exception_on_rejection: false,
        }
    }

    /// Creates a selector around a hint-aware validation engine.
    ///
    /// Hinted mode is selected permanently: every call resolves hints from
    /// the message and passes them to the engine. The resolver defaults to
    /// [`NoHints`], so an engine sees an empty hint list until a custom
    /// resolver is configured.
    #[must_use]
    pub fn with_smart_validator(validator: Arc<dyn SmartPayloadValidator<P>>) -> Self {
        Self {
            strategy: ValidationStrategy::Hinted(validator),
            hints_resolver: Arc::new(NoHints),
            throw_exception_on_rejection: false,
        }
    }

    /// Replaces the hints resolver.
    ///
    /// Only meaningful for selectors built around a hint-aware engine; a
    /// plain engine never sees hints.
    pub fn set_hints_resolver(&mut self, resolver: Arc<dyn HintsResolver<P>>) {
        self.hints_resolver = resolver;
    }

    /// Controls whether rejection raises [`MessageRejectedError`] instead
    /// of quietly returning `false`. Defaults to `false`.
    pub const fn set_throw_exception_on_rejection(&mut self, throw: bool) {
        self.throw_exception_on_rejection = throw;
    }

    /// Returns `true` when rejection is raised as an error.
    #[must_use]
    pub const fn throws_on_rejection(&self) -> bool {
        self.throw_exception_on_rejection
    }

    /// Returns `true` when the selector exercises hint-aware validation.
    #[must_use]
    pub const fn is_hinted(&self) -> bool {
        matches!(self.strategy, ValidationStrategy::Hinted(_))
    }
}

impl<P> MessageSelector<P> for ValidatingSelector<P>
where
    P: Clone + fmt::Debug,
{
    fn accept(&self, message: &Message<P>) -> Result<bool, MessageRejectedError<P>> {
        let mut binding = BindingResult::for_payload::<P>();

        match &self.strategy {
            ValidationStrategy::Plain(validator) => {
                validator.validate(message.payload(), &mut binding);
            }
            ValidationStrategy::Hinted(validator) => {
                let hints = self.hints_resolver.resolve(message);
                validator.validate_with_hints(message.payload(), &mut binding, &hints);
            }
        }

        if binding.has_errors() {
            if self.throw_exception_on_rejection {
                return Err(MessageRejectedError::new(message.clone(), binding));
            }
            return Ok(false);
        }
        Ok(true)
    }
}

impl<P> fmt::Debug for ValidatingSelector<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.strategy {
            ValidationStrategy::Plain(_) => "plain",
            ValidationStrategy::Hinted(_) => "hinted",
        };
        f.debug_struct("ValidatingSelector")
            .field("mode", &mode)
            .field(
                "throw_exception_on_rejection",
                &self.throw_exception_on_rejection,
            )
            .finish_non_exhaustive()
    }
}

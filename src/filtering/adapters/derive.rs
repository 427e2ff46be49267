//! Validation engine backed by the `validator` crate.
//!
//! Payload types declare their rules with `#[derive(Validate)]`; this
//! adapter runs those rules and translates the outcome into binding-result
//! failures. It is the engine the configuration binder falls back to when
//! no validator reference is given.

use crate::filtering::domain::BindingResult;
use crate::filtering::ports::validator::PayloadValidator;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// A [`PayloadValidator`] for any payload implementing
/// [`validator::Validate`].
///
/// Nested struct errors are flattened into dotted field paths
/// (`address.street`); list errors gain an index segment
/// (`items[2].quantity`).
///
/// # Examples
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use validator::Validate;
/// use wren::filtering::adapters::DeriveValidator;
/// use wren::filtering::domain::BindingResult;
/// use wren::filtering::ports::validator::PayloadValidator;
///
/// #[derive(Debug, Serialize, Deserialize, Validate)]
/// struct Signup {
///     #[validate(email)]
///     email: String,
/// }
///
/// let engine = DeriveValidator::new();
/// let mut result = BindingResult::for_payload::<Signup>();
/// engine.validate(&Signup { email: "nope".into() }, &mut result);
/// assert_eq!(result.error_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeriveValidator;

impl DeriveValidator {
    /// Creates the engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<P> PayloadValidator<P> for DeriveValidator
where
    P: Validate,
{
    fn validate(&self, payload: &P, result: &mut BindingResult) {
        if let Err(errors) = payload.validate() {
            record_errors(&errors, "", result);
        }
    }
}

/// Flattens a `ValidationErrors` tree into field-level failures.
fn record_errors(errors: &ValidationErrors, prefix: &str, result: &mut BindingResult) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let message = failure.message.as_ref().map_or_else(
                        || format!("constraint '{}' violated", failure.code),
                        ToString::to_string,
                    );
                    result.reject_field(path.clone(), failure.code.to_string(), message);
                }
            }
            ValidationErrorsKind::Struct(nested) => record_errors(nested, &path, result),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    record_errors(nested, &format!("{path}[{index}]"), result);
                }
            }
        }
    }
}

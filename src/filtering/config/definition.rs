//! The declarative filter definition and its binding logic.

use crate::filtering::config::FilterRegistry;
use crate::filtering::error::ConfigError;
use crate::filtering::services::MessageFilter;
use crate::filtering::validation::ValidatingSelector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Declarative description of a validating filter.
///
/// Field names follow the external configuration surface (kebab-case
/// attributes). All fields are optional; an empty definition binds to a
/// filter around the registry's default validator with quiet rejection.
///
/// `throw-exception-on-rejection`, when present, is applied to both the
/// selector and the wrapping filter.
///
/// # Examples
///
/// ```
/// use wren::filtering::config::FilterDefinition;
///
/// let definition: FilterDefinition = serde_json::from_str(
///     r#"{
///         "validator": "order-rules",
///         "throw-exception-on-rejection": true,
///         "discard-channel": "rejected-orders",
///         "send-timeout": 500
///     }"#,
/// )
/// .expect("well-formed definition");
/// assert_eq!(definition.validator.as_deref(), Some("order-rules"));
/// assert_eq!(definition.send_timeout(), Some(std::time::Duration::from_millis(500)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FilterDefinition {
    /// Name of the validation engine; the registry's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<String>,

    /// Whether rejection raises an error instead of quietly declining.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throw_exception_on_rejection: Option<bool>,

    /// Name of the hints resolver feeding a hint-aware engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_hints_resolver: Option<String>,

    /// Name of the channel receiving declined messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discard_channel: Option<String>,

    /// Discard-send timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_timeout: Option<u64>,
}

impl FilterDefinition {
    /// Returns the discard-send timeout as a duration.
    #[must_use]
    pub const fn send_timeout(&self) -> Option<Duration> {
        match self.send_timeout {
            Some(millis) => Some(Duration::from_millis(millis)),
            None => None,
        }
    }

    /// Binds this definition against a registry, producing a ready filter.
    ///
    /// Validator resolution prefers a hint-aware engine: if the referenced
    /// name is registered as a smart validator the selector runs in hinted
    /// mode, otherwise a plain validator of that name is used. Without a
    /// reference, the registry's default validator applies.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a referenced validator, hints
    /// resolver, or channel is not registered, or when no validator
    /// reference is given and the registry has no default.
    pub fn build<P>(&self, registry: &FilterRegistry<P>) -> Result<MessageFilter<P>, ConfigError>
    where
        P: Clone + fmt::Debug + 'static,
    {
        let selector = self.build_selector(registry)?;
        let mut filter = MessageFilter::new(Arc::new(selector));

        if let Some(name) = &self.discard_channel {
            let channel = registry
                .channel(name)
                .ok_or_else(|| ConfigError::UnknownChannel(name.clone()))?;
            filter.set_discard_channel(channel);
        }
        if let Some(timeout) = self.send_timeout() {
            filter.set_send_timeout(timeout);
        }
        if let Some(throw) = self.throw_exception_on_rejection {
            filter.set_throw_exception_on_rejection(throw);
        }

        Ok(filter)
    }

    /// Binds only the selector half of this definition.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown validator or hints-resolver
    /// references, or when no validator can be resolved at all.
    pub fn build_selector<P>(
        &self,
        registry: &FilterRegistry<P>,
    ) -> Result<ValidatingSelector<P>, ConfigError> {
        let mut selector = match &self.validator {
            Some(name) => {
                if let Some(smart) = registry.smart_validator(name) {
                    ValidatingSelector::with_smart_validator(smart)
                } else if let Some(plain) = registry.validator(name) {
                    ValidatingSelector::new(plain)
                } else {
                    return Err(ConfigError::UnknownValidator(name.clone()));
                }
            }
            None => {
                let default = registry
                    .default_validator()
                    .ok_or(ConfigError::NoValidator)?;
                ValidatingSelector::new(default)
            }
        };

        if let Some(name) = &self.validation_hints_resolver {
            let resolver = registry
                .hints_resolver(name)
                .ok_or_else(|| ConfigError::UnknownHintsResolver(name.clone()))?;
            selector.set_hints_resolver(resolver);
        }
        if let Some(throw) = self.throw_exception_on_rejection {
            selector.set_throw_exception_on_rejection(throw);
        }

        Ok(selector)
    }
}

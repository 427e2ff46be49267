//! Named component registry for configuration binding.

use crate::filtering::adapters::DeriveValidator;
use crate::filtering::ports::channel::MessageChannel;
use crate::filtering::ports::validator::{HintsResolver, PayloadValidator, SmartPayloadValidator};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use validator::Validate;

/// Registry of named components a [`FilterDefinition`] may reference.
///
/// Holds validation engines (plain and hint-aware under separate names),
/// hint resolvers, and channels, plus an optional default validator used
/// when a definition names none.
///
/// [`FilterDefinition`]: crate::filtering::config::FilterDefinition
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use wren::filtering::adapters::InMemoryChannel;
/// use wren::filtering::config::FilterRegistry;
///
/// let registry: FilterRegistry<String> = FilterRegistry::new()
///     .with_channel("rejected-orders", Arc::new(InMemoryChannel::new("rejected-orders")));
/// assert!(registry.channel("rejected-orders").is_some());
/// ```
pub struct FilterRegistry<P> {
    validators: HashMap<String, Arc<dyn PayloadValidator<P>>>,
    smart_validators: HashMap<String, Arc<dyn SmartPayloadValidator<P>>>,
    hints_resolvers: HashMap<String, Arc<dyn HintsResolver<P>>>,
    channels: HashMap<String, Arc<dyn MessageChannel<P>>>,
    default_validator: Option<Arc<dyn PayloadValidator<P>>>,
}

impl<P> FilterRegistry<P> {
    /// Creates an empty registry with no default validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: HashMap::new(),
            smart_validators: HashMap::new(),
            hints_resolvers: HashMap::new(),
            channels: HashMap::new(),
            default_validator: None,
        }
    }

    /// Registers a plain validation engine under a name.
    #[must_use]
    pub fn with_validator(
        mut self,
        name: impl Into<String>,
        validator: Arc<dyn PayloadValidator<P>>,
    ) -> Self {
        self.validators.insert(name.into(), validator);
        self
    }

    /// Registers a hint-aware validation engine under a name.
    ///
    /// When a definition references this name, the bound selector runs in
    /// hinted mode.
    #[must_use]
    pub fn with_smart_validator(
        mut self,
        name: impl Into<String>,
        validator: Arc<dyn SmartPayloadValidator<P>>,
    ) -> Self {
        self.smart_validators.insert(name.into(), validator);
        self
    }

    /// Registers a hints resolver under a name.
    #[must_use]
    pub fn with_hints_resolver(
        mut self,
        name: impl Into<String>,
        resolver: Arc<dyn HintsResolver<P>>,
    ) -> Self {
        self.hints_resolvers.insert(name.into(), resolver);
        self
    }

    /// Registers a channel under a name.
    #[must_use]
    pub fn with_channel(
        mut self,
        name: impl Into<String>,
        channel: Arc<dyn MessageChannel<P>>,
    ) -> Self {
        self.channels.insert(name.into(), channel);
        self
    }

    /// Sets the validator used when a definition names none.
    #[must_use]
    pub fn with_default_validator(mut self, validator: Arc<dyn PayloadValidator<P>>) -> Self {
        self.default_validator = Some(validator);
        self
    }

    /// Looks up a plain validator by name.
    #[must_use]
    pub fn validator(&self, name: &str) -> Option<Arc<dyn PayloadValidator<P>>> {
        self.validators.get(name).cloned()
    }

    /// Looks up a hint-aware validator by name.
    #[must_use]
    pub fn smart_validator(&self, name: &str) -> Option<Arc<dyn SmartPayloadValidator<P>>> {
        self.smart_validators.get(name).cloned()
    }

    /// Looks up a hints resolver by name.
    #[must_use]
    pub fn hints_resolver(&self, name: &str) -> Option<Arc<dyn HintsResolver<P>>> {
        self.hints_resolvers.get(name).cloned()
    }

    /// Looks up a channel by name.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<Arc<dyn MessageChannel<P>>> {
        self.channels.get(name).cloned()
    }

    /// Returns the default validator, if one is set.
    #[must_use]
    pub fn default_validator(&self) -> Option<Arc<dyn PayloadValidator<P>>> {
        self.default_validator.clone()
    }
}

impl<P> FilterRegistry<P>
where
    P: Validate,
{
    /// Creates a registry whose default validator is the standard
    /// derive-rule engine.
    ///
    /// This mirrors the declarative surface's behaviour of constructing a
    /// standard validator locally when no `validator` reference is given.
    #[must_use]
    pub fn with_standard_default() -> Self {
        Self::new().with_default_validator(Arc::new(DeriveValidator::new()))
    }
}

impl<P> Default for FilterRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for FilterRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("validators", &self.validators.keys().collect::<Vec<_>>())
            .field(
                "smart_validators",
                &self.smart_validators.keys().collect::<Vec<_>>(),
            )
            .field(
                "hints_resolvers",
                &self.hints_resolvers.keys().collect::<Vec<_>>(),
            )
            .field("channels", &self.channels.keys().collect::<Vec<_>>())
            .field("has_default_validator", &self.default_validator.is_some())
            .finish()
    }
}

//! Error types for message filtering and configuration binding.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::domain::{BindingResult, Message};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Raised when a validating selector rejects a message and
/// rejection-as-error is enabled.
///
/// Carries the original message and the structured validation failures so
/// callers can route or report the rejection.
#[derive(Debug, Clone, Error)]
#[error("message was rejected by payload validation: {errors}")]
pub struct MessageRejectedError<P>
where
    P: fmt::Debug,
{
    message: Message<P>,
    errors: BindingResult,
}

impl<P> MessageRejectedError<P>
where
    P: fmt::Debug,
{
    /// Creates a rejection error from the offending message and its
    /// binding result.
    #[must_use]
    pub fn new(message: Message<P>, errors: BindingResult) -> Self {
        Self { message, errors }
    }

    /// Returns the rejected message.
    #[must_use]
    pub const fn message(&self) -> &Message<P> {
        &self.message
    }

    /// Returns the validation failures that caused the rejection.
    #[must_use]
    pub const fn errors(&self) -> &BindingResult {
        &self.errors
    }

    /// Consumes the error, returning the message and binding result.
    #[must_use]
    pub fn into_parts(self) -> (Message<P>, BindingResult) {
        (self.message, self.errors)
    }
}

/// Errors that can occur when sending to a message channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelSendError {
    /// The channel has been closed and accepts no further messages.
    #[error("channel '{0}' is closed")]
    Closed(String),

    /// The channel is at capacity.
    #[error("channel '{channel}' is at capacity ({capacity})")]
    Full {
        /// The name of the full channel.
        channel: String,
        /// The configured capacity.
        capacity: usize,
    },

    /// The send did not complete within the allotted timeout.
    ///
    /// Only blocking channel adapters produce this; the in-memory adapter
    /// never waits and so never reports it.
    #[error("send to channel '{channel}' timed out after {timeout:?}")]
    Timeout {
        /// The name of the channel.
        channel: String,
        /// The timeout that elapsed.
        timeout: Duration,
    },
}

/// Errors that can occur while a filter endpoint processes a message.
#[derive(Debug, Error)]
pub enum FilterError<P>
where
    P: fmt::Debug,
{
    /// The selector rejected the message with validation failures.
    #[error(transparent)]
    Rejected(#[from] MessageRejectedError<P>),

    /// The selector declined the message and the filter is configured to
    /// raise on rejection. Any configured discard routing has already
    /// happened by the time this is returned.
    #[error("message did not pass the filter selector")]
    NotAccepted {
        /// The declined message.
        message: Message<P>,
    },

    /// The rejected message could not be delivered to the discard channel.
    #[error("failed to hand rejected message to discard channel: {source}")]
    Discard {
        /// The undeliverable message.
        message: Message<P>,
        /// The underlying channel failure.
        #[source]
        source: ChannelSendError,
    },
}

impl<P> FilterError<P>
where
    P: fmt::Debug,
{
    /// Returns the message the failure relates to.
    #[must_use]
    pub const fn message(&self) -> &Message<P> {
        match self {
            Self::Rejected(rejected) => rejected.message(),
            Self::NotAccepted { message } | Self::Discard { message, .. } => message,
        }
    }
}

/// Errors that can occur while binding a filter definition to components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The definition names no validator and the registry has no default.
    #[error("no validator reference given and no default validator registered")]
    NoValidator,

    /// The named validator is not registered.
    #[error("unknown validator reference '{0}'")]
    UnknownValidator(String),

    /// The named hints resolver is not registered.
    #[error("unknown validation-hints-resolver reference '{0}'")]
    UnknownHintsResolver(String),

    /// The named discard channel is not registered.
    #[error("unknown discard-channel reference '{0}'")]
    UnknownChannel(String),
}

//! The filter endpoint: pass-through, discard, or raise.

use crate::filtering::domain::Message;
use crate::filtering::error::FilterError;
use crate::filtering::ports::channel::MessageChannel;
use crate::filtering::ports::selector::MessageSelector;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A filter endpoint wrapping a message selector.
///
/// Accepted messages pass through unchanged. Declined messages are sent to
/// the discard channel when one is configured; afterwards they are either
/// quietly dropped or, with rejection-as-error enabled on the endpoint,
/// raised as [`FilterError::NotAccepted`]. A selector that raises its own
/// rejection error propagates as [`FilterError::Rejected`].
///
/// Like the selector, the endpoint is mutated only during configuration
/// and shared read-only afterwards.
pub struct MessageFilter<P>
where
    P: fmt::Debug,
{
    selector: Arc<dyn MessageSelector<P>>,
    discard_channel: Option<Arc<dyn MessageChannel<P>>>,
    send_timeout: Option<Duration>,
    throw_exception_on_rejection: bool,
}

impl<P> MessageFilter<P>
where
    P: Clone + fmt::Debug,
{
    /// Creates a filter around the given selector, with no discard
    /// channel and quiet rejection.
    #[must_use]
    pub fn new(selector: Arc<dyn MessageSelector<P>>) -> Self {
        Self {
            selector,
            discard_channel: None,
            send_timeout: None,
            throw_exception_on_rejection: false,
        }
    }

    /// Routes declined messages to the given channel before dropping or
    /// raising.
    pub fn set_discard_channel(&mut self, channel: Arc<dyn MessageChannel<P>>) {
        self.discard_channel = Some(channel);
    }

    /// Bounds the time a discard send may take.
    pub const fn set_send_timeout(&mut self, timeout: Duration) {
        self.send_timeout = Some(timeout);
    }

    /// Controls whether a declined message raises
    /// [`FilterError::NotAccepted`] after any discard routing. Defaults to
    /// `false`.
    ///
    /// Typically this is left unset when a discard channel is provided,
    /// but both may be active: the message is sent to the discard channel
    /// first and the error raised afterwards.
    pub const fn set_throw_exception_on_rejection(&mut self, throw: bool) {
        self.throw_exception_on_rejection = throw;
    }

    /// Returns the configured send timeout, if any.
    #[must_use]
    pub const fn send_timeout(&self) -> Option<Duration> {
        self.send_timeout
    }

    /// Runs one message through the filter.
    ///
    /// Returns `Ok(Some(message))` for accepted messages and `Ok(None)`
    /// for messages that were declined and dropped (or discarded).
    ///
    /// # Errors
    ///
    /// - [`FilterError::Rejected`] when the selector raises its own
    ///   rejection error; no discard routing happens in this case.
    /// - [`FilterError::Discard`] when the discard channel cannot take the
    ///   declined message.
    /// - [`FilterError::NotAccepted`] when rejection-as-error is enabled
    ///   on this endpoint, after any discard routing completed.
    pub fn filter(&self, message: Message<P>) -> Result<Option<Message<P>>, FilterError<P>> {
        if self.selector.accept(&message)? {
            return Ok(Some(message));
        }

        if let Some(channel) = &self.discard_channel {
            if let Err(source) = channel.send(message.clone(), self.send_timeout) {
                return Err(FilterError::Discard { message, source });
            }
        }

        if self.throw_exception_on_rejection {
            return Err(FilterError::NotAccepted { message });
        }
        Ok(None)
    }
}

impl<P> fmt::Debug for MessageFilter<P>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageFilter")
            .field("has_discard_channel", &self.discard_channel.is_some())
            .field("send_timeout", &self.send_timeout)
            .field(
                "throw_exception_on_rejection",
                &self.throw_exception_on_rejection,
            )
            .finish_non_exhaustive()
    }
}

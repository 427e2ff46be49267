//! Channel port: the destination abstraction for message routing.

use crate::filtering::domain::Message;
use crate::filtering::error::ChannelSendError;
use std::time::Duration;

/// Port for a named message destination.
///
/// Filter endpoints use a channel as the discard destination for declined
/// messages. Sends are synchronous and bounded; the optional timeout is a
/// hint honoured by implementations that can block.
pub trait MessageChannel<P>: Send + Sync {
    /// Returns the channel's name, used in error reporting.
    fn name(&self) -> &str;

    /// Sends a message to this channel.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelSendError`] if the channel is closed, full, or the
    /// send does not complete within `timeout`.
    fn send(&self, message: Message<P>, timeout: Option<Duration>) -> Result<(), ChannelSendError>;
}

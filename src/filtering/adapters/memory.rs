//! In-memory channel adapter.
//!
//! A thread-safe collecting channel suitable for unit tests and as a
//! discard destination in small deployments.

use crate::filtering::domain::Message;
use crate::filtering::error::ChannelSendError;
use crate::filtering::ports::channel::MessageChannel;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

struct ChannelState<P> {
    messages: Vec<Message<P>>,
    closed: bool,
}

/// A named channel that stores sent messages in memory.
///
/// Sends never block, so the timeout argument is never exercised. An
/// optional capacity turns the channel into a bounded buffer that reports
/// [`ChannelSendError::Full`] once reached; [`close`](Self::close) makes
/// all later sends report [`ChannelSendError::Closed`].
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use wren::filtering::adapters::InMemoryChannel;
/// use wren::filtering::domain::Message;
/// use wren::filtering::ports::channel::MessageChannel;
///
/// let channel = InMemoryChannel::new("discard");
/// channel
///     .send(Message::new("rejected payload", &DefaultClock), None)
///     .expect("channel is open");
/// assert_eq!(channel.len(), 1);
/// ```
pub struct InMemoryChannel<P> {
    name: String,
    capacity: Option<usize>,
    state: Mutex<ChannelState<P>>,
}

impl<P> InMemoryChannel<P> {
    /// Creates an unbounded channel with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity: None,
            state: Mutex::new(ChannelState {
                messages: Vec::new(),
                closed: false,
            }),
        }
    }

    /// Creates a bounded channel that rejects sends once `capacity`
    /// messages are buffered.
    #[must_use]
    pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            capacity: Some(capacity),
            state: Mutex::new(ChannelState {
                messages: Vec::new(),
                closed: false,
            }),
        }
    }

    /// Closes the channel; subsequent sends fail.
    pub fn close(&self) {
        self.lock_state().closed = true;
    }

    /// Returns the number of buffered messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_state().messages.len()
    }

    /// Returns `true` if no messages are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_state().messages.is_empty()
    }

    /// Removes and returns all buffered messages.
    pub fn drain(&self) -> Vec<Message<P>> {
        std::mem::take(&mut self.lock_state().messages)
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ChannelState<P>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P> InMemoryChannel<P>
where
    P: Clone,
{
    /// Returns a copy of the buffered messages in arrival order.
    #[must_use]
    pub fn received(&self) -> Vec<Message<P>> {
        self.lock_state().messages.clone()
    }
}

impl<P> MessageChannel<P> for InMemoryChannel<P>
where
    P: Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn send(
        &self,
        message: Message<P>,
        _timeout: Option<Duration>,
    ) -> Result<(), ChannelSendError> {
        let mut state = self.lock_state();
        if state.closed {
            return Err(ChannelSendError::Closed(self.name.clone()));
        }
        if let Some(capacity) = self.capacity
            && state.messages.len() >= capacity
        {
            return Err(ChannelSendError::Full {
                channel: self.name.clone(),
                capacity,
            });
        }
        state.messages.push(message);
        Ok(())
    }
}

impl<P> std::fmt::Debug for InMemoryChannel<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryChannel")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

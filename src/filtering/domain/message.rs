//! The message envelope carrying a typed payload through the filtering layer.
//!
//! Messages are immutable after creation: the filtering layer inspects them
//! and routes them, but never rewrites them.

use super::{MessageHeaders, MessageId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message flowing through a Wren channel.
///
/// The envelope pairs an opaque payload of type `P` with header metadata
/// and a creation timestamp. Selectors decide acceptance by inspecting the
/// payload; hint resolvers may additionally consult the headers.
///
/// # Invariants
///
/// - `id` is always a valid, non-nil UUID
/// - `created_at` is always populated
/// - The payload is present by construction; there is no "empty" message
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use wren::filtering::domain::Message;
///
/// let clock = DefaultClock;
/// let message = Message::new("hello", &clock);
/// assert_eq!(*message.payload(), "hello");
/// assert!(message.headers().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message<P> {
    /// Unique identifier for this message.
    id: MessageId,

    /// The application payload.
    payload: P,

    /// Associated header metadata.
    headers: MessageHeaders,

    /// When the message was created.
    created_at: DateTime<Utc>,
}

impl<P> Message<P> {
    /// Creates a new message with empty headers and the current timestamp.
    #[must_use]
    pub fn new(payload: P, clock: &impl Clock) -> Self {
        Self {
            id: MessageId::new(),
            payload,
            headers: MessageHeaders::empty(),
            created_at: clock.utc(),
        }
    }

    /// Starts building a message with full control over headers and ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use mockable::DefaultClock;
    /// use serde_json::json;
    /// use wren::filtering::domain::Message;
    ///
    /// let clock = DefaultClock;
    /// let message = Message::builder("hello")
    ///     .with_header("priority", json!("express"))
    ///     .build(&clock);
    /// assert_eq!(message.headers().get_str("priority"), Some("express"));
    /// ```
    #[must_use]
    pub fn builder(payload: P) -> MessageBuilder<P> {
        MessageBuilder::new(payload)
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns a reference to the payload.
    #[must_use]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Consumes the message, returning the payload.
    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Returns the header metadata.
    #[must_use]
    pub const fn headers(&self) -> &MessageHeaders {
        &self.headers
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builder for constructing messages with explicit headers or a fixed ID.
#[derive(Debug)]
pub struct MessageBuilder<P> {
    id: Option<MessageId>,
    payload: P,
    headers: MessageHeaders,
}

impl<P> MessageBuilder<P> {
    /// Creates a new message builder for the given payload.
    #[must_use]
    pub fn new(payload: P) -> Self {
        Self {
            id: None,
            payload,
            headers: MessageHeaders::empty(),
        }
    }

    /// Sets an explicit message ID instead of generating one.
    #[must_use]
    pub const fn with_id(mut self, id: MessageId) -> Self {
        self.id = Some(id);
        self
    }

    /// Adds a header to the message.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: Value) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Replaces all headers with the given map.
    #[must_use]
    pub fn with_headers(mut self, headers: MessageHeaders) -> Self {
        self.headers = headers;
        self
    }

    /// Builds the message, stamping it with the clock's current time.
    #[must_use]
    pub fn build(self, clock: &impl Clock) -> Message<P> {
        Message {
            id: self.id.unwrap_or_default(),
            payload: self.payload,
            headers: self.headers,
            created_at: clock.utc(),
        }
    }
}

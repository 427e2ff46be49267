//! Selector port: the accept/decline decision consumed by filter endpoints.

use crate::filtering::domain::Message;
use crate::filtering::error::MessageRejectedError;
use std::fmt;

/// Port for deciding whether a message passes a filter.
///
/// # Contract
///
/// - `Ok(true)`: the message is accepted and flows onward.
/// - `Ok(false)`: the message is declined; the caller decides whether to
///   drop it or route it to a discard destination.
/// - `Err(MessageRejectedError)`: the selector is configured to raise on
///   rejection; the error carries the message and the failure details.
///
/// Selectors are shared read-only across concurrent callers after
/// configuration-time setup; implementations must be `Send + Sync` and
/// must not mutate internal state during [`accept`](Self::accept).
pub trait MessageSelector<P>: Send + Sync
where
    P: fmt::Debug,
{
    /// Decides whether the message is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRejectedError`] when the implementation treats
    /// rejection as a failure rather than a quiet decline.
    fn accept(&self, message: &Message<P>) -> Result<bool, MessageRejectedError<P>>;
}

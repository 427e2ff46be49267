//! Port interfaces for the filtering subsystem.
//!
//! Ports define the abstract contracts between the filtering core and its
//! collaborators: validation engines, hint resolution strategies, message
//! selectors, and message channels.

pub mod channel;
pub mod selector;
pub mod validator;

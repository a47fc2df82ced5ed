//! Event handling for the application.
//!
//! This module turns prompt input into application events.

mod handler;
mod keys;

pub use handler::EventHandler;
pub use keys::{Action, UnknownAction};

/// An application event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A recognized action token.
    Action(Action),
    /// The session should end.
    Quit(QuitReason),
}

/// Why the session is ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuitReason {
    /// A line that was not an action token.
    Unrecognized(String),
    /// The input stream was closed.
    EndOfInput,
}

//! Command system for the light switch.
//!
//! This module provides:
//! - The undoable [`Command`] variants
//! - The [`Switch`] invoker with its undo history

mod command;
mod switch;

pub use command::Command;
pub use switch::{Switch, SwitchError};

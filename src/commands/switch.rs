//! The switch that invokes commands and keeps an undo history.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use super::Command;
use crate::light::Light;

/// Errors raised by [`Switch`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// `pop` was called with nothing in the history.
    #[error("Nothing to undo: the switch history is empty")]
    EmptyHistory,
}

/// Invoker that executes commands and records them for undo.
///
/// Every command in the history has been executed and not yet undone.
/// Undo follows stack order: only the most recent command can be reverted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Switch {
    /// Executed commands, oldest first.
    history: Vec<Command>,
}

impl Switch {
    /// Create a switch with an empty history.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Record `cmd` at the end of the history, then execute it.
    pub fn store_and_execute(&mut self, cmd: Command, light: &mut Light) {
        self.history.push(cmd);
        cmd.execute(light);
        debug!(command = %cmd, light = light.state_label(), depth = self.history.len(), "Executed command");
    }

    /// Remove the most recent command, undo it and return it.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::EmptyHistory`] when there is nothing to undo.
    /// The switch and the light are left untouched in that case.
    pub fn pop(&mut self, light: &mut Light) -> Result<Command, SwitchError> {
        let Some(last) = self.history.pop() else {
            warn!("Undo requested with empty history");
            return Err(SwitchError::EmptyHistory);
        };
        last.undo(light);
        debug!(command = %last, light = light.state_label(), depth = self.history.len(), "Undid command");
        Ok(last)
    }

    /// Executed commands, oldest first.
    pub fn history(&self) -> &[Command] {
        &self.history
    }

    /// Number of commands in the history.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.history.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

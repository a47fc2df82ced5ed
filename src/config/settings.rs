//! Prompt display settings.

use serde::{Deserialize, Serialize};

use crate::cli::Args;

/// Default prompt shown before each input line.
pub const DEFAULT_PROMPT: &str = "Input action 'on'/'off'/'undo': ";

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The prompt printed before reading an action.
    pub prompt: String,
    /// Whether the status line lists the switch history.
    pub show_history: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_history: true,
        }
    }
}

impl Settings {
    /// Apply command-line overrides on top of the loaded settings.
    pub fn apply_args(&mut self, args: &Args) {
        if args.no_history {
            self.show_history = false;
        }
    }
}

//! Input tokens recognized at the prompt.

use std::fmt;
use std::str::FromStr;

/// An action requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `on`: flip the switch up.
    On,
    /// `off`: flip the switch down.
    Off,
    /// `undo`: revert the most recent flip.
    Undo,
}

impl Action {
    /// The literal token for this action.
    pub fn token(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Undo => "undo",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returned when a token is not one of `on`, `off` or `undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "undo" => Ok(Self::Undo),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

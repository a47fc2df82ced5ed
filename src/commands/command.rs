//! Undoable commands that act on a [`Light`].

use std::fmt;

use crate::light::Light;

/// A reversible action against a light.
///
/// The target light is supplied on every call rather than stored, so a
/// command never owns the light and the same command value can be replayed
/// against it any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Turns the light on; undo turns it off.
    FlipUp,
    /// Turns the light off; undo turns it on.
    FlipDown,
}

impl Command {
    /// Perform the forward action.
    pub fn execute(&self, light: &mut Light) {
        match self {
            Self::FlipUp => light.turn_on(),
            Self::FlipDown => light.turn_off(),
        }
    }

    /// Perform the exact inverse of [`Command::execute`].
    pub fn undo(&self, light: &mut Light) {
        match self {
            Self::FlipUp => light.turn_off(),
            Self::FlipDown => light.turn_on(),
        }
    }

    /// The command whose forward action is this command's undo.
    pub fn inverse(&self) -> Self {
        match self {
            Self::FlipUp => Self::FlipDown,
            Self::FlipDown => Self::FlipUp,
        }
    }

    /// Display name used in the history listing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FlipUp => "FlipUp",
            Self::FlipDown => "FlipDown",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Command; 2] = [Command::FlipUp, Command::FlipDown];

    fn light_with(on: bool) -> Light {
        let mut light = Light::new();
        if on {
            light.turn_on();
        }
        light
    }

    #[test]
    fn test_flip_up_execute() {
        let mut light = Light::new();
        Command::FlipUp.execute(&mut light);
        assert!(light.is_on());
    }

    #[test]
    fn test_flip_down_execute() {
        let mut light = light_with(true);
        Command::FlipDown.execute(&mut light);
        assert!(!light.is_on());
    }

    #[test]
    fn test_undo_ignores_prior_state() {
        for start in [false, true] {
            let mut light = light_with(start);
            Command::FlipUp.undo(&mut light);
            assert!(!light.is_on(), "FlipUp undo from {start} should be off");

            let mut light = light_with(start);
            Command::FlipDown.undo(&mut light);
            assert!(light.is_on(), "FlipDown undo from {start} should be on");
        }
    }

    #[test]
    fn test_undo_reverts_execute() {
        for cmd in ALL {
            for start in [false, true] {
                let mut light = light_with(start);
                let before = light.is_on();
                // Only meaningful when execute actually changed something.
                cmd.execute(&mut light);
                if light.is_on() != before {
                    cmd.undo(&mut light);
                    assert_eq!(light.is_on(), before);
                }
            }
        }
    }

    #[test]
    fn test_inverse_matches_undo() {
        for cmd in ALL {
            for start in [false, true] {
                let mut undone = light_with(start);
                let mut inverted = light_with(start);
                cmd.undo(&mut undone);
                cmd.inverse().execute(&mut inverted);
                assert_eq!(undone, inverted);
            }
            assert_eq!(cmd.inverse().inverse(), cmd);
        }
    }

    #[test]
    fn test_many_commands_share_one_light() {
        let mut light = Light::new();
        let up = Command::FlipUp;
        let down = Command::FlipDown;
        up.execute(&mut light);
        down.execute(&mut light);
        up.execute(&mut light);
        assert!(light.is_on());
    }

    #[test]
    fn test_names_and_display() {
        assert_eq!(Command::FlipUp.name(), "FlipUp");
        assert_eq!(Command::FlipDown.name(), "FlipDown");
        assert_eq!(Command::FlipUp.to_string(), "FlipUp");
        assert_eq!(Command::FlipDown.to_string(), "FlipDown");
    }
}

//! The lamp being switched.

use std::fmt;

/// A lamp with a single on/off state.
///
/// Starts switched off and only changes through [`Light::turn_on`] and
/// [`Light::turn_off`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Light {
    on: bool,
}

impl Light {
    /// Create a new light, switched off.
    pub fn new() -> Self {
        Self { on: false }
    }

    /// Switch the light on.
    pub fn turn_on(&mut self) {
        self.on = true;
    }

    /// Switch the light off.
    pub fn turn_off(&mut self) {
        self.on = false;
    }

    /// Returns whether the light is on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// The bare state word, `ON` or `OFF`.
    pub fn state_label(&self) -> &'static str {
        if self.on {
            "ON"
        } else {
            "OFF"
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Light({})", self.state_label())
    }
}

//! Main application state and prompt loop.
//!
//! All state changes flow through [`App::update`]; [`App::run`] renders the
//! status line, reads the next event and applies it until the session ends.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::commands::{Command, Switch};
use crate::config::Settings;
use crate::error::Result;
use crate::events::{Action, Event, EventHandler, QuitReason};
use crate::light::Light;

/// The main application struct that holds all state.
///
/// The light and the switch are only ever mutated together through
/// [`App::update`], so the history always describes the light's state.
pub struct App {
    /// The receiver.
    light: Light,
    /// The invoker and its undo history.
    switch: Switch,
    /// Prompt and display settings.
    settings: Settings,
    /// Set once a quit event has been handled.
    quit_reason: Option<QuitReason>,
    /// Message for the user produced by the last update.
    notice: Option<String>,
}

impl App {
    /// Create a new application instance with the light off and no history.
    pub fn new(settings: Settings) -> Self {
        debug!(?settings, "Creating new application instance");
        Self {
            light: Light::new(),
            switch: Switch::new(),
            settings,
            quit_reason: None,
            notice: None,
        }
    }

    /// The light being switched.
    pub fn light(&self) -> &Light {
        &self.light
    }

    /// The switch and its history.
    pub fn switch(&self) -> &Switch {
        &self.switch
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.quit_reason.is_some()
    }

    /// Why the session ended, once it has.
    pub fn quit_reason(&self) -> Option<&QuitReason> {
        self.quit_reason.as_ref()
    }

    /// Take the pending user notice, if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Action(action) => {
                if let Err(e) = self.apply(action) {
                    debug!(error = %e, "Action failed");
                    self.notice = Some(e.user_message());
                }
            }
            Event::Quit(reason) => {
                info!(?reason, "Quit event received");
                self.quit_reason = Some(reason);
            }
        }
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::On => self.switch.store_and_execute(Command::FlipUp, &mut self.light),
            Action::Off => self
                .switch
                .store_and_execute(Command::FlipDown, &mut self.light),
            Action::Undo => {
                self.switch.pop(&mut self.light)?;
            }
        }
        Ok(())
    }

    /// The line printed before each prompt.
    pub fn status_line(&self) -> String {
        if self.settings.show_history {
            format!("Lamp: {}   History: {}", self.light, self.switch)
        } else {
            format!("Lamp: {}", self.light)
        }
    }

    /// Run the prompt loop until a quit event.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        events: &mut EventHandler<R>,
        out: &mut W,
    ) -> Result<()> {
        while !self.should_quit() {
            writeln!(out, "{}", self.status_line())?;
            write!(out, "{}", self.settings.prompt)?;
            out.flush()?;

            let event = events.next()?;
            writeln!(out)?;
            self.update(event);

            if let Some(notice) = self.take_notice() {
                writeln!(out, "{}", notice)?;
            }
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

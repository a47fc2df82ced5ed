//! Event handler implementation.
//!
//! Reads lines from the input and converts them to application events.

use std::io::BufRead;

use tracing::trace;

use super::{Action, Event, QuitReason};

/// Produces application events from line-oriented input.
pub struct EventHandler<R> {
    /// The line source, usually locked stdin.
    input: R,
    /// Reused line buffer.
    line: String,
}

impl<R: BufRead> EventHandler<R> {
    /// Create a new event handler reading from `input`.
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }

    /// Read the next event.
    ///
    /// Blocks until a full line is available. Only the line terminator is
    /// stripped, so a token with surrounding spaces is not an action. End of
    /// input yields `Event::Quit(QuitReason::EndOfInput)`.
    pub fn next(&mut self) -> std::io::Result<Event> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            trace!("End of input");
            return Ok(Event::Quit(QuitReason::EndOfInput));
        }

        let token = self.line.trim_end_matches(['\r', '\n']);
        trace!(token, "Input line");
        Ok(match token.parse::<Action>() {
            Ok(action) => Event::Action(action),
            Err(unknown) => Event::Quit(QuitReason::Unrecognized(unknown.0)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_actions_in_order() {
        let mut handler = EventHandler::new(Cursor::new("on\noff\nundo\n"));
        assert_eq!(handler.next().unwrap(), Event::Action(Action::On));
        assert_eq!(handler.next().unwrap(), Event::Action(Action::Off));
        assert_eq!(handler.next().unwrap(), Event::Action(Action::Undo));
        assert_eq!(
            handler.next().unwrap(),
            Event::Quit(QuitReason::EndOfInput)
        );
    }

    #[test]
    fn test_strips_line_endings() {
        let mut handler = EventHandler::new(Cursor::new("on\r\noff\n"));
        assert_eq!(handler.next().unwrap(), Event::Action(Action::On));
        assert_eq!(handler.next().unwrap(), Event::Action(Action::Off));
    }

    #[test]
    fn test_padded_token_quits() {
        let mut handler = EventHandler::new(Cursor::new("  on  \n"));
        assert_eq!(
            handler.next().unwrap(),
            Event::Quit(QuitReason::Unrecognized("  on  ".to_string()))
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut handler = EventHandler::new(Cursor::new("undo"));
        assert_eq!(handler.next().unwrap(), Event::Action(Action::Undo));
        assert_eq!(
            handler.next().unwrap(),
            Event::Quit(QuitReason::EndOfInput)
        );
    }

    #[test]
    fn test_unrecognized_token_quits() {
        let mut handler = EventHandler::new(Cursor::new("dim\non\n"));
        assert_eq!(
            handler.next().unwrap(),
            Event::Quit(QuitReason::Unrecognized("dim".to_string()))
        );
    }

    #[test]
    fn test_blank_line_quits() {
        let mut handler = EventHandler::new(Cursor::new("\n"));
        assert_eq!(
            handler.next().unwrap(),
            Event::Quit(QuitReason::Unrecognized(String::new()))
        );
    }
}

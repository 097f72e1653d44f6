//! The interactive loop: read a line, hand it to the session, print the response.

use log::info;
use std::io::Write;

use crate::editor::{LineEditor, ReadResult};
use crate::error::TerminalError;
use crate::session::{Response, Session, Status};

/// Drives a [`Session`] from a [`LineEditor`] until the game ends.
pub struct GameLoop<E: LineEditor, W: Write> {
    session: Session,
    editor: E,
    out: W,
}

impl<E: LineEditor, W: Write> GameLoop<E, W> {
    pub fn new(session: Session, editor: E, out: W) -> Self {
        Self {
            session,
            editor,
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_parts(self) -> (Session, E, W) {
        (self.session, self.editor, self.out)
    }

    /// Play until the player wins, quits, or input ends.
    ///
    /// Returns the final status, which is always [`Status::Won`] or [`Status::Quit`].
    pub fn run(&mut self) -> Result<Status, TerminalError> {
        let opening = self.session.start();
        self.print(&opening)?;

        loop {
            // Clarification replies are read with the bare prompt.
            if self.session.status() == Status::Continue {
                writeln!(self.out, "{}", self.session.config().turn_prompt)?;
            }
            self.out.flush()?;

            let prompt = self.session.config().prompt.clone();
            let response = match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    self.session.handle_line(&line)
                }
                ReadResult::Interrupted => self.session.handle_line(""),
                ReadResult::Eof => self.session.end_of_input(),
            };
            self.print(&response)?;

            if response.status.is_finished() {
                info!("Game over: {:?}", response.status);
                return Ok(response.status);
            }
        }
    }

    fn print(&mut self, response: &Response) -> Result<(), TerminalError> {
        for line in &response.lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

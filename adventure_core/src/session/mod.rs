//! The game state machine.
//!
//! A session is always in one of four modes:
//!
//! 1. **Awaiting a command**: the next line is interpreted as a command
//! 2. **Awaiting a clarification**: the last command was ambiguous and the
//!    next line must name one of the offered candidates
//! 3. **Won** / **Quit**: terminal; further input is ignored
//!
//! An unmatched clarification reply abandons the original command. It is
//! never retried.

mod actions;

use adventure_world::World;
use log::debug;

use crate::command::{self, Input};
use crate::config::GameConfig;
use crate::error::CommandError;
use crate::events::GameEvent;
use crate::logutil::escape_log;
use crate::player::PlayerState;

/// What the session expects or has concluded after a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Continue,
    AwaitingClarification,
    Won,
    Quit,
}

impl Status {
    /// Whether the game is over.
    pub fn is_finished(&self) -> bool {
        matches!(self, Status::Won | Status::Quit)
    }
}

/// Candidates offered to the player after an ambiguous input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clarification {
    /// Full command names an abbreviation could stand for.
    Command(&'static [&'static str]),
    /// Item names at the current location matching a `get` prefix.
    Item(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    AwaitingCommand,
    AwaitingClarification(Clarification),
    Won,
    Quit,
}

/// Everything the session has to say about one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Text for the player, one entry per output line.
    pub lines: Vec<String>,
    pub events: Vec<GameEvent>,
    pub status: Status,
}

impl Response {
    /// All lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Output collected while handling one line.
#[derive(Debug, Default)]
struct Turn {
    lines: Vec<String>,
    events: Vec<GameEvent>,
}

impl Turn {
    fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn reject(&mut self, error: CommandError) {
        debug!("Command rejected: {:?}", error);
        self.say(error.to_string());
    }

    fn into_response(self, status: Status) -> Response {
        Response {
            lines: self.lines,
            events: self.events,
            status,
        }
    }
}

/// One interactive game: the world, the player, and what the next line means.
#[derive(Debug, Clone)]
pub struct Session {
    world: World,
    player: PlayerState,
    config: GameConfig,
    mode: Mode,
}

impl Session {
    /// Start a new game at the first location with an empty inventory.
    pub fn new(world: World, config: GameConfig) -> Self {
        Self {
            world,
            player: PlayerState::new(),
            config,
            mode: Mode::AwaitingCommand,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The pending clarification, if the session is waiting for one.
    pub fn clarification(&self) -> Option<&Clarification> {
        match &self.mode {
            Mode::AwaitingClarification(clarification) => Some(clarification),
            _ => None,
        }
    }

    pub fn status(&self) -> Status {
        match self.mode {
            Mode::AwaitingCommand => Status::Continue,
            Mode::AwaitingClarification(_) => Status::AwaitingClarification,
            Mode::Won => Status::Won,
            Mode::Quit => Status::Quit,
        }
    }

    /// The welcome banner followed by a look at the starting location.
    pub fn start(&mut self) -> Response {
        let mut turn = Turn::default();
        turn.say(self.config.banner.clone());
        if let Err(error) = self.look(&mut turn) {
            turn.reject(error);
        }
        turn.into_response(self.status())
    }

    /// Handle one line of player input.
    pub fn handle_line(&mut self, line: &str) -> Response {
        debug!("Input: {}", escape_log(line));
        let mut turn = Turn::default();

        match std::mem::replace(&mut self.mode, Mode::AwaitingCommand) {
            Mode::AwaitingCommand => self.process(line, &mut turn),
            Mode::AwaitingClarification(clarification) => {
                self.resolve(clarification, line, &mut turn)
            }
            finished @ (Mode::Won | Mode::Quit) => self.mode = finished,
        }

        turn.into_response(self.status())
    }

    /// Input ran out. Ends the game as if the player had quit, whatever the mode.
    pub fn end_of_input(&mut self) -> Response {
        let mut turn = Turn::default();
        if !self.status().is_finished() {
            debug!("End of input");
            self.quit(&mut turn);
        }
        turn.into_response(self.status())
    }

    fn process(&mut self, line: &str, turn: &mut Turn) {
        match command::interpret(line) {
            Ok(Input::Empty) => {}
            Ok(Input::Ambiguous(candidates)) => {
                turn.say(format!(
                    "Did you mean one of these commands? {}",
                    candidates.join(", ")
                ));
                self.mode = Mode::AwaitingClarification(Clarification::Command(candidates));
            }
            Ok(Input::Command(command)) => {
                debug!("Executing {:?}", command);
                if let Err(error) = self.execute(command, turn) {
                    turn.reject(error);
                }
            }
            Err(error) => turn.reject(error),
        }
    }

    fn resolve(&mut self, clarification: Clarification, line: &str, turn: &mut Turn) {
        let choice = line.trim().to_lowercase();

        match clarification {
            Clarification::Command(candidates) => {
                if candidates.iter().any(|candidate| *candidate == choice) {
                    // The reply replaces the original line; its arguments are gone.
                    self.process(&choice, turn);
                } else {
                    turn.reject(CommandError::AmbiguousChoice(choice));
                }
            }
            Clarification::Item(candidates) => {
                match candidates.iter().find(|name| name.to_lowercase() == choice) {
                    Some(name) => {
                        if let Err(error) = self.pick_up(name, turn) {
                            turn.reject(error);
                        }
                    }
                    None => turn.reject(CommandError::AmbiguousItemChoice(choice)),
                }
            }
        }
    }
}

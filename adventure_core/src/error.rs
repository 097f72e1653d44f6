//! Error types for the interpreter.

use adventure_world::{Direction, WorldError};
use thiserror::Error;

/// A command that could not be carried out.
///
/// None of these end the game. The `Display` text is exactly what the player
/// is told before the session goes back to waiting for a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid command. Try 'help' for a list of valid commands.")]
    InvalidCommand(String),

    /// `go` without a direction, or with something that is not a full direction name.
    #[error("Invalid direction. Try 'help' for a list of valid commands.")]
    InvalidDirection,

    #[error("You must specify an item to {verb}.")]
    MissingArgument { verb: &'static str },

    /// `trade` with anything other than exactly one item word.
    #[error("To trade, specify 'trade [item]'.")]
    InvalidUsage,

    #[error("That item is not here.")]
    ItemNotFound(String),

    #[error("You don't have {0} in your inventory.")]
    NotCarrying(String),

    /// The reply to a command clarification matched none of the candidates.
    #[error("Invalid choice.")]
    AmbiguousChoice(String),

    /// The reply to an item clarification matched none of the candidates.
    #[error("Invalid item choice.")]
    AmbiguousItemChoice(String),

    #[error("The door is locked. You need something to unlock it.")]
    BlockedByLock { key: String },

    #[error("You can't go that way.")]
    NoExit(Direction),

    #[error("There is no one to trade with here.")]
    NoTrader,

    #[error("The trader does not want {0}.")]
    TraderRefuses(String),

    /// The world rejected an operation the session believed valid.
    #[error("Something went wrong in the world: {0}")]
    World(#[from] WorldError),
}

/// Failures of the terminal the game is played on. These end the program.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

//! Command parsing - turns one line of player input into a [`Command`].
//!
//! Parsing is a pure step: it looks at the words only, never at the world.
//! Checks that depend on where the player is (exits, items, traders) happen
//! when the session executes the command.

mod abbreviation;

pub use abbreviation::expand as expand_abbreviation;

use adventure_world::Direction;

use crate::error::CommandError;

/// A fully resolved player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Look,
    /// Pick up the item whose name starts with this text.
    Get(String),
    /// Drop the inventory item with exactly this name.
    Drop(String),
    Inventory,
    Items,
    /// Words after `trade`; the count is validated once a trader is present.
    Trade(Vec<String>),
    Help,
    Exits,
    Quit,
}

/// The result of interpreting a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing but whitespace.
    Empty,
    Command(Command),
    /// The base word abbreviates several commands; the player must pick one.
    Ambiguous(&'static [&'static str]),
}

/// Trim and lowercase a line, then split it into words.
pub fn normalize(line: &str) -> Vec<String> {
    line.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Interpret one line of input.
///
/// Only the first word is looked up in the abbreviation table. A single
/// expansion is substituted in place and the remaining words are kept.
pub fn interpret(line: &str) -> Result<Input, CommandError> {
    let tokens = normalize(line);
    let Some((base, args)) = tokens.split_first() else {
        return Ok(Input::Empty);
    };

    let base = match expand_abbreviation(base) {
        Some([single]) => *single,
        Some(candidates) => return Ok(Input::Ambiguous(candidates)),
        None => base.as_str(),
    };

    Command::parse(base, args).map(Input::Command)
}

impl Command {
    /// Build a command from a full (unabbreviated) base word and its arguments.
    pub fn parse(base: &str, args: &[String]) -> Result<Self, CommandError> {
        if let Some(direction) = Direction::from_name(base) {
            return Ok(Command::Move(direction));
        }

        match base {
            "look" => Ok(Command::Look),
            "get" => Self::item_argument("get", args).map(Command::Get),
            "drop" => Self::item_argument("drop", args).map(Command::Drop),
            "inventory" => Ok(Command::Inventory),
            "items" => Ok(Command::Items),
            "trade" => Ok(Command::Trade(args.to_vec())),
            "help" => Ok(Command::Help),
            "exits" => Ok(Command::Exits),
            "quit" => Ok(Command::Quit),
            "go" => args
                .first()
                .and_then(|word| Direction::from_name(word))
                .map(Command::Move)
                .ok_or(CommandError::InvalidDirection),
            other => Err(CommandError::InvalidCommand(other.to_string())),
        }
    }

    fn item_argument(verb: &'static str, args: &[String]) -> Result<String, CommandError> {
        if args.is_empty() {
            Err(CommandError::MissingArgument { verb })
        } else {
            Ok(args.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> Command {
        match interpret(line) {
            Ok(Input::Command(command)) => command,
            other => panic!("expected a command for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  GET   Straw Hat \t"), vec!["get", "straw", "hat"]);
        assert!(normalize("   ").is_empty());
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(interpret("").unwrap(), Input::Empty);
        assert_eq!(interpret(" \t ").unwrap(), Input::Empty);
    }

    #[test]
    fn test_directions_and_abbreviations() {
        assert_eq!(command("north"), Command::Move(Direction::North));
        assert_eq!(command("N"), Command::Move(Direction::North));
        assert_eq!(command("se"), Command::Move(Direction::Southeast));
        assert_eq!(command("go west"), Command::Move(Direction::West));
    }

    #[test]
    fn test_ambiguous_abbreviation() {
        assert_eq!(interpret("i").unwrap(), Input::Ambiguous(&["inventory", "items"]));
        assert_eq!(interpret("g sword").unwrap(), Input::Ambiguous(&["get", "go"]));
    }

    #[test]
    fn test_go_requires_full_direction() {
        assert!(matches!(interpret("go"), Err(CommandError::InvalidDirection)));
        assert!(matches!(interpret("go n"), Err(CommandError::InvalidDirection)));
        assert!(matches!(interpret("go up"), Err(CommandError::InvalidDirection)));
    }

    #[test]
    fn test_item_arguments() {
        assert_eq!(command("get sw"), Command::Get("sw".into()));
        assert_eq!(command("drop Straw  Hat"), Command::Drop("straw hat".into()));
        assert!(matches!(
            interpret("get"),
            Err(CommandError::MissingArgument { verb: "get" })
        ));
        assert!(matches!(
            interpret("drop"),
            Err(CommandError::MissingArgument { verb: "drop" })
        ));
    }

    #[test]
    fn test_trade_keeps_all_words() {
        assert_eq!(command("trade"), Command::Trade(vec![]));
        assert_eq!(
            command("trade gold coin"),
            Command::Trade(vec!["gold".into(), "coin".into()])
        );
    }

    #[test]
    fn test_invalid_command() {
        match interpret("dance wildly") {
            Err(CommandError::InvalidCommand(word)) => assert_eq!(word, "dance"),
            other => panic!("expected InvalidCommand, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_commands() {
        assert_eq!(command("look"), Command::Look);
        assert_eq!(command("INVENTORY"), Command::Inventory);
        assert_eq!(command("items"), Command::Items);
        assert_eq!(command("help"), Command::Help);
        assert_eq!(command("exits"), Command::Exits);
        assert_eq!(command("quit"), Command::Quit);
    }
}

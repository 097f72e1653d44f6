//! Command execution against the world and the player.

use adventure_world::{Direction, Location};
use log::{debug, info};

use super::{Clarification, Mode, Session, Turn};
use crate::command::Command;
use crate::error::CommandError;
use crate::events::GameEvent;

const HELP: &[&str] = &[
    "Available commands:",
    "  go [direction] - Move in the specified direction (north, south, east, west, northeast, northwest, southeast, southwest).",
    "  get [item] - Pick up an item from the current location.",
    "  drop [item] - Drop an item from your inventory into the current location.",
    "  trade [item] - Trade an item with a character in the current location.",
    "  inventory - Show the items you are carrying.",
    "  look - Describe the current location.",
    "  items - List all items in the current location.",
    "  exits - Show all available exits from the current location.",
    "  help - Display this help message.",
    "  quit - Exit the game.",
];

impl Session {
    pub(super) fn execute(&mut self, command: Command, turn: &mut Turn) -> Result<(), CommandError> {
        match command {
            Command::Move(direction) => self.move_player(direction, turn),
            Command::Look => self.look(turn),
            Command::Get(prefix) => self.get_by_prefix(&prefix, turn),
            Command::Drop(name) => self.drop_item(&name, turn),
            Command::Inventory => self.show_inventory(turn),
            Command::Items => self.show_items(turn),
            Command::Trade(words) => self.trade(&words, turn),
            Command::Help => {
                HELP.iter().for_each(|line| turn.say(*line));
                Ok(())
            }
            Command::Exits => self.show_exits(turn),
            Command::Quit => {
                self.quit(turn);
                Ok(())
            }
        }
    }

    fn current(&self) -> Result<&Location, CommandError> {
        Ok(self.world.location_at(self.player.location)?)
    }

    /// Move through an exit, unlocking the target if the player holds its key.
    fn move_player(&mut self, direction: Direction, turn: &mut Turn) -> Result<(), CommandError> {
        let from = self.player.location;
        let target = self
            .current()?
            .exit(direction)
            .ok_or(CommandError::NoExit(direction))?;

        if let Some(key) = self.world.location_at(target)?.required_key() {
            if !self.player.inventory.contains(key) {
                return Err(CommandError::BlockedByLock {
                    key: key.to_string(),
                });
            }
            turn.say(format!("Using {key} to unlock the door."));
            turn.emit(GameEvent::Unlocked {
                location: target,
                key: key.to_string(),
            });
        }

        self.player.location = target;
        info!("Player moved {} from {} to {}", direction, from, target);
        turn.emit(GameEvent::Moved {
            from,
            to: target,
            direction,
        });
        self.look(turn)
    }

    pub(super) fn look(&self, turn: &mut Turn) -> Result<(), CommandError> {
        turn.say(self.current()?.description.clone());
        self.show_items(turn)?;
        self.show_exits(turn)
    }

    fn show_items(&self, turn: &mut Turn) -> Result<(), CommandError> {
        let items = self.world.items_at(self.player.location)?;
        if items.is_empty() {
            turn.say("There are no items here.");
        } else {
            turn.say(format!("Items in this location: {}", items.join(", ")));
        }
        Ok(())
    }

    fn show_exits(&self, turn: &mut Turn) -> Result<(), CommandError> {
        let exits = self.world.exits_of(self.player.location)?;
        if exits.is_empty() {
            turn.say("There are no exits from here.");
        } else {
            let names: Vec<_> = exits.keys().map(Direction::as_str).collect();
            turn.say(format!("Available exits: {}", names.join(", ")));
        }
        Ok(())
    }

    /// Listing a non-empty inventory doubles as a win check.
    fn show_inventory(&mut self, turn: &mut Turn) -> Result<(), CommandError> {
        if self.player.inventory.is_empty() {
            turn.say("Your inventory is empty.");
            return Ok(());
        }

        let names: Vec<_> = self.player.inventory.iter().collect();
        turn.say(format!("You are carrying: {}", names.join(", ")));
        self.check_win(turn)
    }

    /// Pick up the single item starting with `prefix`, or ask which one was meant.
    fn get_by_prefix(&mut self, prefix: &str, turn: &mut Turn) -> Result<(), CommandError> {
        let prefix = prefix.to_lowercase();
        let matching: Vec<String> = self
            .world
            .items_at(self.player.location)?
            .iter()
            .filter(|item| item.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect();

        if matching.len() > 1 {
            turn.say(format!(
                "Did you mean one of these items? {}",
                matching.join(", ")
            ));
            self.mode = Mode::AwaitingClarification(Clarification::Item(matching));
            return Ok(());
        }

        match matching.into_iter().next() {
            Some(name) => self.pick_up(&name, turn),
            None => Err(CommandError::ItemNotFound(prefix)),
        }
    }

    pub(super) fn pick_up(&mut self, name: &str, turn: &mut Turn) -> Result<(), CommandError> {
        let location = self.player.location;
        if !self.current()?.has_item(name) {
            return Err(CommandError::ItemNotFound(name.to_string()));
        }

        let item = self.world.remove_item(location, name)?;
        turn.say(format!("You picked up the {item}."));
        turn.emit(GameEvent::ItemTaken {
            item: item.clone(),
            location,
        });
        self.player.inventory.push(item);

        if self.config.triggers_win_check(name) {
            self.check_win(turn)?;
        }
        Ok(())
    }

    /// Drop an inventory item. The name must match exactly; no abbreviations.
    fn drop_item(&mut self, name: &str, turn: &mut Turn) -> Result<(), CommandError> {
        if !self.player.inventory.remove(name) {
            return Err(CommandError::NotCarrying(name.to_string()));
        }

        let location = self.player.location;
        self.world.add_item(location, name)?;
        turn.say(format!("You dropped the {name}."));
        turn.emit(GameEvent::ItemDropped {
            item: name.to_string(),
            location,
        });
        Ok(())
    }

    /// Barter with the trader at the trading post.
    ///
    /// There is no per-trader limit: the trade can repeat as long as the
    /// player has the wanted item.
    fn trade(&mut self, words: &[String], turn: &mut Turn) -> Result<(), CommandError> {
        let location = self.current()?;
        let trader = match &location.trader {
            Some(trader) if location.name == self.config.trading_post => trader.clone(),
            _ => return Err(CommandError::NoTrader),
        };

        let [item] = words else {
            return Err(CommandError::InvalidUsage);
        };

        if *item != trader.wants || !self.player.inventory.remove(item) {
            return Err(CommandError::TraderRefuses(item.clone()));
        }

        self.player.inventory.push(trader.offers.clone());
        info!("Player traded {} for {}", item, trader.offers);
        turn.say(format!("You traded your {} for {}.", item, trader.offers));
        turn.emit(GameEvent::Traded {
            given: item.clone(),
            received: trader.offers,
        });
        Ok(())
    }

    /// End the game if the win item is held at a location named like the final one.
    fn check_win(&mut self, turn: &mut Turn) -> Result<(), CommandError> {
        let here = self.current()?;
        let holds_win_item = self.player.inventory.contains(&self.config.win_item);
        if !holds_win_item || here.name != self.world.final_location().name {
            debug!("Win check failed at {}", here.name);
            return Ok(());
        }

        info!("Player won at {}", here.name);
        turn.say(format!(
            "Congratulations! You have found the {} and won the game!",
            self.config.win_item
        ));
        turn.emit(GameEvent::Won {
            location: self.player.location,
        });
        self.mode = Mode::Won;
        Ok(())
    }

    pub(super) fn quit(&mut self, turn: &mut Turn) {
        info!("Player quit");
        turn.say("Thank you for playing!");
        turn.emit(GameEvent::Quit);
        self.mode = Mode::Quit;
    }
}

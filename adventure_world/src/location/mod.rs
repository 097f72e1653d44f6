//! Location definitions - the nodes of the navigable map.

mod direction;

pub use direction::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index of a location within the world's ordered sequence.
///
/// Index 0 is the starting location; the last index is the final location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub usize);

impl LocationId {
    /// The location every game starts in.
    pub const START: LocationId = LocationId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exits of a location, keyed by direction and listed in compass order.
pub type Exits = BTreeMap<Direction, LocationId>;

/// A barter rule: the trader accepts `wants` and hands over `offers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trader {
    pub wants: String,
    pub offers: String,
}

/// A location in the game world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(rename = "desc", alias = "description")]
    pub description: String,
    #[serde(default)]
    pub exits: Exits,
    /// Items lying here, in the order they arrived.
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trader: Option<Trader>,
}

impl Location {
    /// Create an unlocked location with no exits, items or trader.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: Exits::new(),
            items: Vec::new(),
            locked: false,
            key: None,
            trader: None,
        }
    }

    pub fn with_exit(mut self, direction: Direction, target: LocationId) -> Self {
        self.exits.insert(direction, target);
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Lock the location behind `key`.
    pub fn locked_with(mut self, key: impl Into<String>) -> Self {
        self.locked = true;
        self.key = Some(key.into());
        self
    }

    pub fn with_trader(mut self, wants: impl Into<String>, offers: impl Into<String>) -> Self {
        self.trader = Some(Trader {
            wants: wants.into(),
            offers: offers.into(),
        });
        self
    }

    /// Get the location reached by going `direction`, if there is an exit.
    pub fn exit(&self, direction: Direction) -> Option<LocationId> {
        self.exits.get(&direction).copied()
    }

    /// The item needed to enter, if any.
    ///
    /// A location marked `locked` without a `key` can be entered freely.
    pub fn required_key(&self) -> Option<&str> {
        if self.locked {
            self.key.as_deref()
        } else {
            None
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_key() {
        let open = Location::new("Beach", "Sand everywhere.");
        assert!(open.required_key().is_none());

        let vault = Location::new("Vault", "A heavy door.").locked_with("golden key");
        assert_eq!(vault.required_key(), Some("golden key"));

        let mut keyless = Location::new("Shed", "Rotten planks.");
        keyless.locked = true;
        assert!(keyless.required_key().is_none());
    }

    #[test]
    fn test_exit_lookup() {
        let dock = Location::new("Dock", "Boats bob in the water.")
            .with_exit(Direction::North, LocationId(1))
            .with_exit(Direction::East, LocationId(2));

        assert_eq!(dock.exit(Direction::North), Some(LocationId(1)));
        assert_eq!(dock.exit(Direction::West), None);

        let listed: Vec<_> = dock.exits.keys().copied().collect();
        assert_eq!(listed, vec![Direction::North, Direction::East]);
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "name": "Syrup Village",
            "desc": "A quiet village.",
            "exits": {"south": 0, "northeast": 3},
            "items": ["slingshot"],
            "trader": {"wants": "meat", "offers": "log pose"}
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();

        assert_eq!(location.description, "A quiet village.");
        assert_eq!(location.exit(Direction::Northeast), Some(LocationId(3)));
        assert!(!location.locked);
        assert_eq!(location.trader.unwrap().offers, "log pose");
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let json = r#"{"name": "Pit", "desc": "Dark.", "exits": {"down": 1}}"#;
        let err = serde_json::from_str::<Location>(json).unwrap_err();
        assert!(err.to_string().contains("unknown direction 'down'"));
    }
}

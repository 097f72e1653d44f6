//! The player's inventory container.

use serde::{Deserialize, Serialize};

/// Item names held by the player, in acquisition order.
///
/// Names are not unique: picking up two items called "sword" yields two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an item with exactly this name is held.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    /// Append an item.
    pub fn push(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    /// Remove the first item with exactly this name.
    ///
    /// Returns `false` if nothing was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.items.iter().position(|item| item == name) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl<S: Into<String>> FromIterator<S> for Inventory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_kept() {
        let mut inventory = Inventory::new();
        inventory.push("sword");
        inventory.push("sword");

        assert_eq!(inventory.len(), 2);
        assert!(inventory.remove("sword"));
        assert_eq!(inventory.as_slice(), ["sword".to_string()]);
    }

    #[test]
    fn test_remove_missing() {
        let mut inventory: Inventory = ["map"].into_iter().collect();
        assert!(!inventory.remove("Map"));
        assert!(!inventory.remove("compass"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_acquisition_order() {
        let inventory: Inventory = ["map", "apple", "key"].into_iter().collect();
        let names: Vec<_> = inventory.iter().collect();
        assert_eq!(names, vec!["map", "apple", "key"]);
    }
}

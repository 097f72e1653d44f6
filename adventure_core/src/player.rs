//! Player state.

use adventure_world::{Inventory, LocationId};
use serde::{Deserialize, Serialize};

/// Where the player stands and what they carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Always a valid index into the session's world.
    pub location: LocationId,
    pub inventory: Inventory,
}

impl PlayerState {
    /// A player at the starting location with empty hands.
    pub fn new() -> Self {
        Self {
            location: LocationId::START,
            inventory: Inventory::new(),
        }
    }
}

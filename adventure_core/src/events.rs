//! Game events - the state changes a session reports alongside its text.

use adventure_world::{Direction, LocationId};
use serde::Serialize;

/// Something that changed the world or the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Moved {
        from: LocationId,
        to: LocationId,
        direction: Direction,
    },
    /// A key was used to enter a locked location. The key is kept.
    Unlocked { location: LocationId, key: String },
    ItemTaken { item: String, location: LocationId },
    ItemDropped { item: String, location: LocationId },
    Traded { given: String, received: String },
    Won { location: LocationId },
    Quit,
}

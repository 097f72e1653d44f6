//! # Adventure World
//!
//! The world model for the Grand Line adventure: the ordered arena of
//! locations, their exits, items, locks and traders, plus the containers
//! items move between. This crate holds game data only; command parsing and
//! the game state machine live in `adventure_core`.

pub mod error;
pub mod inventory;
pub mod location;
pub mod world;

pub use error::*;
pub use inventory::*;
pub use location::*;
pub use world::*;

//! # Adventure Core
//!
//! The command interpreter and game state machine of the Grand Line
//! adventure. It sits on top of `adventure_world`, turns player input into
//! [`Command`]s, and executes them against the world and the player state.
//!
//! ## Core Components
//!
//! - **command**: input normalization, the abbreviation table and the single parse step
//! - **session**: the game state machine (awaiting a command or a clarification)
//! - **game_loop**: drives a [`LineEditor`] and prints each [`Response`]
//!
//! The session never touches stdin or stdout itself, so every rule can be
//! exercised by feeding it lines and inspecting the responses.

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod events;
pub mod game_loop;
pub mod logutil;
pub mod player;
pub mod session;

pub use command::*;
pub use config::*;
pub use editor::*;
pub use error::*;
pub use events::*;
pub use game_loop::*;
pub use player::*;
pub use session::*;

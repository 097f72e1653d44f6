//! Errors raised by the world model and the map loader.

use std::path::PathBuf;
use thiserror::Error;

use crate::location::{Direction, LocationId};

/// Errors that can arise while building, loading or mutating a [`World`](crate::World).
#[derive(Debug, Error)]
pub enum WorldError {
    /// A location index outside the world was requested.
    #[error("location {0} does not exist")]
    OutOfRange(LocationId),

    /// An item removal named something the location does not hold.
    #[error("item '{item}' is not at location {location}")]
    ItemNotFound { location: LocationId, item: String },

    /// The map has no locations, so there is no start and no final location.
    #[error("map contains no locations")]
    EmptyWorld,

    /// An exit references a location that is not in the map.
    #[error("exit {direction} from location {from} points at missing location {target}")]
    InvalidExit {
        from: LocationId,
        direction: Direction,
        target: LocationId,
    },

    /// The map file could not be read.
    #[error("could not read map file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The map file is not a valid JSON location list.
    #[error("invalid JSON map: {0}")]
    Json(#[from] serde_json::Error),

    /// The map file is not a valid TOML location list.
    #[error("invalid TOML map: {0}")]
    Toml(#[from] toml::de::Error),
}

//! Map loading from JSON and TOML files.

use log::info;
use serde::Deserialize;
use std::path::Path;

use super::World;
use crate::error::WorldError;
use crate::location::Location;

/// TOML has no top-level arrays, so locations are a `[[location]]` table array.
#[derive(Debug, Deserialize)]
struct TomlMap {
    #[serde(default, rename = "location")]
    locations: Vec<Location>,
}

impl World {
    /// Parse a JSON array of location records.
    pub fn from_json_str(source: &str) -> Result<Self, WorldError> {
        let locations: Vec<Location> = serde_json::from_str(source)?;
        Self::new(locations)
    }

    /// Parse a TOML document of `[[location]]` tables.
    pub fn from_toml_str(source: &str) -> Result<Self, WorldError> {
        let map: TomlMap = toml::from_str(source)?;
        Self::new(map.locations)
    }

    /// Load a map file. Files ending in `.toml` are read as TOML, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let world = if is_toml {
            Self::from_toml_str(&source)?
        } else {
            Self::from_json_str(&source)?
        };

        info!(
            "Loaded {} locations from {}",
            world.len(),
            path.display()
        );
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{Direction, LocationId};
    use std::io::Write;

    const JSON_MAP: &str = r#"[
        {"name": "Foosha Village", "desc": "Home.", "exits": {"north": 1}, "items": ["straw hat"]},
        {"name": "Laugh Tale", "desc": "The end of the Grand Line.", "exits": {"south": 0},
         "locked": true, "key": "road poneglyph"}
    ]"#;

    const TOML_MAP: &str = r#"
[[location]]
name = "Foosha Village"
desc = "Home."
items = ["straw hat"]
[location.exits]
north = 1

[[location]]
name = "Laugh Tale"
description = "The end of the Grand Line."
locked = true
key = "road poneglyph"
[location.exits]
south = 0
"#;

    #[test]
    fn test_json_and_toml_agree() {
        let from_json = World::from_json_str(JSON_MAP).unwrap();
        let from_toml = World::from_toml_str(TOML_MAP).unwrap();

        for world in [&from_json, &from_toml] {
            assert_eq!(world.len(), 2);
            let start = world.location_at(LocationId::START).unwrap();
            assert_eq!(start.exit(Direction::North), Some(LocationId(1)));
            assert_eq!(start.items, vec!["straw hat".to_string()]);
            assert_eq!(world.final_location().required_key(), Some("road poneglyph"));
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = World::from_json_str("[{\"name\": \"Nowhere\"}]").unwrap_err();
        assert!(matches!(err, WorldError::Json(_)));
    }

    #[test]
    fn test_empty_toml() {
        let err = World::from_toml_str("").unwrap_err();
        assert!(matches!(err, WorldError::EmptyWorld));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("map.json");
        std::fs::File::create(&json_path)
            .unwrap()
            .write_all(JSON_MAP.as_bytes())
            .unwrap();
        assert_eq!(World::load(&json_path).unwrap().len(), 2);

        let toml_path = dir.path().join("map.TOML");
        std::fs::write(&toml_path, TOML_MAP).unwrap();
        assert_eq!(World::load(&toml_path).unwrap().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = World::load(&path).unwrap_err();
        assert!(matches!(err, WorldError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}

//! World management - the arena holding every location of the map.

mod loader;

use log::debug;
use serde::Serialize;

use crate::error::WorldError;
use crate::location::{Exits, Location, LocationId};

/// The ordered sequence of locations that makes up the map.
///
/// The shape is fixed once built: no locations are added or removed and
/// exits never change. Only the item lists of locations are mutable.
#[derive(Debug, Clone, Serialize)]
pub struct World {
    locations: Vec<Location>,
}

impl World {
    /// Build a world, checking that it is non-empty and every exit leads somewhere.
    pub fn new(locations: Vec<Location>) -> Result<Self, WorldError> {
        if locations.is_empty() {
            return Err(WorldError::EmptyWorld);
        }

        for (index, location) in locations.iter().enumerate() {
            for (direction, target) in &location.exits {
                if target.index() >= locations.len() {
                    return Err(WorldError::InvalidExit {
                        from: LocationId(index),
                        direction: *direction,
                        target: *target,
                    });
                }
            }
        }

        Ok(Self { locations })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false: `new` rejects empty worlds.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over all locations with their ids.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(index, location)| (LocationId(index), location))
    }

    /// The last location of the map, where the game can be won.
    pub fn final_location(&self) -> &Location {
        // `new` rejects empty worlds.
        &self.locations[self.locations.len() - 1]
    }

    /// Get a location by id.
    pub fn location_at(&self, id: LocationId) -> Result<&Location, WorldError> {
        self.locations
            .get(id.index())
            .ok_or(WorldError::OutOfRange(id))
    }

    fn location_at_mut(&mut self, id: LocationId) -> Result<&mut Location, WorldError> {
        self.locations
            .get_mut(id.index())
            .ok_or(WorldError::OutOfRange(id))
    }

    /// Get the exits of a location.
    pub fn exits_of(&self, id: LocationId) -> Result<&Exits, WorldError> {
        Ok(&self.location_at(id)?.exits)
    }

    /// Get the items currently lying at a location.
    pub fn items_at(&self, id: LocationId) -> Result<&[String], WorldError> {
        Ok(&self.location_at(id)?.items)
    }

    /// Remove the first item named exactly `name` from a location.
    ///
    /// Returns the removed name.
    pub fn remove_item(&mut self, id: LocationId, name: &str) -> Result<String, WorldError> {
        let location = self.location_at_mut(id)?;
        let position = location
            .items
            .iter()
            .position(|item| item == name)
            .ok_or_else(|| WorldError::ItemNotFound {
                location: id,
                item: name.to_string(),
            })?;

        debug!("Removed '{}' from location {}", name, id);
        Ok(location.items.remove(position))
    }

    /// Append an item to a location.
    pub fn add_item(&mut self, id: LocationId, name: impl Into<String>) -> Result<(), WorldError> {
        let name = name.into();
        debug!("Added '{}' to location {}", name, id);
        self.location_at_mut(id)?.items.push(name);
        Ok(())
    }
}

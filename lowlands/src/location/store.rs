use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{Location, LocationRecord};
use crate::error::LowlandsError;

/// Persistence backend for locations.
///
/// The store only receives geometries that passed validation, already in WGS84 and with precomputed bounding box
/// and area. Identifiers are assigned by the store.
pub trait LocationStore: Send + Sync {
    /// Saves a new location and returns it with the assigned id.
    fn insert(&self, record: LocationRecord) -> Result<Location, LowlandsError>;
    /// Returns the location with the given id, if there is one.
    fn get(&self, id: u64) -> Result<Option<Location>, LowlandsError>;
    /// Returns up to `limit` locations ordered by id, skipping the first `offset` ones.
    fn list(&self, offset: usize, limit: usize) -> Result<Vec<Location>, LowlandsError>;
    /// Total number of stored locations.
    fn count(&self) -> Result<usize, LowlandsError>;
}

/// Location store that keeps everything in memory. Ids start from 1.
#[derive(Debug, Default)]
pub struct InMemoryLocationStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: u64,
    locations: BTreeMap<u64, Location>,
}

impl InMemoryLocationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocationStore for InMemoryLocationStore {
    fn insert(&self, record: LocationRecord) -> Result<Location, LowlandsError> {
        let mut inner = self.inner.write();
        inner.last_id += 1;

        let location = Location::from_record(inner.last_id, record);
        inner.locations.insert(location.id, location.clone());

        Ok(location)
    }

    fn get(&self, id: u64) -> Result<Option<Location>, LowlandsError> {
        Ok(self.inner.read().locations.get(&id).cloned())
    }

    fn list(&self, offset: usize, limit: usize) -> Result<Vec<Location>, LowlandsError> {
        Ok(self
            .inner
            .read()
            .locations
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize, LowlandsError> {
        Ok(self.inner.read().locations.len())
    }
}

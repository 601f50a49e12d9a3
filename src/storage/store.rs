//! In-memory entity collections
//!
//! Each collection keeps its records and its id counter behind a single
//! mutex, so every operation is atomic with respect to the others on the
//! same collection. Nothing spans collections.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::models::{Player, Record, Team};
use crate::error::{Result, ScoreplayError};

pub type TeamStore = EntityStore<Team>;
pub type PlayerStore = EntityStore<Player>;

struct Collection<R: Record> {
    records: BTreeMap<R::Id, R>,
    /// Last identifier handed out; never decreases, so deleted ids are not reused
    last_id: u32,
}

/// Thread-safe collection of records keyed by store-assigned ids
pub struct EntityStore<R: Record> {
    inner: Mutex<Collection<R>>,
}

impl<R: Record> Default for EntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> EntityStore<R> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Collection {
                records: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Collection<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(id: R::Id) -> ScoreplayError {
        ScoreplayError::not_found(R::KIND, id)
    }

    /// All records, ordered by id
    pub fn list(&self) -> Vec<R> {
        self.lock().records.values().cloned().collect()
    }

    pub fn get(&self, id: R::Id) -> Result<R> {
        self.lock()
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    pub fn contains(&self, id: R::Id) -> bool {
        self.lock().records.contains_key(&id)
    }

    /// Store a new record under the next unused id. Any id already set on
    /// `record` is overwritten.
    pub fn create(&self, mut record: R) -> R {
        let mut collection = self.lock();
        collection.last_id += 1;
        let id = R::Id::from(collection.last_id);
        record.set_id(id);
        collection.records.insert(id, record.clone());
        debug!(kind = %R::KIND, id = ?id, "created record");
        record
    }

    /// Replace a stored record wholesale. The id must already exist.
    pub fn update(&self, record: R) -> Result<R> {
        let id = record.id();
        let mut collection = self.lock();
        match collection.records.get_mut(&id) {
            Some(slot) => {
                *slot = record.clone();
                debug!(kind = %R::KIND, id = ?id, "updated record");
                Ok(record)
            }
            None => Err(Self::not_found(id)),
        }
    }

    /// Remove a record, returning what was stored
    pub fn delete(&self, id: R::Id) -> Result<R> {
        let removed = self
            .lock()
            .records
            .remove(&id)
            .ok_or_else(|| Self::not_found(id))?;
        debug!(kind = %R::KIND, id = ?id, "deleted record");
        Ok(removed)
    }
}

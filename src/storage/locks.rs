//! Per-team locks for multi-step roster writes
//!
//! The stores only make single operations atomic. Flows that read a team,
//! change it and write it back (sync, adding a player, service updates)
//! hold the team's lock for their whole duration so they cannot overwrite
//! each other's roster changes. Writers that go straight to the store are
//! not covered.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::TeamId;

#[derive(Default)]
pub struct TeamLocks {
    locks: Mutex<HashMap<TeamId, Arc<AsyncMutex<()>>>>,
}

impl TeamLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `team_id`. The guard releases on drop.
    pub async fn acquire(&self, team_id: TeamId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(team_id).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Drop the lock entry for a deleted or missing team
    pub fn forget(&self, team_id: TeamId) {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&team_id);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

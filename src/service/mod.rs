//! Team and player services over the in-memory stores
//!
//! - `players`: Player CRUD
//! - `teams`: Team CRUD, roster listing and create-then-sync
//! - `roster`: Resolving a team's roster into player records
//! - `sync`: Reconciling a roster against the provider

pub mod players;
pub mod roster;
pub mod sync;
pub mod teams;


use std::sync::Arc;

use crate::{
    error::{Result, ScoreplayError},
    provider::{ProviderConfig, RosterProvider, SportsDbClient},
    storage::{PlayerStore, TeamLocks, TeamStore},
};

pub use players::PlayerService;
pub use roster::resolve_roster;
pub use sync::{split_name, SyncReport};
pub use teams::TeamService;

/// Both services wired to one shared pair of stores
pub struct Services {
    pub teams: TeamService,
    pub players: PlayerService,
}

impl Services {
    /// Fresh, empty stores backed by `provider`
    pub fn new(provider: Arc<dyn RosterProvider>) -> Self {
        let team_store = Arc::new(TeamStore::new());
        let player_store = Arc::new(PlayerStore::new());

        Self {
            teams: TeamService::new(
                Arc::clone(&team_store),
                Arc::clone(&player_store),
                provider,
                Arc::new(TeamLocks::new()),
            ),
            players: PlayerService::new(player_store),
        }
    }

    /// Services talking to TheSportsDB as described by `config`
    pub fn from_config(config: ProviderConfig) -> Result<Self> {
        let client = SportsDbClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }
}

/// Reject empty or whitespace-only required text
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScoreplayError::Validation {
            field,
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

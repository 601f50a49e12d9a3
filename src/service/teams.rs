//! Team service

use std::sync::Arc;

use tokio::sync::OwnedMutexGuard;
use tracing::{info, warn};

use super::{require_non_blank, resolve_roster};
use crate::{
    error::{Result, ScoreplayError},
    provider::RosterProvider,
    storage::{
        EntityKind, NewPlayer, NewTeam, Player, PlayerStore, Team, TeamLocks, TeamStore, TeamUpdate,
        TeamWithRoster,
    },
    PlayerId, TeamId,
};

pub struct TeamService {
    pub(super) teams: Arc<TeamStore>,
    pub(super) players: Arc<PlayerStore>,
    pub(super) provider: Arc<dyn RosterProvider>,
    pub(super) locks: Arc<TeamLocks>,
}

impl TeamService {
    pub fn new(
        teams: Arc<TeamStore>,
        players: Arc<PlayerStore>,
        provider: Arc<dyn RosterProvider>,
        locks: Arc<TeamLocks>,
    ) -> Self {
        Self {
            teams,
            players,
            provider,
            locks,
        }
    }

    pub fn list(&self) -> Vec<Team> {
        self.teams.list()
    }

    pub fn get(&self, id: TeamId) -> Result<Team> {
        self.teams.get(id)
    }

    /// Team plus its resolved roster
    pub fn get_with_roster(&self, id: TeamId) -> Result<TeamWithRoster> {
        let team = self.teams.get(id)?;
        let players = self.list_roster(id)?;
        Ok(TeamWithRoster { team, players })
    }

    /// Store a new team, then sync it with the provider.
    ///
    /// If the sync fails the error is returned, but the team and anything
    /// the sync managed to add before failing stay stored.
    pub async fn create(&self, data: NewTeam) -> Result<Team> {
        require_non_blank("name", &data.name)?;

        let team = self.teams.create(data.into_team(TeamId::new(0)));
        info!(team_id = %team.id, team = %team.name, "team created");

        let _guard = self.lock_team(team.id).await?;
        if let Err(e) = self.sync_locked(team.id).await {
            warn!(team_id = %team.id, error = %e, "initial sync failed; team kept");
            return Err(e);
        }

        self.teams.get(team.id)
    }

    /// Replace every field of an existing team, roster included
    pub async fn update(&self, id: TeamId, data: TeamUpdate) -> Result<Team> {
        require_non_blank("name", &data.name)?;

        let _guard = self.lock_team(id).await?;
        self.teams.update(data.into_team(id))
    }

    /// Delete a team. Its players are kept.
    pub fn delete(&self, id: TeamId) -> Result<()> {
        self.teams.delete(id)?;
        self.locks.forget(id);
        info!(team_id = %id, "team deleted");
        Ok(())
    }

    /// Resolved roster of a team, in roster order
    pub fn list_roster(&self, id: TeamId) -> Result<Vec<Player>> {
        resolve_roster(&self.teams, &self.players, id)
    }

    /// Create a player and append it to a team's roster
    pub async fn add_player(&self, id: TeamId, data: NewPlayer) -> Result<Player> {
        require_non_blank("first_name", &data.first_name)?;

        let _guard = self.lock_team(id).await?;
        let mut team = self.teams.get(id)?;

        let player = self.players.create(data.into_player(PlayerId::new(0)));
        team.roster.push(player.id);
        self.teams.update(team)?;

        info!(team_id = %id, player_id = %player.id, "player added to team");
        Ok(player)
    }

    /// Take `id`'s lock. Missing teams fail with `NotFound` and leave no
    /// entry behind, including a team deleted while the caller was waiting.
    pub(super) async fn lock_team(&self, id: TeamId) -> Result<OwnedMutexGuard<()>> {
        if !self.teams.contains(id) {
            return Err(ScoreplayError::not_found(EntityKind::Team, id));
        }

        let guard = self.locks.acquire(id).await;
        if !self.teams.contains(id) {
            drop(guard);
            self.locks.forget(id);
            return Err(ScoreplayError::not_found(EntityKind::Team, id));
        }
        Ok(guard)
    }
}

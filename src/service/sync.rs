//! Roster reconciliation against the provider
//!
//! Players are matched by name only. A local player's key is its
//! [`full_name`](crate::storage::Player::full_name); a remote entry's key is
//! the provider's name string exactly as sent, with no case or whitespace
//! normalization.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use super::{resolve_roster, TeamService};
use crate::{
    error::Result,
    storage::{NewPlayer, Player},
    PlayerId, TeamId,
};

/// Outcome of one sync
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub team_id: TeamId,
    pub logo: Option<String>,
    /// New players, in the order they were appended to the roster
    pub created: Vec<PlayerId>,
    /// Remote entries already present locally or earlier in the same list
    pub skipped: usize,
}

/// Split a provider name on whitespace: the first token is the first name,
/// the rest rejoined with single spaces is the last name.
///
/// ```rust
/// use scoreplay::service::split_name;
///
/// assert_eq!(split_name("Lionel Messi"), ("Lionel".to_string(), "Messi".to_string()));
/// assert_eq!(split_name("Pelé"), ("Pelé".to_string(), String::new()));
/// ```
pub fn split_name(full_name: &str) -> (String, String) {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}

impl TeamService {
    /// Merge the provider's roster for a team into the local stores.
    ///
    /// Holds the team's lock for the whole run. Nothing is rolled back on
    /// failure: players created and linked before an error stay stored.
    pub async fn sync(&self, team_id: TeamId) -> Result<SyncReport> {
        let _guard = self.lock_team(team_id).await?;
        self.sync_locked(team_id).await
    }

    /// Sync body; the caller must hold `team_id`'s lock.
    pub(super) async fn sync_locked(&self, team_id: TeamId) -> Result<SyncReport> {
        let mut team = self.teams.get(team_id)?;
        let current = resolve_roster(&self.teams, &self.players, team_id)?;

        let remote_team = self.provider.search_team(&team.name).await?;
        let remote_players = self.provider.search_players(&team.name).await?;

        let mut known: HashSet<String> = current.iter().map(Player::full_name).collect();

        // The logo is written even when no players are added
        team.logo = remote_team.logo;
        team = self.teams.update(team)?;

        let mut created = Vec::new();
        let mut skipped = 0;
        for entry in remote_players {
            if known.contains(&entry.full_name) {
                debug!(team_id = %team_id, name = %entry.full_name, "player already on roster");
                skipped += 1;
                continue;
            }

            let (first_name, last_name) = split_name(&entry.full_name);
            let player = self.players.create(
                NewPlayer {
                    first_name,
                    last_name,
                    profile_picture: entry.thumbnail,
                }
                .into_player(PlayerId::new(0)),
            );

            // One team write per new player, so progress survives a later failure
            team.roster.push(player.id);
            team = self.teams.update(team)?;

            known.insert(entry.full_name);
            created.push(player.id);
        }

        info!(
            team_id = %team_id,
            team = %team.name,
            created = created.len(),
            skipped,
            "team synced"
        );

        Ok(SyncReport {
            team_id,
            logo: team.logo,
            created,
            skipped,
        })
    }
}

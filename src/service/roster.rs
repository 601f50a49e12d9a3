//! Roster resolution

use crate::{
    error::Result,
    storage::{Player, PlayerStore, TeamStore},
    TeamId,
};

/// Resolve a team's roster into player records, in roster order.
///
/// A roster entry whose player has been deleted fails the whole resolution
/// with that player's `NotFound`; partial rosters are never returned.
pub fn resolve_roster(
    teams: &TeamStore,
    players: &PlayerStore,
    team_id: TeamId,
) -> Result<Vec<Player>> {
    let team = teams.get(team_id)?;
    team.roster.iter().map(|&id| players.get(id)).collect()
}

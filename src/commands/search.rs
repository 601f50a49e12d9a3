//! Provider lookup commands

use crate::{
    provider::{RosterEntry, RosterProvider},
    Result,
};

use super::client_from_env;

/// Handle the search-team command
pub async fn handle_search_team(name: &str) -> Result<()> {
    let client = client_from_env()?;
    let team = client.search_team(name).await?;

    match team.logo {
        Some(logo) => println!("{logo}"),
        None => println!("{name} has no logo on TheSportsDB"),
    }
    Ok(())
}

/// Handle the search-players command
pub async fn handle_search_players(name: &str, as_json: bool) -> Result<()> {
    let client = client_from_env()?;
    let players = client.search_players(name).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
    } else if players.is_empty() {
        println!("No players found for {name}");
    } else {
        for line in format_roster_entries(&players) {
            println!("{line}");
        }
    }
    Ok(())
}

fn format_roster_entries(players: &[RosterEntry]) -> Vec<String> {
    players
        .iter()
        .map(|p| match &p.thumbnail {
            Some(thumb) => format!("{} ({})", p.full_name, thumb),
            None => p.full_name.clone(),
        })
        .collect()
}

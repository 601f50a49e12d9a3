//! Import command: create teams and reconcile their rosters
//!
//! Every import starts from empty stores, so the output shows exactly what
//! a fresh sync against TheSportsDB produces.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::{
    service::{Services, SyncReport},
    storage::{NewTeam, TeamWithRoster},
    Result,
};

use super::client_from_env;

/// Parameters for the import command
#[derive(Debug, Clone)]
pub struct ImportParams {
    pub names: Vec<String>,
    pub as_json: bool,
    pub resync: bool,
    pub keep_going: bool,
}

/// A team that could not be imported
#[derive(Debug, Clone, Serialize)]
pub struct ImportFailure {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSummary {
    pub teams: Vec<TeamWithRoster>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ImportFailure>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resynced: Vec<SyncReport>,
}

/// Handle the import command
pub async fn handle_import(params: ImportParams) -> Result<()> {
    let services = Services::new(Arc::new(client_from_env()?));
    let summary = run_import(&services, &params).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in format_summary(&summary) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Create each named team (which syncs it) and collect the results.
///
/// Without `keep_going` the first failure is returned as the error.
pub async fn run_import(services: &Services, params: &ImportParams) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for name in &params.names {
        match services.teams.create(NewTeam::new(name.as_str())).await {
            Ok(team) => summary.teams.push(services.teams.get_with_roster(team.id)?),
            Err(e) if params.keep_going => {
                warn!(team = %name, error = %e, "import failed, continuing");
                summary.failures.push(ImportFailure {
                    name: name.clone(),
                    error: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    if params.resync {
        for imported in &summary.teams {
            summary.resynced.push(services.teams.sync(imported.team.id).await?);
        }
    }

    Ok(summary)
}

fn format_summary(summary: &ImportSummary) -> Vec<String> {
    let mut lines = Vec::new();

    for view in &summary.teams {
        let logo = view.team.logo.as_deref().unwrap_or("no logo");
        lines.push(format!(
            "✓ #{} {} ({}) - {} players",
            view.team.id,
            view.team.name,
            logo,
            view.players.len()
        ));
        for player in &view.players {
            lines.push(format!("    #{} {}", player.id, player.full_name()));
        }
    }

    for failure in &summary.failures {
        lines.push(format!("⚠ {}: {}", failure.name, failure.error));
    }

    for report in &summary.resynced {
        lines.push(format!(
            "Resync team #{}: {} created, {} already present",
            report.team_id,
            report.created.len(),
            report.skipped
        ));
    }

    lines
}

use serde::{Deserialize, Serialize};

/// Team match from `searchteams.php`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteTeam {
    #[serde(rename = "strTeam", default)]
    pub name: Option<String>,
    /// Logo URL; TheSportsDB sends `null` for teams without one
    #[serde(rename = "strLogo", default)]
    pub logo: Option<String>,
}

/// Top-level envelope for `searchteams.php`. No match comes back as `"teams": null`.
#[derive(Debug, Deserialize)]
pub struct SearchTeamsEnvelope {
    pub teams: Option<Vec<RemoteTeam>>,
}

/// Roster entry from `searchplayers.php`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterEntry {
    #[serde(rename = "strPlayer")]
    pub full_name: String,
    #[serde(rename = "strThumb", default)]
    pub thumbnail: Option<String>,
}

impl RosterEntry {
    pub fn new(full_name: impl Into<String>, thumbnail: Option<&str>) -> Self {
        Self {
            full_name: full_name.into(),
            thumbnail: thumbnail.map(str::to_string),
        }
    }
}

/// Top-level envelope for `searchplayers.php`. No match comes back as `"player": null`.
#[derive(Debug, Deserialize)]
pub struct SearchPlayersEnvelope {
    #[serde(default)]
    pub player: Option<Vec<RosterEntry>>,
}

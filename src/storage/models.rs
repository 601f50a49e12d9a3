//! Data models for the storage layer

use crate::cli::types::ids::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which collection a record lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Team,
    Player,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Team => f.write_str("Team"),
            EntityKind::Player => f.write_str("Player"),
        }
    }
}

/// A record the entity store can hold. The store owns identifier assignment,
/// so `set_id` is only called from `create`.
pub trait Record: Clone + Send {
    type Id: Copy + Ord + fmt::Debug + From<u32> + Into<u32> + Send;

    const KIND: EntityKind;

    fn id(&self) -> Self::Id;

    fn set_id(&mut self, id: Self::Id);
}

/// Player stored in memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    /// Empty string means the player has no last name
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl Player {
    /// Name used to match local players against provider roster entries:
    /// the first name alone when there is no last name, else "first last".
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

impl Record for Player {
    type Id = PlayerId;

    const KIND: EntityKind = EntityKind::Player;

    fn id(&self) -> PlayerId {
        self.id
    }

    fn set_id(&mut self, id: PlayerId) {
        self.id = id;
    }
}

/// Team stored in memory, with its roster as an ordered list of player ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Insertion order is association order; duplicates are not rejected
    #[serde(default)]
    pub roster: Vec<PlayerId>,
}

impl Record for Team {
    type Id = TeamId;

    const KIND: EntityKind = EntityKind::Team;

    fn id(&self) -> TeamId {
        self.id
    }

    fn set_id(&mut self, id: TeamId) {
        self.id = id;
    }
}

/// Player fields supplied by a caller. Used for both create and update;
/// on update every field replaces the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl NewPlayer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            profile_picture: None,
        }
    }

    pub fn with_profile_picture(mut self, url: impl Into<String>) -> Self {
        self.profile_picture = Some(url.into());
        self
    }

    pub(crate) fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            profile_picture: self.profile_picture,
        }
    }
}

/// Team fields supplied when creating a team. The roster always starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: None,
        }
    }

    pub(crate) fn into_team(self, id: TeamId) -> Team {
        Team {
            id,
            name: self.name,
            logo: self.logo,
            roster: Vec::new(),
        }
    }
}

/// Full replacement for a stored team. Omitted fields fall back to empty
/// values, so a missing roster clears the team's roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamUpdate {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub roster: Vec<PlayerId>,
}

impl TeamUpdate {
    pub(crate) fn into_team(self, id: TeamId) -> Team {
        Team {
            id,
            name: self.name,
            logo: self.logo,
            roster: self.roster,
        }
    }
}

/// Team together with its resolved roster, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamWithRoster {
    #[serde(flatten)]
    pub team: Team,
    pub players: Vec<Player>,
}

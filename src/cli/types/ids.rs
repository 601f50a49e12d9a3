//! ID types for teams and players.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for Team IDs.
///
/// Assigned by the team store, starting at 1 and never reused. Keeps team
/// identifiers from being mixed up with player identifiers.
///
/// # Examples
///
/// ```rust
/// use scoreplay::TeamId;
///
/// let team_id = TeamId::new(42);
/// assert_eq!(team_id.as_u32(), 42);
/// assert_eq!(team_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TeamId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<TeamId> for u32 {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<PlayerId> for u32 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

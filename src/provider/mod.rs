//! Gateway to the external sports-data provider (TheSportsDB)
//!
//! - `config`: Endpoint, API key and timeout settings
//! - `types`: Typed response payloads
//! - `http`: reqwest-backed [`RosterProvider`] implementation

pub mod config;
pub mod http;
pub mod types;

use async_trait::async_trait;

use crate::error::ProviderError;

pub use config::ProviderConfig;
pub use http::SportsDbClient;
pub use types::{RemoteTeam, RosterEntry};

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Read-only team and roster lookups by team name.
///
/// Both calls are stateless and safe to retry. Dropping the returned future
/// cancels the request.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// First remote team matching `team_name`. No match is an error of kind
    /// [`NotFound`](crate::error::ProviderErrorKind::NotFound).
    async fn search_team(&self, team_name: &str) -> ProviderResult<RemoteTeam>;

    /// Remote roster for `team_name`, in provider order. No match is an
    /// empty list.
    async fn search_players(&self, team_name: &str) -> ProviderResult<Vec<RosterEntry>>;
}

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{
    config::ProviderConfig,
    types::{RemoteTeam, RosterEntry, SearchPlayersEnvelope, SearchTeamsEnvelope},
    ProviderResult, RosterProvider,
};
use crate::error::{ProviderError, ProviderErrorKind};


/// Source name reported in provider errors.
pub const PROVIDER_SOURCE: &str = "thesportsdb";

const USER_AGENT: &str = concat!("scoreplay/", env!("CARGO_PKG_VERSION"));

/// TheSportsDB client implementing [`RosterProvider`]
#[derive(Debug, Clone)]
pub struct SportsDbClient {
    client: Client,
    config: ProviderConfig,
}

impl SportsDbClient {
    /// Build a client whose requests give up after `config.timeout`.
    pub fn new(config: ProviderConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(common_headers())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_SOURCE, "build http client", &e))?;

        Ok(Self { client, config })
    }

    /// GET `endpoint?t={team_name}` and decode the body as `T`.
    /// Returns the status alongside the payload so callers can report it.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        team_name: &str,
        action: &str,
    ) -> ProviderResult<(u16, T)> {
        let url = self.config.endpoint_url(endpoint);
        debug!(endpoint, team = team_name, "querying provider");

        let response = self
            .client
            .get(&url)
            .query(&[("t", team_name)])
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint, team = team_name, error = %e, "provider request failed");
                ProviderError::from_reqwest(PROVIDER_SOURCE, action, &e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, team = team_name, status = status.as_u16(), "provider returned error status");
            return Err(ProviderError::new(
                PROVIDER_SOURCE,
                ProviderErrorKind::Status,
                Some(status.as_u16()),
                format!("failed to {action}"),
            ));
        }

        let body = response.text().await.map_err(|e| ProviderError {
            status: Some(status.as_u16()),
            ..ProviderError::from_reqwest(PROVIDER_SOURCE, action, &e)
        })?;

        let payload = serde_json::from_str::<T>(&body).map_err(|e| {
            warn!(endpoint, team = team_name, error = %e, "provider payload did not decode");
            ProviderError::new(
                PROVIDER_SOURCE,
                ProviderErrorKind::Decode,
                Some(status.as_u16()),
                format!("malformed response while trying to {action}: {e}"),
            )
        })?;

        Ok((status.as_u16(), payload))
    }
}

#[async_trait]
impl RosterProvider for SportsDbClient {
    async fn search_team(&self, team_name: &str) -> ProviderResult<RemoteTeam> {
        let (status, envelope) = self
            .get_json::<SearchTeamsEnvelope>("searchteams.php", team_name, "search team")
            .await?;

        envelope
            .teams
            .and_then(|teams| teams.into_iter().next())
            .ok_or_else(|| {
                ProviderError::new(
                    PROVIDER_SOURCE,
                    ProviderErrorKind::NotFound,
                    Some(status),
                    "team not found",
                )
            })
    }

    async fn search_players(&self, team_name: &str) -> ProviderResult<Vec<RosterEntry>> {
        let action = format!("search team {team_name} players");
        let (_, envelope) = self
            .get_json::<SearchPlayersEnvelope>("searchplayers.php", team_name, &action)
            .await?;

        Ok(envelope.player.unwrap_or_default())
    }
}

fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

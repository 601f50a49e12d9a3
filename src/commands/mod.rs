//! Command implementations for the ScorePlay CLI

pub mod import;
pub mod search;

use crate::{
    provider::{ProviderConfig, SportsDbClient},
    Result,
};

/// Build a provider client from `THESPORTSDB_*` environment settings
pub fn client_from_env() -> Result<SportsDbClient> {
    let config = ProviderConfig::from_env()?;
    Ok(SportsDbClient::new(config)?)
}

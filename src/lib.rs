//! ScorePlay Roster Library
//!
//! Keeps an in-memory registry of teams and players and reconciles team
//! rosters against TheSportsDB.
//!
//! ## Features
//!
//! - **Entity Stores**: Team and Player collections with store-assigned ids
//! - **Rosters**: Ordered player references on each team, resolved on demand
//! - **Provider Gateway**: Typed TheSportsDB team and roster lookups
//! - **Reconciliation**: Merges a remote roster into a team without duplicating
//!   players already present
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scoreplay::{provider::ProviderConfig, service::Services, storage::NewTeam};
//!
//! # async fn example() -> scoreplay::Result<()> {
//! let services = Services::from_config(ProviderConfig::from_env()?)?;
//!
//! // Creating a team syncs it with TheSportsDB
//! let team = services.teams.create(NewTeam::new("Arsenal")).await?;
//! for player in services.teams.list_roster(team.id)? {
//!     println!("{}", player.full_name());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export THESPORTSDB_API_URL=https://www.thesportsdb.com/api
//! export THESPORTSDB_API_VERSION=v1
//! export THESPORTSDB_API_KEY=3
//! export THESPORTSDB_TIMEOUT_SECS=10
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod provider;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use cli::types::ids::{PlayerId, TeamId};
pub use error::{ProviderError, ProviderErrorKind, Result, ScoreplayError};

pub const API_URL_ENV_VAR: &str = "THESPORTSDB_API_URL";
pub const API_VERSION_ENV_VAR: &str = "THESPORTSDB_API_VERSION";
pub const API_KEY_ENV_VAR: &str = "THESPORTSDB_API_KEY";
pub const TIMEOUT_ENV_VAR: &str = "THESPORTSDB_TIMEOUT_SECS";

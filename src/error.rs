//! Error types for the ScorePlay roster service

use std::fmt;
use thiserror::Error;

use crate::storage::EntityKind;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ScoreplayError>;

#[derive(Error, Debug)]
pub enum ScoreplayError {
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: EntityKind, id: u32 },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Invalid configuration for {name}: {message}")]
    InvalidConfig { name: String, message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreplayError {
    pub fn not_found(kind: EntityKind, id: impl Into<u32>) -> Self {
        ScoreplayError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ScoreplayError::NotFound { .. })
    }
}

/// How a provider call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Connection failure, timeout or cancelled request.
    Transport,
    /// The provider answered with a non-2xx status.
    Status,
    /// The body did not match the expected payload shape.
    Decode,
    /// A lookup that requires a match found none.
    NotFound,
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProviderErrorKind::Transport => "transport",
            ProviderErrorKind::Status => "status",
            ProviderErrorKind::Decode => "decode",
            ProviderErrorKind::NotFound => "not found",
        };
        f.write_str(s)
    }
}

/// Failure talking to the external sports-data provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Third party error: source {source_name}, status code {}, message: {message}", fmt_status(.status))]
pub struct ProviderError {
    pub source_name: String,
    pub status: Option<u16>,
    pub kind: ProviderErrorKind,
    pub message: String,
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "none".to_string(), |s| s.to_string())
}

impl ProviderError {
    pub fn new(
        source_name: impl Into<String>,
        kind: ProviderErrorKind,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            status,
            kind,
            message: message.into(),
        }
    }

    /// Transport failure raised by reqwest while trying to `action`.
    ///
    /// The request URL carries the API key, so only the failure class and
    /// the underlying cause end up in the message.
    pub fn from_reqwest(source_name: &str, action: &str, err: &reqwest::Error) -> Self {
        let class = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        let detail = match std::error::Error::source(err) {
            Some(cause) => format!("{class}: {cause}"),
            None => class.to_string(),
        };
        Self::new(
            source_name,
            ProviderErrorKind::Transport,
            err.status().map(|s| s.as_u16()),
            format!("failed to {action}: {detail}"),
        )
    }
}

//! Unit tests for error handling

use super::*;
use crate::{PlayerId, TeamId};

#[cfg(test)]
mod scoreplay_error_tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = ScoreplayError::not_found(EntityKind::Team, TeamId::new(7));
        assert_eq!(error.to_string(), "Team with ID 7 not found");
        assert!(error.is_not_found());

        let error = ScoreplayError::not_found(EntityKind::Player, PlayerId::new(3));
        assert_eq!(error.to_string(), "Player with ID 3 not found");
    }

    #[test]
    fn test_provider_error_display_with_status() {
        let error = ProviderError::new(
            "thesportsdb",
            ProviderErrorKind::NotFound,
            Some(200),
            "team not found",
        );
        assert_eq!(
            error.to_string(),
            "Third party error: source thesportsdb, status code 200, message: team not found"
        );
    }

    #[test]
    fn test_provider_error_display_without_status() {
        let error = ProviderError::new(
            "thesportsdb",
            ProviderErrorKind::Transport,
            None,
            "connection refused",
        );
        assert!(error.to_string().contains("status code none"));
    }

    #[test]
    fn test_provider_error_conversion_is_transparent() {
        let provider = ProviderError::new("thesportsdb", ProviderErrorKind::Status, Some(500), "boom");
        let error = ScoreplayError::from(provider.clone());

        assert_eq!(error.to_string(), provider.to_string());
        assert!(!error.is_not_found());
        match error {
            ScoreplayError::Provider(inner) => assert_eq!(inner.kind, ProviderErrorKind::Status),
            _ => panic!("Expected Provider error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = ScoreplayError::from(json_error);

        match error {
            ScoreplayError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_validation_error_display() {
        let error = ScoreplayError::Validation {
            field: "name",
            message: "must not be empty".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid name: must not be empty");
    }

    #[test]
    fn test_invalid_config_display() {
        let error = ScoreplayError::InvalidConfig {
            name: "THESPORTSDB_TIMEOUT_SECS".to_string(),
            message: "expected seconds".to_string(),
        };
        let s = error.to_string();
        assert!(s.contains("THESPORTSDB_TIMEOUT_SECS"));
        assert!(s.contains("expected seconds"));
    }

    #[test]
    fn test_provider_error_kind_display() {
        assert_eq!(ProviderErrorKind::Transport.to_string(), "transport");
        assert_eq!(ProviderErrorKind::Status.to_string(), "status");
        assert_eq!(ProviderErrorKind::Decode.to_string(), "decode");
        assert_eq!(ProviderErrorKind::NotFound.to_string(), "not found");
    }
}

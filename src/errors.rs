use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the battle engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// One or both creature identifiers did not resolve in the catalog
    #[error("Pokémon not found: {}", .missing.join(", "))]
    NotFound { missing: Vec<String> },
    /// A resolved creature cannot take part in a battle
    #[error("Invalid data for {creature}: {reason}")]
    InvalidData {
        creature: String,
        reason: InvalidDataReason,
    },
    /// The turn limit must allow at least one turn
    #[error("Invalid turn limit: max_turns must be at least 1")]
    ZeroTurnLimit,
}

/// Why a creature definition failed the pre-battle integrity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidDataReason {
    #[error("move list is empty")]
    EmptyMoveList,
    #[error("type list is empty")]
    NoTypes,
    #[error("maximum HP is zero")]
    ZeroHp,
}

/// Errors raised while building a creature catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed RON catalog: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Unsupported catalog format: {0} (expected .json or .ron)")]
    UnsupportedFormat(PathBuf),
    #[error("Duplicate Pokémon name in catalog: {0}")]
    DuplicateName(String),
}

/// Errors raised while loading arena configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_every_identifier() {
        let err = BattleError::NotFound {
            missing: vec!["missingno".to_string(), "agumon".to_string()],
        };
        assert_eq!(err.to_string(), "Pokémon not found: missingno, agumon");
    }

    #[test]
    fn test_invalid_data_message() {
        let err = BattleError::InvalidData {
            creature: "Ditto".to_string(),
            reason: InvalidDataReason::EmptyMoveList,
        };
        assert_eq!(err.to_string(), "Invalid data for Ditto: move list is empty");
    }

    #[test]
    fn test_zero_turn_limit_message() {
        assert_eq!(
            BattleError::ZeroTurnLimit.to_string(),
            "Invalid turn limit: max_turns must be at least 1"
        );
    }
}

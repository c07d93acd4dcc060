//! Arena configuration, loaded from TOML with defaults for every field.

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Turn limit used when nothing else is configured.
pub const DEFAULT_MAX_TURNS: u32 = 500;

/// Knobs for a single battle resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Battles still running after this many turns end in a draw.
    pub max_turns: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// Top-level configuration shared by the CLI and the MCP server.
///
/// ```toml
/// catalog_path = "data/pokemon_data.json"
/// log_level = "debug"
///
/// [battle]
/// max_turns = 200
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Catalog file to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub battle: BattleConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "info".to_string(),
            battle: BattleConfig::default(),
        }
    }
}

impl ArenaConfig {
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: ArenaConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.battle.max_turns == 0 {
            return Err(ConfigError::Invalid(
                "battle.max_turns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

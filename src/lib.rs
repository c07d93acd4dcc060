//! Pokémon Battle Arena
//!
//! Resolves a fight between two creatures from a read-only catalog, turn by
//! turn, until one faints or the turn limit is hit. All randomness comes from
//! a caller-supplied source, so a seeded battle always replays the same way.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod mcp_interface;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Static creature data and the type chart.
pub use schema::{BaseStats, CreatureDefinition, MoveData, PokemonType};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{resolve_battle, resolve_battle_with_config, run_battle};
pub use battle::rng::{RandomSource, ScriptedRng, SeededRng};
pub use battle::state::{BattleEvent, BattleOutcome, BattleWinner, GameState};

// Catalog access.
pub use catalog::{normalize_name, Catalog, CreatureLookup};

// Configuration.
pub use config::{ArenaConfig, BattleConfig};

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, CatalogError, CatalogResult, ConfigError, ConfigResult,
    InvalidDataReason,
};

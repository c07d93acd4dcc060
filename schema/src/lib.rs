// Pokemon Battle Arena Schema - Shared type definitions
// This crate contains the catalog data types and the static type chart that
// the battle engine and its hosts share.

// Re-export the main types
pub use creature_data::*;
pub use pokemon_types::*;

pub mod creature_data;
pub mod pokemon_types;

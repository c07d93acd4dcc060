use crate::PokemonType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

/// A move as it appears in a creature's move list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub power: u16,
    /// Hit chance out of 100. Carried in the catalog but never rolled against.
    #[serde(default = "default_accuracy")]
    pub accuracy: u8,
    #[serde(rename = "type")]
    pub move_type: PokemonType,
    #[serde(default)]
    pub effect: String,
}

fn default_accuracy() -> u8 {
    100
}

impl MoveData {
    /// Moves with no base power never deal damage.
    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureDefinition {
    pub id: u32,
    pub name: String,
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub abilities: Vec<String>,
    pub stats: BaseStats,
    pub moves: Vec<MoveData>,
    #[serde(default)]
    pub evolution_chain: Vec<String>,
}

impl CreatureDefinition {
    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }
}

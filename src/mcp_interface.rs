//! Display and reporting functions shared by the CLI and the MCP server.
//!
//! Every function here returns plain text or a serializable report, so the
//! hosts only decide where the output goes.

use crate::battle::engine::resolve_battle_with_config;
use crate::battle::rng::SeededRng;
use crate::battle::state::BattleOutcome;
use crate::catalog::{Catalog, CreatureLookup};
use crate::config::BattleConfig;
use crate::errors::BattleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON-friendly summary of one battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleReport {
    pub pokemon1: String,
    pub pokemon2: String,
    /// `None` for a draw.
    pub winner: Option<String>,
    pub logs: Vec<String>,
    pub hp_remaining: BTreeMap<String, u16>,
    pub turns: u32,
    /// Seed that replays this battle.
    pub seed: u64,
}

/// Returns formatted text listing every creature in the catalog
pub fn available_pokemon_display(catalog: &Catalog) -> String {
    let mut output = format!("Available Pokémon ({}):\n", catalog.len());
    for (i, (_, definition)) in catalog.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, definition.name));
    }
    output
}

/// Full details of one creature, or a not-found message with suggestions.
pub fn pokemon_details_display(catalog: &Catalog, name: &str) -> String {
    let Some(definition) = catalog.lookup(name) else {
        return not_found_message(catalog, name);
    };

    let types: Vec<String> = definition.types.iter().map(|t| t.to_string()).collect();
    let stats = &definition.stats;

    let mut output = format!("{} (#{})\n", definition.name, definition.id);
    output.push_str(&format!("Types: {}\n", types.join("/")));
    output.push_str(&format!(
        "Base stats: HP {} / Atk {} / Def {} / SpA {} / SpD {} / Spe {}\n",
        stats.hp,
        stats.attack,
        stats.defense,
        stats.special_attack,
        stats.special_defense,
        stats.speed
    ));
    if !definition.abilities.is_empty() {
        output.push_str(&format!("Abilities: {}\n", definition.abilities.join(", ")));
    }

    output.push_str("Moves:\n");
    for move_data in &definition.moves {
        output.push_str(&format!(
            "  - {} ({}, power {}, accuracy {})\n",
            move_data.name, move_data.move_type, move_data.power, move_data.accuracy
        ));
    }

    if !definition.evolution_chain.is_empty() {
        output.push_str(&format!(
            "Evolution: {}\n",
            definition.evolution_chain.join(" -> ")
        ));
    }
    output
}

pub fn battle_report(outcome: &BattleOutcome, seed: u64) -> BattleReport {
    let [pokemon1, pokemon2] = outcome.combatants.clone();
    BattleReport {
        pokemon1,
        pokemon2,
        winner: outcome.winner.name().map(str::to_string),
        logs: outcome.log.clone(),
        hp_remaining: outcome.hp_remaining.clone(),
        turns: outcome.turns,
        seed,
    }
}

/// Console rendering: the battle log followed by a short summary.
pub fn battle_text(outcome: &BattleOutcome) -> String {
    let mut output = String::new();
    for line in &outcome.log {
        output.push_str(line);
        output.push('\n');
    }

    output.push('\n');
    match outcome.winner.name() {
        Some(name) => output.push_str(&format!("Winner: {} after {} turns\n", name, outcome.turns)),
        None => output.push_str(&format!("Draw after {} turns\n", outcome.turns)),
    }
    output.push_str("HP remaining:\n");
    for label in &outcome.combatants {
        let hp = outcome.hp_remaining.get(label).copied().unwrap_or(0);
        output.push_str(&format!("  {}: {}\n", label, hp));
    }
    output
}

/// Runs a seeded battle. A random seed is chosen (and reported) when none is given.
///
/// Errors come back as user-facing text, with suggestions for unknown names.
pub fn simulate_battle(
    catalog: &Catalog,
    pokemon1: &str,
    pokemon2: &str,
    seed: Option<u64>,
    config: &BattleConfig,
) -> Result<BattleReport, String> {
    let mut rng = seeded_rng(seed);

    match resolve_battle_with_config(pokemon1, pokemon2, catalog, &mut rng, config) {
        Ok(outcome) => Ok(battle_report(&outcome, rng.seed())),
        Err(err) => Err(battle_error_message(catalog, &err)),
    }
}

/// Text rendering of [`simulate_battle`], errors included.
pub fn simulate_battle_display(
    catalog: &Catalog,
    pokemon1: &str,
    pokemon2: &str,
    seed: Option<u64>,
    config: &BattleConfig,
) -> String {
    let mut rng = seeded_rng(seed);

    match resolve_battle_with_config(pokemon1, pokemon2, catalog, &mut rng, config) {
        Ok(outcome) => format!("{}Seed: {}\n", battle_text(&outcome), rng.seed()),
        Err(err) => battle_error_message(catalog, &err),
    }
}

fn seeded_rng(seed: Option<u64>) -> SeededRng {
    match seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    }
}

/// User-facing text for a failed battle.
pub fn battle_error_message(catalog: &Catalog, err: &BattleError) -> String {
    match err {
        BattleError::NotFound { missing } => missing
            .iter()
            .map(|name| not_found_message(catalog, name))
            .collect::<Vec<_>>()
            .join(""),
        BattleError::InvalidData { .. } | BattleError::ZeroTurnLimit => format!("{}\n", err),
    }
}

fn not_found_message(catalog: &Catalog, name: &str) -> String {
    let suggestions = catalog.suggest(name);
    if suggestions.is_empty() {
        format!("Pokémon '{}' not found.\n", name)
    } else {
        format!(
            "Pokémon '{}' not found. Did you mean: {}?\n",
            name,
            suggestions.join(", ")
        )
    }
}

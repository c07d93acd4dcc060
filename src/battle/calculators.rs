use crate::battle::rng::RandomSource;
use schema::{CreatureDefinition, MoveData, PokemonType};

/// Every creature fights at this fixed level.
pub const BATTLE_LEVEL: u32 = 50;

/// Same-type attack bonus multiplier.
pub const STAB_MULTIPLIER: f64 = 1.5;

/// Breakdown of a single attack, kept for the battle log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    /// Saturates at `u16::MAX`, which is already more than any HP pool holds.
    pub damage: u16,
    pub stab: f64,
    pub effectiveness: f64,
    /// `None` when the move has no power and no roll was made.
    pub random_factor: Option<f64>,
}

impl DamageOutcome {
    fn no_damage() -> Self {
        Self {
            damage: 0,
            stab: 1.0,
            effectiveness: 1.0,
            random_factor: None,
        }
    }
}

/// STAB applies when the move shares a type with its user.
pub fn stab_multiplier(attacker: &CreatureDefinition, move_data: &MoveData) -> f64 {
    if attacker.has_type(move_data.move_type) {
        STAB_MULTIPLIER
    } else {
        1.0
    }
}

/// Level-scaled damage before STAB, type effectiveness and the random roll.
///
/// `((2 * level / 5 + 2) * power * (attack / defense)) / 50 + 2`, with real
/// division throughout. A defense of zero counts as one.
pub fn base_damage(
    attacker: &CreatureDefinition,
    defender: &CreatureDefinition,
    power: u16,
) -> f64 {
    let level_factor = 2.0 * BATTLE_LEVEL as f64 / 5.0 + 2.0;
    let attack = attacker.stats.attack as f64;
    let defense = defender.stats.defense.max(1) as f64;

    (level_factor * power as f64 * (attack / defense)) / 50.0 + 2.0
}

/// Calculate the full outcome of `attacker` hitting `defender` with `move_data`.
///
/// Consumes exactly one damage roll for moves with power, none otherwise.
pub fn calculate_damage(
    attacker: &CreatureDefinition,
    defender: &CreatureDefinition,
    move_data: &MoveData,
    rng: &mut dyn RandomSource,
) -> DamageOutcome {
    if !move_data.is_damaging() {
        return DamageOutcome::no_damage();
    }

    let stab = stab_multiplier(attacker, move_data);
    let effectiveness = PokemonType::effectiveness(move_data.move_type, &defender.types);
    let random_factor = rng.damage_roll("damage roll");

    let damage = if effectiveness == 0.0 {
        // Immunity beats the minimum-damage rule.
        0
    } else {
        let raw = base_damage(attacker, defender, move_data.power);
        let scaled = (raw * stab * effectiveness * random_factor).floor();
        if scaled >= f64::from(u16::MAX) {
            u16::MAX
        } else {
            (scaled as u16).max(1)
        }
    };

    DamageOutcome {
        damage,
        stab,
        effectiveness,
        random_factor: Some(random_factor),
    }
}

/// Damage dealt by a single move.
pub fn compute_damage(
    attacker: &CreatureDefinition,
    defender: &CreatureDefinition,
    move_data: &MoveData,
    rng: &mut dyn RandomSource,
) -> u16 {
    calculate_damage(attacker, defender, move_data, rng).damage
}

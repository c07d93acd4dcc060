use crate::battle::ai::{MoveSelector, RandomMoveSelector};
use crate::battle::calculators::calculate_damage;
use crate::battle::rng::RandomSource;
use crate::battle::state::{BattleEvent, BattleOutcome, BattleState, EventBus, GameState};
use crate::catalog::CreatureLookup;
use crate::config::BattleConfig;
use crate::errors::{BattleError, BattleResult, InvalidDataReason};
use schema::CreatureDefinition;

/// Main entry point: look up both creatures and fight until one faints.
///
/// Unknown identifiers are reported together, before any randomness is used.
pub fn resolve_battle<L>(
    first_id: &str,
    second_id: &str,
    catalog: &L,
    rng: &mut dyn RandomSource,
) -> BattleResult<BattleOutcome>
where
    L: CreatureLookup + ?Sized,
{
    resolve_battle_with_config(first_id, second_id, catalog, rng, &BattleConfig::default())
}

pub fn resolve_battle_with_config<L>(
    first_id: &str,
    second_id: &str,
    catalog: &L,
    rng: &mut dyn RandomSource,
    config: &BattleConfig,
) -> BattleResult<BattleOutcome>
where
    L: CreatureLookup + ?Sized,
{
    let first = catalog.lookup(first_id);
    let second = catalog.lookup(second_id);

    let (first, second) = match (first, second) {
        (Some(first), Some(second)) => (first, second),
        (first, second) => {
            let missing: Vec<String> = [(first_id, first.is_none()), (second_id, second.is_none())]
                .into_iter()
                .filter(|(_, is_missing)| *is_missing)
                .map(|(id, _)| id.to_string())
                .collect();
            tracing::warn!(?missing, "Battle requested with unknown Pokémon");
            return Err(BattleError::NotFound { missing });
        }
    };

    run_battle(first, second, rng, config)
}

/// Runs a battle between two already-resolved definitions with random move choice.
pub fn run_battle(
    first: &CreatureDefinition,
    second: &CreatureDefinition,
    rng: &mut dyn RandomSource,
    config: &BattleConfig,
) -> BattleResult<BattleOutcome> {
    run_battle_with_selector(first, second, &RandomMoveSelector::new(), rng, config)
}

pub fn run_battle_with_selector(
    first: &CreatureDefinition,
    second: &CreatureDefinition,
    selector: &dyn MoveSelector,
    rng: &mut dyn RandomSource,
    config: &BattleConfig,
) -> BattleResult<BattleOutcome> {
    if config.max_turns == 0 {
        return Err(BattleError::ZeroTurnLimit);
    }
    validate_definition(first)?;
    validate_definition(second)?;

    let _span =
        tracing::info_span!("battle", first = %first.name, second = %second.name).entered();

    let mut state = BattleState::new(first, second);
    let mut bus = EventBus::new();
    state.game_state = GameState::InProgress;

    loop {
        resolve_turn(&mut state, selector, rng, &mut bus)?;

        if state.game_state.is_finished() {
            break;
        }

        if state.turn_number >= config.max_turns {
            tracing::warn!(max_turns = config.max_turns, "Turn limit reached, declaring a draw");
            state.game_state = GameState::Draw;
            bus.push(BattleEvent::TurnLimitReached {
                max_turns: config.max_turns,
            });
            bus.push(BattleEvent::BattleEnded { winner: None });
            break;
        }

        state.turn_number += 1;
    }

    let outcome = BattleOutcome::from_finished(&state, bus);
    tracing::info!(
        winner = outcome.winner.name().unwrap_or("draw"),
        turns = outcome.turns,
        "Battle finished"
    );
    Ok(outcome)
}

/// Pre-battle integrity check on a resolved definition.
pub fn validate_definition(definition: &CreatureDefinition) -> BattleResult<()> {
    let reason = if definition.moves.is_empty() {
        Some(InvalidDataReason::EmptyMoveList)
    } else if definition.types.is_empty() {
        Some(InvalidDataReason::NoTypes)
    } else if definition.stats.hp == 0 {
        Some(InvalidDataReason::ZeroHp)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(BattleError::InvalidData {
            creature: definition.name.clone(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Higher speed acts first; on a tie the first-listed combatant does.
pub fn determine_action_order(battle_state: &BattleState<'_>) -> [usize; 2] {
    let [first, second] = &battle_state.combatants;
    if second.speed() > first.speed() {
        [1, 0]
    } else {
        [0, 1]
    }
}

/// Executes one full turn. Stops early as soon as someone faints.
fn resolve_turn(
    battle_state: &mut BattleState<'_>,
    selector: &dyn MoveSelector,
    rng: &mut dyn RandomSource,
    bus: &mut EventBus,
) -> BattleResult<()> {
    bus.push(BattleEvent::TurnStarted {
        turn_number: battle_state.turn_number,
    });

    for attacker_index in determine_action_order(battle_state) {
        let defender_index = 1 - attacker_index;
        execute_attack(battle_state, attacker_index, selector, rng, bus)?;

        let defender = &battle_state.combatants[defender_index];
        if defender.is_fainted() {
            bus.push(BattleEvent::PokemonFainted {
                player_index: defender_index,
                pokemon: defender.label().to_string(),
            });

            battle_state.game_state = if attacker_index == 0 {
                GameState::Player1Win
            } else {
                GameState::Player2Win
            };
            bus.push(BattleEvent::BattleEnded {
                winner: Some(battle_state.combatants[attacker_index].label().to_string()),
            });
            break;
        }
    }

    Ok(())
}

fn execute_attack(
    battle_state: &mut BattleState<'_>,
    attacker_index: usize,
    selector: &dyn MoveSelector,
    rng: &mut dyn RandomSource,
    bus: &mut EventBus,
) -> BattleResult<()> {
    let defender_index = 1 - attacker_index;
    let turn_number = battle_state.turn_number;
    let attacker = &battle_state.combatants[attacker_index];
    let attacker_definition = attacker.definition();
    let defender_definition = battle_state.combatants[defender_index].definition();

    let move_used = selector.choose_move(attacker, rng)?;
    let outcome = calculate_damage(attacker_definition, defender_definition, move_used, rng);

    let attacker_label = attacker.label().to_string();
    let defender = &mut battle_state.combatants[defender_index];
    defender.take_damage(outcome.damage);

    tracing::debug!(
        turn = turn_number,
        attacker = %attacker_label,
        move_name = %move_used.name,
        damage = outcome.damage,
        effectiveness = outcome.effectiveness,
        remaining_hp = defender.current_hp(),
        "Attack resolved"
    );

    bus.push(BattleEvent::MoveUsed {
        player_index: attacker_index,
        attacker: attacker_label,
        defender: defender.label().to_string(),
        move_name: move_used.name.clone(),
        damage: outcome.damage,
        effectiveness: outcome.effectiveness,
        remaining_hp: defender.current_hp(),
    });

    Ok(())
}

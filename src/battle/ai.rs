//! Move selection for combatants.

use crate::battle::rng::RandomSource;
use crate::battle::state::Combatant;
use crate::errors::{BattleError, BattleResult, InvalidDataReason};
use schema::MoveData;

/// A trait for any system that can decide which move a combatant uses.
pub trait MoveSelector {
    fn choose_move<'a>(
        &self,
        combatant: &Combatant<'a>,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<&'a MoveData>;
}

/// Picks uniformly from the move list, with no memory of earlier turns.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMoveSelector;

impl RandomMoveSelector {
    pub fn new() -> Self {
        Self
    }
}

impl MoveSelector for RandomMoveSelector {
    fn choose_move<'a>(
        &self,
        combatant: &Combatant<'a>,
        rng: &mut dyn RandomSource,
    ) -> BattleResult<&'a MoveData> {
        choose_move(combatant, rng)
    }
}

/// Uniform random move choice. Consumes exactly one draw.
pub fn choose_move<'a>(
    combatant: &Combatant<'a>,
    rng: &mut dyn RandomSource,
) -> BattleResult<&'a MoveData> {
    let moves = &combatant.definition().moves;
    if moves.is_empty() {
        return Err(BattleError::InvalidData {
            creature: combatant.definition().name.clone(),
            reason: InvalidDataReason::EmptyMoveList,
        });
    }

    let index = rng.pick_index(moves.len(), "move selection");
    Ok(&moves[index])
}

use schema::CreatureDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
pub enum GameState {
    NotStarted,
    InProgress,
    Player1Win,
    Player2Win,
    Draw,
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            GameState::Player1Win | GameState::Player2Win | GameState::Draw
        )
    }
}

/// A creature taking part in one battle.
///
/// Wraps the catalog definition by reference and tracks the only thing that
/// changes during a fight: current HP, kept within `[0, stats.hp]`.
#[derive(Debug, Clone)]
pub struct Combatant<'a> {
    definition: &'a CreatureDefinition,
    label: String,
    current_hp: u16,
}

impl<'a> Combatant<'a> {
    pub fn new(definition: &'a CreatureDefinition, label: String) -> Self {
        Self {
            definition,
            label,
            current_hp: definition.stats.hp,
        }
    }

    pub fn definition(&self) -> &'a CreatureDefinition {
        self.definition
    }

    /// Name used in logs and results. Unique within a battle.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn speed(&self) -> u16 {
        self.definition.stats.speed
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Applies damage, stopping at zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    TurnStarted {
        turn_number: u32,
    },
    MoveUsed {
        player_index: usize,
        attacker: String,
        defender: String,
        move_name: String,
        damage: u16,
        effectiveness: f64,
        remaining_hp: u16,
    },
    PokemonFainted {
        player_index: usize,
        pokemon: String,
    },
    TurnLimitReached {
        max_turns: u32,
    },
    BattleEnded {
        winner: Option<String>,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable log line.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::MoveUsed {
                attacker,
                defender,
                move_name,
                damage,
                effectiveness,
                remaining_hp,
                ..
            } => {
                let mut line = format!("{} used {}!", attacker, move_name);
                if let Some(note) = Self::format_effectiveness(*effectiveness) {
                    line.push(' ');
                    line.push_str(note);
                }
                line.push_str(&format!(
                    " {} took {} damage ({} HP left).",
                    defender, damage, remaining_hp
                ));
                Some(line)
            }
            BattleEvent::PokemonFainted { pokemon, .. } => Some(format!("{} fainted!", pokemon)),
            BattleEvent::TurnLimitReached { max_turns } => Some(format!(
                "The battle reached the {}-turn limit!",
                max_turns
            )),
            BattleEvent::BattleEnded { winner } => match winner {
                Some(name) => Some(format!("{} won the battle!", name)),
                None => Some("The battle ended in a draw!".to_string()),
            },
        }
    }

    fn format_effectiveness(multiplier: f64) -> Option<&'static str> {
        match multiplier {
            m if m > 1.0 => Some("It's super effective!"),
            m if m < 1.0 && m > 0.0 => Some("It's not very effective..."),
            m if m == 0.0 => Some("It had no effect!"),
            _ => None, // Normal effectiveness, no message
        }
    }
}

/// Event bus for collecting battle events in the order they happen.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    /// Human-readable lines for every non-silent event.
    pub fn formatted(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Mutable state of one battle in progress.
#[derive(Debug, Clone)]
pub struct BattleState<'a> {
    pub combatants: [Combatant<'a>; 2],
    pub turn_number: u32,
    pub game_state: GameState,
}

impl<'a> BattleState<'a> {
    pub fn new(first: &'a CreatureDefinition, second: &'a CreatureDefinition) -> Self {
        let (first_label, second_label) = if first.name == second.name {
            (format!("{} #1", first.name), format!("{} #2", second.name))
        } else {
            (first.name.clone(), second.name.clone())
        };

        Self {
            combatants: [
                Combatant::new(first, first_label),
                Combatant::new(second, second_label),
            ],
            turn_number: 1,
            game_state: GameState::NotStarted,
        }
    }

    pub fn winner_index(&self) -> Option<usize> {
        match self.game_state {
            GameState::Player1Win => Some(0),
            GameState::Player2Win => Some(1),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BattleWinner {
    Pokemon { player_index: usize, name: String },
    Draw,
}

impl BattleWinner {
    pub fn name(&self) -> Option<&str> {
        match self {
            BattleWinner::Pokemon { name, .. } => Some(name),
            BattleWinner::Draw => None,
        }
    }
}

/// Final, immutable result of a battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleOutcome {
    /// Labels of both sides, in the order they were given.
    pub combatants: [String; 2],
    pub winner: BattleWinner,
    pub log: Vec<String>,
    pub events: Vec<BattleEvent>,
    pub hp_remaining: BTreeMap<String, u16>,
    /// Turns started, including the one that ended the battle.
    pub turns: u32,
}

impl BattleOutcome {
    pub(crate) fn from_finished(state: &BattleState<'_>, bus: EventBus) -> Self {
        let winner = match state.winner_index() {
            Some(index) => BattleWinner::Pokemon {
                player_index: index,
                name: state.combatants[index].label().to_string(),
            },
            None => BattleWinner::Draw,
        };

        let hp_remaining = state
            .combatants
            .iter()
            .map(|c| (c.label().to_string(), c.current_hp()))
            .collect();

        Self {
            combatants: [
                state.combatants[0].label().to_string(),
                state.combatants[1].label().to_string(),
            ],
            winner,
            log: bus.formatted(),
            events: bus.into_events(),
            hp_remaining,
            turns: state.turn_number,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner == BattleWinner::Draw
    }
}

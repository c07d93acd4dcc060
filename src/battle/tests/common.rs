use crate::battle::rng::ScriptedRng;
use crate::catalog::Catalog;
use crate::errors::BattleResult;
use schema::{BaseStats, CreatureDefinition, MoveData, PokemonType};

/// A builder for creating test creature definitions with common defaults.
///
/// Defaults to a Typeless creature so Normal moves get neither STAB nor a
/// type multiplier unless a test asks for one.
///
/// # Example
/// ```ignore
/// let pikachu = TestCreatureBuilder::new("Pikachu")
///     .with_types(vec![PokemonType::Electric])
///     .with_move("Thunder Shock", 40, PokemonType::Electric)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    types: Vec<PokemonType>,
    stats: BaseStats,
    moves: Option<Vec<MoveData>>,
}

impl TestCreatureBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types: vec![PokemonType::Typeless],
            stats: BaseStats {
                hp: 100,
                attack: 50,
                defense: 50,
                special_attack: 50,
                special_defense: 50,
                speed: 50,
            },
            moves: None,
        }
    }

    pub fn with_types(mut self, types: Vec<PokemonType>) -> Self {
        self.types = types;
        self
    }

    /// Sets the stats the engine reads: HP, Attack, Defense and Speed.
    pub fn with_stats(mut self, hp: u16, attack: u16, defense: u16, speed: u16) -> Self {
        self.stats.hp = hp;
        self.stats.attack = attack;
        self.stats.defense = defense;
        self.stats.speed = speed;
        self
    }

    pub fn with_speed(mut self, speed: u16) -> Self {
        self.stats.speed = speed;
        self
    }

    pub fn with_hp(mut self, hp: u16) -> Self {
        self.stats.hp = hp;
        self
    }

    /// Appends a move. The first call replaces the default Tackle.
    pub fn with_move(mut self, name: &str, power: u16, move_type: PokemonType) -> Self {
        self.moves.get_or_insert_with(Vec::new).push(MoveData {
            name: name.to_string(),
            power,
            accuracy: 100,
            move_type,
            effect: String::new(),
        });
        self
    }

    pub fn without_moves(mut self) -> Self {
        self.moves = Some(Vec::new());
        self
    }

    pub fn build(self) -> CreatureDefinition {
        let moves = self.moves.unwrap_or_else(|| {
            vec![MoveData {
                name: "Tackle".to_string(),
                power: 40,
                accuracy: 100,
                move_type: PokemonType::Normal,
                effect: String::new(),
            }]
        });

        CreatureDefinition {
            id: 0,
            name: self.name,
            types: self.types,
            abilities: Vec::new(),
            stats: self.stats,
            moves,
            evolution_chain: Vec::new(),
        }
    }
}

/// Creature A from the reference scenario: slower, Scratch only.
pub fn reference_creature_a() -> CreatureDefinition {
    TestCreatureBuilder::new("A")
        .with_stats(39, 52, 43, 50)
        .with_move("Scratch", 40, PokemonType::Normal)
        .build()
}

/// Creature B from the reference scenario: faster, Tackle only.
pub fn reference_creature_b() -> CreatureDefinition {
    TestCreatureBuilder::new("B")
        .with_stats(44, 48, 65, 65)
        .with_move("Tackle", 40, PokemonType::Normal)
        .build()
}

pub fn create_test_catalog(definitions: Vec<CreatureDefinition>) -> Catalog {
    match Catalog::from_definitions(definitions) {
        Ok(catalog) => catalog,
        Err(err) => panic!("Failed to build test catalog: {}", err),
    }
}

/// A `ScriptedRng` that always rolls maximum damage and picks the last move.
/// Long enough that tests which don't care about the draws never exhaust it.
pub fn max_roll_rng() -> ScriptedRng {
    ScriptedRng::constant(1.0, 10_000)
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Elemental type of a creature or a move.
///
/// Catalog data may spell type names in any case ("Electric", "electric").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
    Typeless,
}

impl TryFrom<String> for PokemonType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl PokemonType {
    /// Calculate type effectiveness multiplier for attacking type vs defending type
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f64 {
        use PokemonType::*;

        match (attacking, defending) {
            // Normal
            (Normal, Ghost) => 0.0,
            (Normal, Rock) | (Normal, Steel) => 0.5,
            (Normal, _) => 1.0,

            // Fire
            (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 0.5,
            (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => 2.0,
            (Fire, _) => 1.0,

            // Water
            (Water, Water) | (Water, Grass) | (Water, Dragon) => 0.5,
            (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,
            (Water, _) => 1.0,

            // Electric
            (Electric, Electric) | (Electric, Grass) | (Electric, Dragon) => 0.5,
            (Electric, Ground) => 0.0,
            (Electric, Water) | (Electric, Flying) => 2.0,
            (Electric, _) => 1.0,

            // Grass
            (Grass, Fire)
            | (Grass, Grass)
            | (Grass, Poison)
            | (Grass, Flying)
            | (Grass, Bug)
            | (Grass, Dragon)
            | (Grass, Steel) => 0.5,
            (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 2.0,
            (Grass, _) => 1.0,

            // Ice
            (Ice, Fire) | (Ice, Water) | (Ice, Ice) | (Ice, Steel) => 0.5,
            (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 2.0,
            (Ice, _) => 1.0,

            // Fighting
            (Fighting, Poison)
            | (Fighting, Flying)
            | (Fighting, Psychic)
            | (Fighting, Bug)
            | (Fighting, Fairy) => 0.5,
            (Fighting, Ghost) => 0.0,
            (Fighting, Normal)
            | (Fighting, Ice)
            | (Fighting, Rock)
            | (Fighting, Dark)
            | (Fighting, Steel) => 2.0,
            (Fighting, _) => 1.0,

            // Poison
            (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => 0.5,
            (Poison, Steel) => 0.0,
            (Poison, Grass) | (Poison, Fairy) => 2.0,
            (Poison, _) => 1.0,

            // Ground
            (Ground, Grass) | (Ground, Bug) => 0.5,
            (Ground, Flying) => 0.0,
            (Ground, Fire)
            | (Ground, Electric)
            | (Ground, Poison)
            | (Ground, Rock)
            | (Ground, Steel) => 2.0,
            (Ground, _) => 1.0,

            // Flying
            (Flying, Electric) | (Flying, Rock) | (Flying, Steel) => 0.5,
            (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,
            (Flying, _) => 1.0,

            // Psychic
            (Psychic, Psychic) | (Psychic, Steel) => 0.5,
            (Psychic, Dark) => 0.0,
            (Psychic, Fighting) | (Psychic, Poison) => 2.0,
            (Psychic, _) => 1.0,

            // Bug
            (Bug, Fire)
            | (Bug, Fighting)
            | (Bug, Poison)
            | (Bug, Flying)
            | (Bug, Ghost)
            | (Bug, Steel)
            | (Bug, Fairy) => 0.5,
            (Bug, Grass) | (Bug, Psychic) | (Bug, Dark) => 2.0,
            (Bug, _) => 1.0,

            // Rock
            (Rock, Fighting) | (Rock, Ground) | (Rock, Steel) => 0.5,
            (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 2.0,
            (Rock, _) => 1.0,

            // Ghost
            (Ghost, Normal) => 0.0,
            (Ghost, Psychic) | (Ghost, Ghost) => 2.0,
            (Ghost, Dark) => 0.5,
            (Ghost, _) => 1.0,

            // Dragon
            (Dragon, Steel) => 0.5,
            (Dragon, Fairy) => 0.0,
            (Dragon, Dragon) => 2.0,
            (Dragon, _) => 1.0,

            // Dark
            (Dark, Fighting) | (Dark, Dark) | (Dark, Fairy) => 0.5,
            (Dark, Psychic) | (Dark, Ghost) => 2.0,
            (Dark, _) => 1.0,

            // Steel
            (Steel, Fire) | (Steel, Water) | (Steel, Electric) | (Steel, Steel) => 0.5,
            (Steel, Ice) | (Steel, Rock) | (Steel, Fairy) => 2.0,
            (Steel, _) => 1.0,

            // Fairy
            (Fairy, Fire) | (Fairy, Poison) | (Fairy, Steel) => 0.5,
            (Fairy, Fighting) | (Fairy, Dragon) | (Fairy, Dark) => 2.0,
            (Fairy, _) => 1.0,

            (Typeless, _) => 1.0,
        }
    }

    /// Combined multiplier of a move type against every type of the defender.
    /// Multipliers compound, so a dual-type defender can take 0, 0.25, 4, etc.
    pub fn effectiveness(move_type: PokemonType, defender_types: &[PokemonType]) -> f64 {
        defender_types
            .iter()
            .fold(1.0, |multiplier, &defending| {
                multiplier * Self::type_effectiveness(move_type, defending)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_reference_matchups() {
        use PokemonType::*;
        assert_eq!(PokemonType::effectiveness(Electric, &[Water]), 2.0);
        assert_eq!(PokemonType::effectiveness(Electric, &[Ground]), 0.0);
        assert_eq!(PokemonType::effectiveness(Fire, &[Water]), 0.5);
        assert_eq!(PokemonType::effectiveness(Normal, &[Ghost]), 0.0);
    }

    #[test]
    fn test_dual_types_compound() {
        use PokemonType::*;
        // Charizard-like Fire/Flying takes 4x from Rock
        assert_eq!(PokemonType::effectiveness(Rock, &[Fire, Flying]), 4.0);
        // Fire against Water/Dragon is doubly resisted
        assert_eq!(PokemonType::effectiveness(Fire, &[Water, Dragon]), 0.25);
        // One immune type zeroes out the whole matchup
        assert_eq!(PokemonType::effectiveness(Electric, &[Water, Ground]), 0.0);
        // Super effective and resisted cancel out
        assert_eq!(PokemonType::effectiveness(Grass, &[Water, Poison]), 1.0);
    }

    #[test]
    fn test_chart_is_not_symmetric() {
        use PokemonType::*;
        assert_eq!(PokemonType::type_effectiveness(Ghost, Normal), 0.0);
        assert_eq!(PokemonType::type_effectiveness(Fighting, Normal), 2.0);
        assert_eq!(PokemonType::type_effectiveness(Normal, Fighting), 1.0);
    }

    #[test]
    fn test_no_defender_types_is_neutral() {
        for attacking in PokemonType::iter() {
            assert_eq!(PokemonType::effectiveness(attacking, &[]), 1.0);
        }
    }

    #[test]
    fn test_every_multiplier_is_a_known_value() {
        for attacking in PokemonType::iter() {
            for defending in PokemonType::iter() {
                let multiplier = PokemonType::type_effectiveness(attacking, defending);
                assert!(
                    [0.0, 0.5, 1.0, 2.0].contains(&multiplier),
                    "{} vs {} gave {}",
                    attacking,
                    defending,
                    multiplier
                );
            }
        }
    }

    #[test]
    fn test_typeless_is_always_neutral() {
        for defending in PokemonType::iter() {
            assert_eq!(
                PokemonType::type_effectiveness(PokemonType::Typeless, defending),
                1.0
            );
        }
    }

    #[test]
    fn test_immunities() {
        use PokemonType::*;
        assert_eq!(PokemonType::type_effectiveness(Ground, Flying), 0.0);
        assert_eq!(PokemonType::type_effectiveness(Dragon, Fairy), 0.0);
        assert_eq!(PokemonType::type_effectiveness(Water, Fire), 2.0);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("electric".parse::<PokemonType>().unwrap(), PokemonType::Electric);
        assert_eq!("FIRE".parse::<PokemonType>().unwrap(), PokemonType::Fire);
        assert!("Plasma".parse::<PokemonType>().is_err());
    }

    #[test]
    fn test_deserialize_from_catalog_strings() {
        let types: Vec<PokemonType> = serde_json::from_str(r#"["Grass", "poison"]"#).unwrap();
        assert_eq!(types, vec![PokemonType::Grass, PokemonType::Poison]);

        let bad: Result<Vec<PokemonType>, _> = serde_json::from_str(r#"["Plasma"]"#);
        assert!(bad.is_err());
    }
}

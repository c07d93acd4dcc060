#[cfg(test)]
mod tests {
    use crate::battle::engine::run_battle;
    use crate::battle::rng::ScriptedRng;
    use crate::battle::state::{BattleEvent, BattleWinner};
    use crate::battle::tests::common::{assert_ok, TestCreatureBuilder};
    use crate::config::{BattleConfig, DEFAULT_MAX_TURNS};
    use crate::errors::BattleError;
    use pretty_assertions::assert_eq;
    use schema::{CreatureDefinition, PokemonType};

    fn splash_user(name: &str) -> CreatureDefinition {
        TestCreatureBuilder::new(name)
            .with_move("Splash", 0, PokemonType::Water)
            .build()
    }

    #[test]
    fn test_harmless_battle_is_a_draw_at_the_limit() {
        let first = splash_user("Magikarp");
        let second = splash_user("Feebas");
        let config = BattleConfig { max_turns: 10 };
        // Only move picks are drawn: two per turn.
        let mut rng = ScriptedRng::constant(0.0, 20);

        let outcome = assert_ok(run_battle(&first, &second, &mut rng, &config));

        assert_eq!(outcome.winner, BattleWinner::Draw);
        assert!(outcome.is_draw());
        assert_eq!(outcome.turns, 10);
        assert_eq!(outcome.hp_remaining.get("Magikarp"), Some(&100));
        assert_eq!(outcome.hp_remaining.get("Feebas"), Some(&100));
        assert_eq!(rng.draws(), 20);

        let tail = &outcome.events[outcome.events.len() - 2..];
        assert_eq!(
            tail,
            &[
                BattleEvent::TurnLimitReached { max_turns: 10 },
                BattleEvent::BattleEnded { winner: None },
            ]
        );
        assert_eq!(
            outcome.log.last().map(String::as_str),
            Some("The battle ended in a draw!")
        );
    }

    #[test]
    fn test_default_limit_applies() {
        let first = splash_user("Magikarp");
        let second = splash_user("Feebas");
        let mut rng = ScriptedRng::constant(0.0, 2 * DEFAULT_MAX_TURNS as usize);

        let outcome = assert_ok(run_battle(
            &first,
            &second,
            &mut rng,
            &BattleConfig::default(),
        ));

        assert!(outcome.is_draw());
        assert_eq!(outcome.turns, DEFAULT_MAX_TURNS);
        let turn_starts = outcome
            .events
            .iter()
            .filter(|event| matches!(event, BattleEvent::TurnStarted { .. }))
            .count();
        assert_eq!(turn_starts, DEFAULT_MAX_TURNS as usize);
    }

    #[test]
    fn test_knockout_on_the_last_turn_is_not_a_draw() {
        // 100 HP, 15 damage per hit at max roll: the seventh hit lands on turn 7.
        let attacker = TestCreatureBuilder::new("Rattata")
            .with_stats(100, 38, 65, 90)
            .build();
        let target = splash_user("Magikarp");
        let config = BattleConfig { max_turns: 7 };

        let outcome = assert_ok(run_battle(
            &attacker,
            &target,
            &mut ScriptedRng::constant(1.0, 100),
            &config,
        ));

        assert_eq!(outcome.winner.name(), Some("Rattata"));
        assert_eq!(outcome.turns, 7);
        assert!(!outcome
            .events
            .iter()
            .any(|event| matches!(event, BattleEvent::TurnLimitReached { .. })));
    }

    #[test]
    fn test_immune_pair_stalls_until_the_limit() {
        let ghost = TestCreatureBuilder::new("Gastly")
            .with_types(vec![PokemonType::Ghost])
            .with_move("Lick", 30, PokemonType::Ghost)
            .build();
        let normal = TestCreatureBuilder::new("Kangaskhan")
            .with_types(vec![PokemonType::Normal])
            .with_move("Tackle", 40, PokemonType::Normal)
            .build();
        let config = BattleConfig { max_turns: 3 };
        // Pick and roll for each side, three turns.
        let mut rng = ScriptedRng::constant(0.5, 12);

        let outcome = assert_ok(run_battle(&ghost, &normal, &mut rng, &config));

        assert!(outcome.is_draw());
        assert_eq!(outcome.hp_remaining.get("Gastly"), Some(&100));
        assert_eq!(outcome.hp_remaining.get("Kangaskhan"), Some(&100));
        assert_eq!(rng.draws(), 12);
    }

    #[test]
    fn test_zero_turn_limit_is_rejected_before_any_draw() {
        let first = splash_user("Magikarp");
        let second = splash_user("Feebas");
        let mut rng = ScriptedRng::constant(0.0, 10);

        let result = run_battle(&first, &second, &mut rng, &BattleConfig { max_turns: 0 });

        assert_eq!(result, Err(BattleError::ZeroTurnLimit));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_single_turn_limit_never_exceeds_the_cap() {
        let first = splash_user("Magikarp");
        let second = splash_user("Feebas");
        let mut rng = ScriptedRng::constant(0.0, 2);

        let outcome = assert_ok(run_battle(
            &first,
            &second,
            &mut rng,
            &BattleConfig { max_turns: 1 },
        ));

        assert!(outcome.is_draw());
        assert_eq!(outcome.turns, 1);
    }
}

// crates/standings_core/src/engine/calculator_contract_test.rs

#[cfg(test)]
mod contracts {
    use crate::engine::StandingsCalculator;
    use crate::models::{MatchScore, StandingsDelta};

    fn delta(sport: &str, score: MatchScore) -> StandingsDelta {
        StandingsCalculator::default()
            .calculate(sport, &score)
            .expect("default calculator never fails")
    }

    // ============================================
    // General rule: 3 / 1 / 0
    // ============================================

    #[test]
    fn general_home_win() {
        let d = delta("football", MatchScore::new(2, 1));
        assert_eq!((d.home.played, d.away.played), (1, 1));
        assert_eq!(d.home.wins, 1);
        assert_eq!(d.home.points, 3);
        assert_eq!(d.away.losses, 1);
        assert_eq!(d.away.points, 0);
        assert_eq!((d.home.goals_for, d.home.goals_against), (2, 1));
        assert_eq!((d.away.goals_for, d.away.goals_against), (1, 2));
    }

    #[test]
    fn general_draw() {
        let d = delta("Soccer", MatchScore::new(1, 1));
        for side in [d.home, d.away] {
            assert_eq!(side.draws, 1);
            assert_eq!(side.points, 1);
            assert_eq!(side.wins, 0);
            assert_eq!(side.losses, 0);
        }
    }

    #[test]
    fn futsal_uses_general_rule() {
        let d = delta("FUTSAL", MatchScore::new(5, 3));
        assert_eq!(d.home.points, 3);
        assert_eq!(d.away.points, 0);
    }

    #[test]
    fn unknown_sport_falls_back_to_general() {
        let d = delta("Chess", MatchScore::new(1, 0));
        assert_eq!(d.home.points, 3);
        assert_eq!(d.away.points, 0);

        let d = delta("Chess", MatchScore::new(0, 0));
        assert_eq!(d.home.points, 1);
        assert_eq!(d.away.points, 1);
    }

    // ============================================
    // Basketball: 2 / 1, loss still recorded
    // ============================================

    #[test]
    fn basketball_winner_two_loser_one() {
        let d = delta("Basketball", MatchScore::new(70, 65));
        assert_eq!(d.home.wins, 1);
        assert_eq!(d.home.points, 2);
        assert_eq!(d.home.losses, 0);
        assert_eq!(d.away.wins, 0);
        assert_eq!(d.away.points, 1);
        assert_eq!(d.away.losses, 1);
    }

    // ============================================
    // Ice hockey: overtime consolation point
    // ============================================

    #[test]
    fn hockey_overtime_win() {
        let d = delta("ice hockey", MatchScore::new(3, 2).with_overtime());
        assert_eq!(d.home.wins, 1);
        assert_eq!(d.home.points, 2);
        assert_eq!(d.home.overtime_wins, 1);
        assert_eq!(d.away.points, 1);
        assert_eq!(d.away.overtime_losses, 1);
        assert_eq!(d.away.losses, 0);
    }

    // ============================================
    // Volleyball: sets, not goals
    // ============================================

    #[test]
    fn volleyball_three_one() {
        let d = delta("volleyball", MatchScore::new(3, 1));
        assert_eq!(d.home.points, 3);
        assert_eq!(d.away.points, 0);
        assert_eq!(d.home.sets_won, 3);
        assert_eq!(d.home.sets_lost, 1);
        assert_eq!(d.away.sets_won, 1);
        assert_eq!(d.away.sets_lost, 3);
        for side in [d.home, d.away] {
            assert_eq!(side.goals_for, 0);
            assert_eq!(side.goals_against, 0);
        }
    }

    #[test]
    fn volleyball_three_two() {
        let d = delta("volleyball", MatchScore::new(3, 2));
        assert_eq!(d.home.points, 2);
        assert_eq!(d.away.points, 1);
        assert_eq!(d.home.wins, 1);
        assert_eq!(d.away.losses, 1);
    }

    #[test]
    fn volleyball_three_nil() {
        let d = delta("volleyball", MatchScore::new(3, 0));
        assert_eq!(d.home.points, 3);
        assert_eq!(d.away.points, 0);
    }
}

#[cfg(test)]
mod properties {
    use crate::engine::StandingsCalculator;
    use crate::models::{MatchScore, ScoringRule};
    use proptest::prelude::*;

    fn rule_strategy() -> impl Strategy<Value = ScoringRule> {
        prop_oneof![
            Just(ScoringRule::General),
            Just(ScoringRule::Basketball),
            Just(ScoringRule::IceHockey),
            Just(ScoringRule::Volleyball),
        ]
    }

    fn score_strategy() -> impl Strategy<Value = MatchScore> {
        (0u32..200, 0u32..200, any::<bool>(), any::<bool>()).prop_map(
            |(home_score, away_score, has_overtime, has_penalties)| MatchScore {
                home_score,
                away_score,
                has_overtime,
                has_penalties,
            },
        )
    }

    proptest! {
        #[test]
        fn every_match_is_played_once(rule in rule_strategy(), score in score_strategy()) {
            let d = StandingsCalculator::default().calculate_for_rule(rule, &score).unwrap();
            prop_assert_eq!(d.home.played, 1);
            prop_assert_eq!(d.away.played, 1);
        }

        #[test]
        fn one_result_per_side(rule in rule_strategy(), score in score_strategy()) {
            let d = StandingsCalculator::default().calculate_for_rule(rule, &score).unwrap();
            for side in [d.home, d.away] {
                let results = side.wins + side.draws + side.losses + side.overtime_losses;
                prop_assert_eq!(results, 1);
            }
        }

        #[test]
        fn scores_are_mirrored(rule in rule_strategy(), score in score_strategy()) {
            let d = StandingsCalculator::default().calculate_for_rule(rule, &score).unwrap();
            prop_assert_eq!(d.home.goals_for, d.away.goals_against);
            prop_assert_eq!(d.home.sets_won, d.away.sets_lost);
            if rule == ScoringRule::Volleyball {
                prop_assert_eq!(d.home.goals_for + d.home.goals_against, 0);
                prop_assert_eq!(d.home.sets_won, score.home_score);
            } else {
                prop_assert_eq!(d.home.goals_for, score.home_score);
                prop_assert_eq!(d.home.sets_won + d.home.sets_lost, 0);
            }
        }

        #[test]
        fn points_never_exceed_a_win(rule in rule_strategy(), score in score_strategy()) {
            let d = StandingsCalculator::default().calculate_for_rule(rule, &score).unwrap();
            let cap = match rule {
                ScoringRule::General | ScoringRule::Volleyball => 3,
                ScoringRule::Basketball | ScoringRule::IceHockey => 2,
            };
            prop_assert!(d.home.points <= cap);
            prop_assert!(d.away.points <= cap);
        }

        #[test]
        fn swapping_sides_swaps_the_delta(rule in rule_strategy(), score in score_strategy()) {
            prop_assume!(score.home_score != score.away_score);
            let calc = StandingsCalculator::default();
            let d = calc.calculate_for_rule(rule, &score).unwrap();
            let swapped = MatchScore {
                home_score: score.away_score,
                away_score: score.home_score,
                ..score
            };
            let s = calc.calculate_for_rule(rule, &swapped).unwrap();
            prop_assert_eq!(d.home, s.away);
            prop_assert_eq!(d.away, s.home);
        }
    }
}

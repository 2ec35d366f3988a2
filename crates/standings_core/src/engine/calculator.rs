//! Standings calculator
//!
//! Turns the final score of one match into the standing-statistics delta for
//! the home and away club. Pure: no I/O, no shared state, safe to call from
//! any number of threads.

use super::config::{StandingsConfig, TiePolicy};
use crate::error::{Result, StandingsError};
use crate::models::{
    resolve_rule, MatchScore, Outcome, ScoringRule, Sport, StandingStats, StandingsDelta,
};

#[derive(Debug, Clone, Default)]
pub struct StandingsCalculator {
    config: StandingsConfig,
}

impl StandingsCalculator {
    pub fn new(config: StandingsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StandingsConfig {
        &self.config
    }

    /// Scoring rule for a free-text sport name, honouring the unknown-sport policy.
    pub fn rule_for(&self, sport_name: &str) -> Result<ScoringRule> {
        resolve_rule(sport_name, self.config.unknown_sport)
    }

    /// Delta for one finished match of the named sport.
    pub fn calculate(&self, sport_name: &str, score: &MatchScore) -> Result<StandingsDelta> {
        let rule = self.rule_for(sport_name)?;
        self.calculate_for_rule(rule, score)
    }

    pub fn calculate_for_sport(&self, sport: Sport, score: &MatchScore) -> Result<StandingsDelta> {
        self.calculate_for_rule(sport.scoring_rule(), score)
    }

    pub fn calculate_for_rule(
        &self,
        rule: ScoringRule,
        score: &MatchScore,
    ) -> Result<StandingsDelta> {
        let mut delta = seed(rule, score);

        let home_won = match score.outcome() {
            Outcome::HomeWin => true,
            Outcome::AwayWin => false,
            Outcome::Draw if rule.allows_draws() => {
                self.apply_draw(&mut delta);
                return Ok(delta);
            }
            Outcome::Draw => match self.config.tie_policy {
                TiePolicy::AwayWin => {
                    log::warn!(
                        "Level score {}-{} under {} rules, counting as away win",
                        score.home_score,
                        score.away_score,
                        rule
                    );
                    false
                }
                TiePolicy::Reject => {
                    return Err(StandingsError::DrawNotAllowed { rule, score: score.home_score });
                }
            },
        };

        let (winner, loser) = if home_won {
            (&mut delta.home, &mut delta.away)
        } else {
            (&mut delta.away, &mut delta.home)
        };
        winner.wins += 1;

        let points = &self.config.points;
        match rule {
            ScoringRule::General => {
                winner.points += points.general.win;
                loser.losses += 1;
                loser.points += points.general.loss;
            }
            ScoringRule::Basketball => {
                winner.points += points.basketball.win;
                loser.losses += 1;
                loser.points += points.basketball.loss;
            }
            ScoringRule::IceHockey => {
                winner.points += points.ice_hockey.win;
                if score.went_to_extra_time() {
                    winner.overtime_wins += 1;
                    loser.overtime_losses += 1;
                    loser.points += points.ice_hockey.overtime_loss;
                    if score.has_penalties {
                        winner.penalty_wins += 1;
                        loser.penalty_losses += 1;
                    }
                } else {
                    loser.losses += 1;
                    loser.points += points.ice_hockey.regulation_loss;
                }
            }
            ScoringRule::Volleyball => {
                loser.losses += 1;
                if score.margin() >= 2 {
                    winner.points += points.volleyball.straight_win;
                } else {
                    winner.points += points.volleyball.tiebreak_win;
                    loser.points += points.volleyball.tiebreak_loss;
                }
            }
        }

        Ok(delta)
    }

    fn apply_draw(&self, delta: &mut StandingsDelta) {
        let draw = self.config.points.general.draw;
        for side in [&mut delta.home, &mut delta.away] {
            side.draws += 1;
            side.points += draw;
        }
    }
}

/// Both sides start with one match played and the score copied across;
/// volleyball scores go to the set counters instead of goals.
fn seed(rule: ScoringRule, score: &MatchScore) -> StandingsDelta {
    if rule.counts_sets() {
        let mut home = StandingStats::played_once(0, 0);
        home.sets_won = score.home_score;
        home.sets_lost = score.away_score;

        let mut away = StandingStats::played_once(0, 0);
        away.sets_won = score.away_score;
        away.sets_lost = score.home_score;

        StandingsDelta { home, away }
    } else {
        StandingsDelta {
            home: StandingStats::played_once(score.home_score, score.away_score),
            away: StandingStats::played_once(score.away_score, score.home_score),
        }
    }
}

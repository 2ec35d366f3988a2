//! Standings table
//!
//! Sums per-match deltas into one row per club and ranks the rows. Only
//! finished fixtures count; a fixture whose result is corrected can be
//! retracted and re-applied. The table remembers which fixtures it has
//! counted, so only those can be retracted.

use super::StandingsCalculator;
use crate::error::Result;
use crate::models::{Fixture, ScoringRule, StandingStats, StandingsDelta};
use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableRow {
    /// 1-based rank.
    pub position: usize,
    pub club: String,
    #[serde(flatten)]
    pub stats: StandingStats,
}

#[derive(Debug, Clone)]
pub struct StandingsTable {
    sport: String,
    rule: ScoringRule,
    calculator: StandingsCalculator,
    rows: HashMap<String, StandingStats>,
    // fixture -> times counted
    applied: HashMap<Fixture, usize>,
}

impl StandingsTable {
    pub fn new(sport_name: &str, calculator: StandingsCalculator) -> Result<Self> {
        let rule = calculator.rule_for(sport_name)?;
        Ok(Self {
            sport: sport_name.to_string(),
            rule,
            calculator,
            rows: HashMap::new(),
            applied: HashMap::new(),
        })
    }

    /// Build a table from a batch of fixtures.
    ///
    /// Deltas are computed in parallel and folded in input order, so the
    /// result is identical to applying the fixtures one by one.
    pub fn from_fixtures(
        sport_name: &str,
        calculator: StandingsCalculator,
        fixtures: &[Fixture],
    ) -> Result<Self> {
        let mut table = Self::new(sport_name, calculator)?;

        let deltas: Vec<Option<StandingsDelta>> = fixtures
            .par_iter()
            .map(|fixture| table.delta_for(fixture))
            .collect::<Result<_>>()?;

        for (fixture, delta) in fixtures.iter().zip(deltas) {
            table.register(&fixture.home_club);
            table.register(&fixture.away_club);
            if let Some(delta) = delta {
                table.add_delta(fixture, &delta);
            }
        }

        log::debug!(
            "Built {} table: {} clubs from {} fixtures",
            table.rule,
            table.rows.len(),
            fixtures.len()
        );
        Ok(table)
    }

    pub fn sport(&self) -> &str {
        &self.sport
    }

    pub fn rule(&self) -> ScoringRule {
        self.rule
    }

    /// Add a club with an empty row if it is not in the table yet.
    pub fn register(&mut self, club: &str) {
        self.rows.entry(club.to_string()).or_default();
    }

    /// Count a fixture. Returns `false` (and changes nothing but the club
    /// list) when the fixture is not finished.
    pub fn apply(&mut self, fixture: &Fixture) -> Result<bool> {
        self.register(&fixture.home_club);
        self.register(&fixture.away_club);

        match self.delta_for(fixture)? {
            Some(delta) => {
                self.add_delta(fixture, &delta);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Withdraw a fixture applied earlier, e.g. before re-applying a
    /// corrected score. The fixture must be passed exactly as it was
    /// applied. Returns `false`, leaving the table untouched, when the
    /// table is not currently counting that fixture.
    pub fn retract(&mut self, fixture: &Fixture) -> Result<bool> {
        if !self.applied.contains_key(fixture) {
            log::debug!(
                "Ignoring retraction of uncounted fixture {} {}-{} {}",
                fixture.home_club,
                fixture.score.home_score,
                fixture.score.away_score,
                fixture.away_club
            );
            return Ok(false);
        }
        let Some(delta) = self.delta_for(fixture)? else {
            return Ok(false);
        };

        if let Some(count) = self.applied.get_mut(fixture) {
            *count -= 1;
            if *count == 0 {
                self.applied.remove(fixture);
            }
        }
        if let Some(row) = self.rows.get_mut(&fixture.home_club) {
            row.retract(&delta.home);
        }
        if let Some(row) = self.rows.get_mut(&fixture.away_club) {
            row.retract(&delta.away);
        }
        Ok(true)
    }

    pub fn get(&self, club: &str) -> Option<&StandingStats> {
        self.rows.get(club)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ranked rows: points, then set or goal difference, then sets or goals
    /// scored, then wins. Clubs level on all of those are ordered by name.
    pub fn rows(&self) -> Vec<TableRow> {
        let mut ranked: Vec<(&String, &StandingStats)> = self.rows.iter().collect();
        ranked.sort_by(|(a_club, a), (b_club, b)| {
            self.compare(a, b).then_with(|| a_club.cmp(b_club))
        });

        ranked
            .into_iter()
            .enumerate()
            .map(|(idx, (club, stats))| TableRow {
                position: idx + 1,
                club: club.clone(),
                stats: *stats,
            })
            .collect()
    }

    // Better row sorts first.
    fn compare(&self, a: &StandingStats, b: &StandingStats) -> Ordering {
        let (a_diff, a_for, b_diff, b_for) = if self.rule.counts_sets() {
            (a.set_difference(), a.sets_won, b.set_difference(), b.sets_won)
        } else {
            (a.goal_difference(), a.goals_for, b.goal_difference(), b.goals_for)
        };

        b.points
            .cmp(&a.points)
            .then_with(|| b_diff.cmp(&a_diff))
            .then_with(|| b_for.cmp(&a_for))
            .then_with(|| b.wins.cmp(&a.wins))
    }

    fn delta_for(&self, fixture: &Fixture) -> Result<Option<StandingsDelta>> {
        if !fixture.status.counts_for_standings() {
            return Ok(None);
        }
        self.calculator.calculate_for_rule(self.rule, &fixture.score).map(Some)
    }

    fn add_delta(&mut self, fixture: &Fixture, delta: &StandingsDelta) {
        log::debug!(
            "Applying {} {}-{} {}",
            fixture.home_club,
            fixture.score.home_score,
            fixture.score.away_score,
            fixture.away_club
        );
        *self.rows.entry(fixture.home_club.clone()).or_default() += &delta.home;
        *self.rows.entry(fixture.away_club.clone()).or_default() += &delta.away;
        *self.applied.entry(fixture.clone()).or_default() += 1;
    }
}

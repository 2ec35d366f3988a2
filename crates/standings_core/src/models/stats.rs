use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Standing counters for one club.
///
/// The calculator produces one of these per club per match (a delta with
/// `played == 1`); a standings row is the sum of those deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct StandingStats {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    /// Regulation losses. Ice hockey overtime losses are counted separately.
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub overtime_wins: u32,
    pub overtime_losses: u32,
    pub penalty_wins: u32,
    pub penalty_losses: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub points: u32,
}

impl StandingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a single-match delta.
    pub fn played_once(goals_for: u32, goals_against: u32) -> Self {
        Self { played: 1, goals_for, goals_against, ..Default::default() }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn set_difference(&self) -> i64 {
        self.sets_won as i64 - self.sets_lost as i64
    }

    /// Withdraw a previously applied delta (score correction, result annulled).
    pub fn retract(&mut self, delta: &StandingStats) {
        self.played = self.played.saturating_sub(delta.played);
        self.wins = self.wins.saturating_sub(delta.wins);
        self.draws = self.draws.saturating_sub(delta.draws);
        self.losses = self.losses.saturating_sub(delta.losses);
        self.goals_for = self.goals_for.saturating_sub(delta.goals_for);
        self.goals_against = self.goals_against.saturating_sub(delta.goals_against);
        self.overtime_wins = self.overtime_wins.saturating_sub(delta.overtime_wins);
        self.overtime_losses = self.overtime_losses.saturating_sub(delta.overtime_losses);
        self.penalty_wins = self.penalty_wins.saturating_sub(delta.penalty_wins);
        self.penalty_losses = self.penalty_losses.saturating_sub(delta.penalty_losses);
        self.sets_won = self.sets_won.saturating_sub(delta.sets_won);
        self.sets_lost = self.sets_lost.saturating_sub(delta.sets_lost);
        self.points = self.points.saturating_sub(delta.points);
    }
}

// Saturating: a row pinned at u32::MAX is still a valid (if absurd) row,
// and the table never panics on oversized scores.
impl AddAssign<&StandingStats> for StandingStats {
    fn add_assign(&mut self, delta: &StandingStats) {
        self.played = self.played.saturating_add(delta.played);
        self.wins = self.wins.saturating_add(delta.wins);
        self.draws = self.draws.saturating_add(delta.draws);
        self.losses = self.losses.saturating_add(delta.losses);
        self.goals_for = self.goals_for.saturating_add(delta.goals_for);
        self.goals_against = self.goals_against.saturating_add(delta.goals_against);
        self.overtime_wins = self.overtime_wins.saturating_add(delta.overtime_wins);
        self.overtime_losses = self.overtime_losses.saturating_add(delta.overtime_losses);
        self.penalty_wins = self.penalty_wins.saturating_add(delta.penalty_wins);
        self.penalty_losses = self.penalty_losses.saturating_add(delta.penalty_losses);
        self.sets_won = self.sets_won.saturating_add(delta.sets_won);
        self.sets_lost = self.sets_lost.saturating_add(delta.sets_lost);
        self.points = self.points.saturating_add(delta.points);
    }
}

impl AddAssign for StandingStats {
    fn add_assign(&mut self, delta: StandingStats) {
        *self += &delta;
    }
}

impl Add for StandingStats {
    type Output = StandingStats;

    fn add(mut self, rhs: StandingStats) -> StandingStats {
        self += &rhs;
        self
    }
}

/// Contribution of one match to both clubs' standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct StandingsDelta {
    pub home: StandingStats,
    pub away: StandingStats,
}

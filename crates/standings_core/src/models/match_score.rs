use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Final score of a finished match, as handed to the calculator.
///
/// For volleyball the two scores are sets won, not points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub struct MatchScore {
    pub home_score: u32,
    pub away_score: u32,
    /// Decided in overtime (ice hockey consolation point).
    #[serde(default)]
    pub has_overtime: bool,
    /// Decided by a penalty shootout.
    #[serde(default)]
    pub has_penalties: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchScore {
    pub fn new(home_score: u32, away_score: u32) -> Self {
        Self { home_score, away_score, ..Default::default() }
    }

    pub fn with_overtime(mut self) -> Self {
        self.has_overtime = true;
        self
    }

    pub fn with_penalties(mut self) -> Self {
        self.has_penalties = true;
        self
    }

    /// True when the result was not settled in regulation time.
    pub fn went_to_extra_time(&self) -> bool {
        self.has_overtime || self.has_penalties
    }

    pub fn outcome(&self) -> Outcome {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Absolute difference between the two scores.
    pub fn margin(&self) -> u32 {
        self.home_score.abs_diff(self.away_score)
    }
}

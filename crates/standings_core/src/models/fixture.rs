use super::MatchScore;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Live,
    #[default]
    Finished,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    /// Only finished matches count towards the standings.
    pub fn counts_for_standings(&self) -> bool {
        matches!(self, MatchStatus::Finished)
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "live" | "in_progress" => Ok(MatchStatus::Live),
            "finished" | "completed" => Ok(MatchStatus::Finished),
            "postponed" => Ok(MatchStatus::Postponed),
            "cancelled" | "canceled" => Ok(MatchStatus::Cancelled),
            other => Err(format!("Unknown match status: {}", other)),
        }
    }
}

/// A match between two clubs as the standings table sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Fixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    pub home_club: String,
    pub away_club: String,
    #[serde(flatten)]
    pub score: MatchScore,
    #[serde(default)]
    pub status: MatchStatus,
}

impl Fixture {
    pub fn finished(
        home_club: impl Into<String>,
        away_club: impl Into<String>,
        score: MatchScore,
    ) -> Self {
        Self {
            id: None,
            season: None,
            home_club: home_club.into(),
            away_club: away_club.into(),
            score,
            status: MatchStatus::Finished,
        }
    }

    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }
}

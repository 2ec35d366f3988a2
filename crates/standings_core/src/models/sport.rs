//! Sport catalogue
//!
//! Sports are a closed set. Every sport maps to exactly one [`ScoringRule`],
//! which is what the calculator dispatches on. Free-text names coming from
//! the admin side (e.g. "Soccer", "Men's Basketball") are resolved through
//! an alias table first and a keyword scan second.

use crate::engine::config::UnknownSportPolicy;
use crate::error::{Result, StandingsError};
use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Sport {
    Football,
    Handball,
    Futsal,
    Basketball,
    IceHockey,
    Volleyball,
}

/// Point-allocation scheme applied to a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum ScoringRule {
    /// Win 3, draw 1, loss 0. Also the fallback for unlisted sports.
    General,
    /// No draws; the loser still collects a point.
    Basketball,
    /// Regulation win 2; overtime/shootout loser gets a consolation point.
    IceHockey,
    /// Scores are sets; points depend on the set margin.
    Volleyball,
}

static ALIASES: Lazy<HashMap<&'static str, Sport>> = Lazy::new(|| {
    HashMap::from([
        ("football", Sport::Football),
        ("soccer", Sport::Football),
        ("handball", Sport::Handball),
        ("futsal", Sport::Futsal),
        ("basketball", Sport::Basketball),
        ("ice hockey", Sport::IceHockey),
        ("ice-hockey", Sport::IceHockey),
        ("icehockey", Sport::IceHockey),
        ("ice_hockey", Sport::IceHockey),
        ("hockey", Sport::IceHockey),
        ("volleyball", Sport::Volleyball),
    ])
});

// First hit wins, so compound names resolve to the more specific sport.
// Bare "hockey" is only an exact alias: field and roller hockey are not ice hockey.
const KEYWORDS: [(&str, Sport); 9] = [
    ("volleyball", Sport::Volleyball),
    ("basketball", Sport::Basketball),
    ("handball", Sport::Handball),
    ("futsal", Sport::Futsal),
    ("ice hockey", Sport::IceHockey),
    ("ice-hockey", Sport::IceHockey),
    ("icehockey", Sport::IceHockey),
    ("soccer", Sport::Football),
    ("football", Sport::Football),
];

impl Sport {
    /// Resolve a free-text sport name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Sport> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        if let Some(sport) = ALIASES.get(normalized.as_str()) {
            return Some(*sport);
        }

        KEYWORDS
            .iter()
            .find(|(keyword, _)| normalized.contains(keyword))
            .map(|(_, sport)| *sport)
    }

    pub fn scoring_rule(&self) -> ScoringRule {
        match self {
            Sport::Football | Sport::Handball | Sport::Futsal => ScoringRule::General,
            Sport::Basketball => ScoringRule::Basketball,
            Sport::IceHockey => ScoringRule::IceHockey,
            Sport::Volleyball => ScoringRule::Volleyball,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Handball => "handball",
            Sport::Futsal => "futsal",
            Sport::Basketball => "basketball",
            Sport::IceHockey => "ice hockey",
            Sport::Volleyball => "volleyball",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sport {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self> {
        Sport::from_name(s).ok_or_else(|| StandingsError::UnknownSport(s.to_string()))
    }
}

impl ScoringRule {
    /// Whether a level score is a legitimate result under this rule.
    pub fn allows_draws(&self) -> bool {
        matches!(self, ScoringRule::General)
    }

    /// Whether the score fields count sets rather than goals/points.
    pub fn counts_sets(&self) -> bool {
        matches!(self, ScoringRule::Volleyball)
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ScoringRule::General => "general",
            ScoringRule::Basketball => "basketball",
            ScoringRule::IceHockey => "ice hockey",
            ScoringRule::Volleyball => "volleyball",
        };
        f.write_str(name)
    }
}

/// Pick the scoring rule for a free-text sport name.
///
/// Unlisted sports either fall back to [`ScoringRule::General`] or are
/// rejected, depending on `policy`.
pub fn resolve_rule(name: &str, policy: UnknownSportPolicy) -> Result<ScoringRule> {
    match Sport::from_name(name) {
        Some(sport) => Ok(sport.scoring_rule()),
        None => match policy {
            UnknownSportPolicy::FallbackToGeneral => {
                log::warn!("Unrecognized sport '{}', using general scoring rule", name);
                Ok(ScoringRule::General)
            }
            UnknownSportPolicy::Reject => Err(StandingsError::UnknownSport(name.to_string())),
        },
    }
}

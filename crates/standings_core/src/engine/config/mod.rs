//! # Standings Configuration
//!
//! Points tables and the policies for inputs the rules do not cover
//! (level scores in sports without draws, unlisted sports).
//!
//! ## Usage
//! ```rust
//! use standings_core::engine::config::{StandingsConfig, TiePolicy};
//!
//! let config = StandingsConfig::default();
//! assert_eq!(config.tie_policy, TiePolicy::AwayWin);
//!
//! let strict = StandingsConfig::strict();
//! assert_eq!(strict.tie_policy, TiePolicy::Reject);
//! ```

mod points_config;

pub use points_config::{
    BasketballPoints, GeneralPoints, HockeyPoints, PointsConfig, VolleyballPoints,
};

use crate::error::{Result, StandingsError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

pub const STANDINGS_CONFIG_PATH_ENV: &str = "STANDINGS_CONFIG_PATH";

/// What to do with a level score in a sport that has no draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Count the match as an away win.
    #[default]
    AwayWin,
    /// Refuse the match with `StandingsError::DrawNotAllowed`.
    Reject,
}

/// What to do with a sport name outside the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSportPolicy {
    #[default]
    FallbackToGeneral,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct StandingsConfig {
    #[serde(default)]
    pub tie_policy: TiePolicy,
    #[serde(default)]
    pub unknown_sport: UnknownSportPolicy,
    #[serde(default)]
    pub points: PointsConfig,
}

impl StandingsConfig {
    /// Behaviour of the admin back-office: ties fall through to an away win,
    /// unlisted sports use the general rule.
    pub fn legacy() -> Self {
        Self::default()
    }

    /// Refuse anything the rules do not define.
    pub fn strict() -> Self {
        Self {
            tie_policy: TiePolicy::Reject,
            unknown_sport: UnknownSportPolicy::Reject,
            points: PointsConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: StandingsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.points.validate().map_err(StandingsError::InvalidConfig)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::debug!("Loaded standings config from {}", path.display());
        Ok(config)
    }

    /// Load from the file named by `STANDINGS_CONFIG_PATH`; defaults when unset or blank.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(STANDINGS_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_path(path).map_err(|e| match e {
            StandingsError::Io(io) => StandingsError::InvalidConfig(format!(
                "Failed to read config from {STANDINGS_CONFIG_PATH_ENV}='{path}': {io}"
            )),
            other => other,
        })
    }
}

/// Serializes tests that read or write `STANDINGS_CONFIG_PATH`.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

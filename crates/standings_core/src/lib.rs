//! # standings_core - Multi-sport Standings Engine
//!
//! Turns finished match results into league standings for the championship
//! platform's sports.
//!
//! ## Features
//! - Closed sport catalogue with one scoring rule per sport
//! - Per-match standing deltas (pure, thread-safe)
//! - Ranked standings tables with score corrections
//! - JSON API for easy integration with the admin back-end
//!
//! ```rust
//! use standings_core::{MatchScore, StandingsCalculator};
//!
//! let calculator = StandingsCalculator::default();
//! let delta = calculator
//!     .calculate("Ice Hockey", &MatchScore::new(3, 2).with_overtime())
//!     .unwrap();
//!
//! assert_eq!(delta.home.points, 2);
//! assert_eq!(delta.home.overtime_wins, 1);
//! assert_eq!(delta.away.points, 1);
//! ```

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{build_table_json, calculate_match_json, request_schema_json};
pub use error::{Result, StandingsError};

pub use engine::{
    PointsConfig, StandingsCalculator, StandingsConfig, StandingsTable, TableRow, TiePolicy,
    UnknownSportPolicy,
};
pub use models::{
    Fixture, MatchScore, MatchStatus, Outcome, ScoringRule, Sport, StandingStats, StandingsDelta,
};

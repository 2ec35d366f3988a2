pub mod fixture;
pub mod match_score;
pub mod sport;
pub mod stats;

pub use fixture::{Fixture, MatchStatus};
pub use match_score::{MatchScore, Outcome};
pub use sport::{resolve_rule, ScoringRule, Sport};
pub use stats::{StandingStats, StandingsDelta};

use crate::models::ScoringRule;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("Unknown sport: {0}")]
    UnknownSport(String),

    #[error("Draw not allowed under {rule} rules (both sides scored {score})")]
    DrawNotAllowed { rule: ScoringRule, score: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StandingsError {
    /// Errors caused by the match or sport supplied by the caller, as opposed
    /// to configuration or I/O problems.
    pub fn is_input_error(&self) -> bool {
        matches!(self, StandingsError::UnknownSport(_) | StandingsError::DrawNotAllowed { .. })
    }
}

pub type Result<T> = std::result::Result<T, StandingsError>;

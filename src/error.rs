//! Error types for the rating engine
//!
//! The arithmetic core is total and never fails. These errors cover the
//! edges around it: configuration, input parsing, odds formatting and game settlement.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Invalid outcome: {value} (expected win, draw or loss)")]
    InvalidOutcome { value: String },

    #[error("Undefined odds: {outcome} probability is not strictly positive")]
    UndefinedOdds { outcome: String },

    #[error("Game is not fully scored: {game_id}")]
    IncompleteGame { game_id: String },

    #[error("A team cannot play itself: {team_id}")]
    SameTeam { team_id: String },
}

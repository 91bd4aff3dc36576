//! Elo Engine - rating and match odds for head-to-head team games
//!
//! This crate provides a stateless Elo rating engine with goal-differential
//! scaling, a three-way outcome probability model, and the pure halves of
//! game settlement and matchup analysis built on top of it.

pub mod config;
pub mod error;
pub mod game;
pub mod matchup;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use game::{recent_form, settle_game, Game, GameSettlement, TieScore};
pub use matchup::{analyze_matchup, MatchupAnalysis};
pub use rating::{bookmaker_odds, EloEngine, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

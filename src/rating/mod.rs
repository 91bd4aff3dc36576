//! Elo rating system
//!
//! This module provides the rating engine, the calculator interface the
//! game-recording and matchup layers consume, and odds formatting.

pub mod calculator;
pub mod elo;
pub mod odds;

// Re-export commonly used types
pub use calculator::RatingCalculator;
pub use elo::EloEngine;
pub use odds::{bookmaker_odds, BookmakerOdds};

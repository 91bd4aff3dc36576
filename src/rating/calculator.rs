//! Rating calculator trait
//!
//! This module defines the interface the game-recording and matchup layers
//! consume, so they can be driven by any rating model.

use crate::types::{GoalDifferential, Outcome, ProbabilityTriple, Rating};

/// Trait for calculating rating exchanges and outcome probabilities
pub trait RatingCalculator: Send + Sync {
    /// Probability-like expectation in (0, 1) that `rating_a` beats `rating_b`
    fn expected_score(&self, rating_a: Rating, rating_b: Rating) -> f64;

    /// Calculate the integer points `rating_a` gains (or loses, if negative)
    ///
    /// # Arguments
    /// * `rating_a` - Rating of the team being updated
    /// * `rating_b` - Rating of its opponent
    /// * `outcome` - Result from `rating_a`'s perspective
    /// * `goal_differential` - Absolute aggregate score margin
    fn points_exchange(
        &self,
        rating_a: Rating,
        rating_b: Rating,
        outcome: Outcome,
        goal_differential: GoalDifferential,
    ) -> i32;

    /// Three-way win/draw/loss split, `home` being `rating_a`
    fn match_odds(&self, rating_a: Rating, rating_b: Rating) -> ProbabilityTriple;

    /// Points at stake on an outright win, ignoring goal differential
    fn expected_gain_on_win(&self, rating_a: Rating, rating_b: Rating) -> i32;

    /// Points at stake on an outright loss, ignoring goal differential
    fn expected_loss_on_loss(&self, rating_a: Rating, rating_b: Rating) -> i32;

    /// Get the initial rating for new teams
    fn initial_rating(&self) -> Rating;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()>;
}

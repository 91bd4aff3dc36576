//! Elo rating engine
//!
//! Pure functions converting a game result into an integer point exchange
//! between two rated teams, and deriving a three-way outcome probability
//! model for matchup predictions. The engine owns nothing but its
//! configuration and never mutates a rating itself.

use crate::config::rating::EloConfig;
use crate::error::RatingError;
use crate::rating::calculator::RatingCalculator;
use crate::types::{GoalDifferential, Outcome, ProbabilityTriple, Rating};
use crate::utils::rating_difference;
use tracing::{debug, warn};

/// Elo rating engine
#[derive(Debug, Clone, Default)]
pub struct EloEngine {
    config: EloConfig,
}

impl EloEngine {
    /// Create a new engine from a validated configuration
    pub fn new(config: EloConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Get the engine configuration
    pub fn elo_config(&self) -> &EloConfig {
        &self.config
    }

    /// Logistic expectation `1 / (1 + 10^((rating_b - rating_a) / D))`.
    ///
    /// Exactly 0.5 for equal ratings, strictly increasing in `rating_a` and
    /// strictly decreasing in `rating_b`. The gap is taken in `f64`, so any
    /// pair of `i32` ratings is accepted; past a gap of a few thousand points
    /// the result saturates to 0.0 or 1.0 in floating point.
    pub fn expected_score(&self, rating_a: Rating, rating_b: Rating) -> f64 {
        let exponent = (f64::from(rating_b) - f64::from(rating_a)) / self.config.rating_divisor;

        1.0 / (1.0 + 10f64.powf(exponent))
    }

    /// Rounded `K * (actual - expected)`, before goal-differential scaling.
    ///
    /// A loss is evaluated as the negated win of the opponent and a draw from
    /// the lower-rated side, so swapping roles always negates the result.
    fn base_delta(&self, rating_a: Rating, rating_b: Rating, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Loss => -self.base_delta(rating_b, rating_a, Outcome::Win),
            Outcome::Draw if rating_a > rating_b => {
                -self.base_delta(rating_b, rating_a, Outcome::Draw)
            }
            _ => {
                let expected = self.expected_score(rating_a, rating_b);
                let raw = self.config.k_factor * (outcome.actual_score() - expected);

                // Half away from zero
                raw.round()
            }
        }
    }

    /// Points `rating_a` gains (positive) or loses (negative) for `outcome`.
    ///
    /// The base delta is rounded first and only then scaled by the
    /// goal-differential multiplier; the scaled value is rounded again.
    /// Huge margins saturate at `±i32::MAX`, so a win and the matching loss
    /// always negate each other.
    pub fn points_exchange(
        &self,
        rating_a: Rating,
        rating_b: Rating,
        outcome: Outcome,
        goal_differential: GoalDifferential,
    ) -> i32 {
        let base = self.base_delta(rating_a, rating_b, outcome);
        let multiplier = self.config.goal_multiplier(goal_differential);
        let limit = f64::from(i32::MAX);
        let delta = (base * multiplier).round().clamp(-limit, limit) as i32;

        debug!(
            rating_a,
            rating_b,
            %outcome,
            goal_differential,
            base,
            multiplier,
            delta,
            "Computed points exchange"
        );

        delta
    }

    /// Three-way split: home win, draw, away win.
    ///
    /// The draw probability decays exponentially with the rating gap from
    /// `base_draw`. Half of it is carved out of the home expectation and the
    /// away side absorbs the remainder, so the triple always sums to 1.
    /// The home probability is not clamped: when `rating_a` is the underdog
    /// by several hundred points it goes negative.
    pub fn match_odds(&self, rating_a: Rating, rating_b: Rating) -> ProbabilityTriple {
        let expected = self.expected_score(rating_a, rating_b);
        let rating_diff = f64::from(rating_difference(rating_a, rating_b));

        let draw = self.config.base_draw * (-rating_diff / self.config.draw_decay).exp();
        let home = expected - 0.5 * draw;
        let away = 1.0 - home - draw;

        if home < 0.0 {
            warn!(rating_a, rating_b, home, "Home win probability fell below zero");
        }

        ProbabilityTriple { home, draw, away }
    }

    /// Rating delta if `rating_a` won outright, ignoring goal differential
    pub fn expected_gain_on_win(&self, rating_a: Rating, rating_b: Rating) -> i32 {
        self.base_delta(rating_a, rating_b, Outcome::Win) as i32
    }

    /// Rating delta if `rating_a` lost outright, ignoring goal differential
    pub fn expected_loss_on_loss(&self, rating_a: Rating, rating_b: Rating) -> i32 {
        self.base_delta(rating_a, rating_b, Outcome::Loss) as i32
    }
}

impl RatingCalculator for EloEngine {
    fn expected_score(&self, rating_a: Rating, rating_b: Rating) -> f64 {
        EloEngine::expected_score(self, rating_a, rating_b)
    }

    fn points_exchange(
        &self,
        rating_a: Rating,
        rating_b: Rating,
        outcome: Outcome,
        goal_differential: GoalDifferential,
    ) -> i32 {
        EloEngine::points_exchange(self, rating_a, rating_b, outcome, goal_differential)
    }

    fn match_odds(&self, rating_a: Rating, rating_b: Rating) -> ProbabilityTriple {
        EloEngine::match_odds(self, rating_a, rating_b)
    }

    fn expected_gain_on_win(&self, rating_a: Rating, rating_b: Rating) -> i32 {
        EloEngine::expected_gain_on_win(self, rating_a, rating_b)
    }

    fn expected_loss_on_loss(&self, rating_a: Rating, rating_b: Rating) -> i32 {
        EloEngine::expected_loss_on_loss(self, rating_a, rating_b)
    }

    fn initial_rating(&self) -> Rating {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        let new_config: EloConfig =
            serde_json::from_value(config).map_err(|e| RatingError::ConfigurationError {
                message: format!("Invalid Elo configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}

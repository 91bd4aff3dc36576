//! Test fixtures and mock implementations for integration testing

use elo_engine::rating::{EloEngine, RatingCalculator};
use elo_engine::types::{GoalDifferential, Outcome, ProbabilityTriple, Rating};
use std::sync::{Arc, Mutex};

/// Recorded `points_exchange` call
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeCall {
    pub rating_a: Rating,
    pub rating_b: Rating,
    pub outcome: Outcome,
    pub goal_differential: GoalDifferential,
}

/// Calculator that delegates to a real engine and records every exchange
#[derive(Debug, Default)]
pub struct RecordingCalculator {
    engine: EloEngine,
    exchange_calls: Arc<Mutex<Vec<ExchangeCall>>>,
}

impl RecordingCalculator {
    pub fn new(engine: EloEngine) -> Self {
        Self {
            engine,
            exchange_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get all recorded exchange calls (for testing)
    pub fn get_exchange_calls(&self) -> Vec<ExchangeCall> {
        self.exchange_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Clear recorded calls
    pub fn clear_calls(&self) {
        if let Ok(mut calls) = self.exchange_calls.lock() {
            calls.clear();
        }
    }
}

impl RatingCalculator for RecordingCalculator {
    fn expected_score(&self, rating_a: Rating, rating_b: Rating) -> f64 {
        self.engine.expected_score(rating_a, rating_b)
    }

    fn points_exchange(
        &self,
        rating_a: Rating,
        rating_b: Rating,
        outcome: Outcome,
        goal_differential: GoalDifferential,
    ) -> i32 {
        if let Ok(mut calls) = self.exchange_calls.lock() {
            calls.push(ExchangeCall {
                rating_a,
                rating_b,
                outcome,
                goal_differential,
            });
        }

        self.engine
            .points_exchange(rating_a, rating_b, outcome, goal_differential)
    }

    fn match_odds(&self, rating_a: Rating, rating_b: Rating) -> ProbabilityTriple {
        self.engine.match_odds(rating_a, rating_b)
    }

    fn expected_gain_on_win(&self, rating_a: Rating, rating_b: Rating) -> i32 {
        self.engine.expected_gain_on_win(rating_a, rating_b)
    }

    fn expected_loss_on_loss(&self, rating_a: Rating, rating_b: Rating) -> i32 {
        self.engine.expected_loss_on_loss(rating_a, rating_b)
    }

    fn initial_rating(&self) -> Rating {
        RatingCalculator::initial_rating(&self.engine)
    }

    fn config(&self) -> serde_json::Value {
        RatingCalculator::config(&self.engine)
    }

    fn update_config(&mut self, config: serde_json::Value) -> elo_engine::Result<()> {
        self.engine.update_config(config)
    }
}

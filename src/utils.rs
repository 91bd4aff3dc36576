//! Utility functions for the rating engine

use crate::types::{GameId, Rating};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique game ID
pub fn generate_game_id() -> GameId {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Round `value` to `decimals` places, half away from zero
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Convert a probability to a percentage rounded to one decimal
pub fn to_percentage(probability: f64) -> f64 {
    round_to(probability * 100.0, 1)
}

/// Calculate the absolute difference between two ratings
pub fn rating_difference(rating1: Rating, rating2: Rating) -> u32 {
    rating1.abs_diff(rating2)
}

//! Common types used throughout the rating engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Integer strength score for a team
pub type Rating = i32;

/// Absolute margin of a game's aggregate score
pub type GoalDifferential = u32;

/// Unique identifier for teams
pub type TeamId = String;

/// Unique identifier for games
pub type GameId = Uuid;

/// Result of a game from the perspective of the team being rated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// The opponent's view of the same result
    pub fn complement(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Draw => Outcome::Draw,
            Outcome::Loss => Outcome::Win,
        }
    }

    /// Actual score fed into the Elo update
    pub fn actual_score(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Draw => 0.5,
            Outcome::Loss => 0.0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

impl std::str::FromStr for Outcome {
    type Err = crate::error::RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win" | "w" => Ok(Outcome::Win),
            "draw" | "d" => Ok(Outcome::Draw),
            "loss" | "l" => Ok(Outcome::Loss),
            _ => Err(crate::error::RatingError::InvalidOutcome {
                value: s.to_string(),
            }),
        }
    }
}

/// Three-way probability split over the outcomes of a game.
///
/// `home` refers to the first rating passed to the engine, `away` to the second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTriple {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl ProbabilityTriple {
    /// Total probability mass, 1.0 up to floating-point slack
    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }

    /// Labelled entries in display order
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [("home", self.home), ("draw", self.draw), ("away", self.away)]
    }
}

/// Rating change information for a team after a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub team_id: TeamId,
    pub outcome: Outcome,
    pub old_rating: Rating,
    pub delta: i32,
    pub new_rating: Rating,
}

/// Immutable record of a team's rating after a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingHistoryEntry {
    pub team_id: TeamId,
    pub game_id: GameId,
    pub rating: Rating,
    pub recorded_at: DateTime<Utc>,
}

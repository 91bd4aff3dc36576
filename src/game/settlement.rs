//! Game settlement
//!
//! Turns a fully scored game into the rating changes of both teams and the
//! history rows the caller persists alongside them.

use crate::error::RatingError;
use crate::game::score::TieScore;
use crate::rating::calculator::RatingCalculator;
use crate::types::{GameId, Rating, RatingChange, RatingHistoryEntry, TeamId};
use crate::utils::generate_game_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A game between two teams, possibly not yet fully scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    /// Hosting team
    pub team1_id: TeamId,
    /// Receiving team
    pub team2_id: TeamId,
    pub score: TieScore,
}

impl Game {
    /// Create a game with a fresh id
    pub fn new(team1_id: impl Into<TeamId>, team2_id: impl Into<TeamId>, score: TieScore) -> Self {
        Self {
            id: generate_game_id(),
            team1_id: team1_id.into(),
            team2_id: team2_id.into(),
            score,
        }
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}

/// Rating changes and history rows produced by one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettlement {
    pub game_id: GameId,
    pub team1: RatingChange,
    pub team2: RatingChange,
    pub history: Vec<RatingHistoryEntry>,
}

impl GameSettlement {
    /// Sum of both deltas; zero for every settled game
    pub fn net_change(&self) -> i32 {
        self.team1.delta.saturating_add(self.team2.delta)
    }
}

/// Settle a fully scored game.
///
/// Each side's outcome is derived from the aggregate score, the engine is
/// called once per side with roles swapped, and both new ratings are returned
/// together with one history row per team.
pub fn settle_game(
    calculator: &dyn RatingCalculator,
    game: &Game,
    team1_rating: Rating,
    team2_rating: Rating,
    recorded_at: DateTime<Utc>,
) -> crate::error::Result<GameSettlement> {
    if game.team1_id == game.team2_id {
        return Err(RatingError::SameTeam {
            team_id: game.team1_id.clone(),
        }
        .into());
    }

    let (team1_outcome, goal_differential) = match (
        game.score.outcome_for_team1(),
        game.score.goal_differential(),
    ) {
        (Some(outcome), Some(goal_differential)) => (outcome, goal_differential),
        _ => {
            return Err(RatingError::IncompleteGame {
                game_id: game.id.to_string(),
            }
            .into())
        }
    };
    let team2_outcome = team1_outcome.complement();

    let team1_delta =
        calculator.points_exchange(team1_rating, team2_rating, team1_outcome, goal_differential);
    let team2_delta =
        calculator.points_exchange(team2_rating, team1_rating, team2_outcome, goal_differential);

    let team1 = RatingChange {
        team_id: game.team1_id.clone(),
        outcome: team1_outcome,
        old_rating: team1_rating,
        delta: team1_delta,
        new_rating: team1_rating.saturating_add(team1_delta),
    };
    let team2 = RatingChange {
        team_id: game.team2_id.clone(),
        outcome: team2_outcome,
        old_rating: team2_rating,
        delta: team2_delta,
        new_rating: team2_rating.saturating_add(team2_delta),
    };

    let history = [&team1, &team2]
        .iter()
        .map(|change| RatingHistoryEntry {
            team_id: change.team_id.clone(),
            game_id: game.id,
            rating: change.new_rating,
            recorded_at,
        })
        .collect();

    info!(
        "Settled game {} ({}): {} {} -> {} ({:+}), {} {} -> {} ({:+})",
        game.id,
        game.score,
        team1.team_id,
        team1.old_rating,
        team1.new_rating,
        team1.delta,
        team2.team_id,
        team2.old_rating,
        team2.new_rating,
        team2.delta
    );

    Ok(GameSettlement {
        game_id: game.id,
        team1,
        team2,
        history,
    })
}

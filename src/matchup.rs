//! Head-to-head matchup analysis
//!
//! Combines the outcome probabilities and the points at stake for two teams
//! into the figures a matchup page displays.

use crate::rating::calculator::RatingCalculator;
use crate::rating::odds::{bookmaker_odds, BookmakerOdds};
use crate::types::{ProbabilityTriple, Rating};
use crate::utils::to_percentage;
use serde::{Deserialize, Serialize};

/// Display figures for a prospective game between two teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupAnalysis {
    /// Percentages rounded to one decimal
    pub team1_win_probability: f64,
    pub draw_probability: f64,
    pub team2_win_probability: f64,
    pub team1_gain_on_win: i32,
    pub team1_loss_on_loss: i32,
    pub team2_gain_on_win: i32,
    pub team2_loss_on_loss: i32,
    /// Unrounded probabilities, team 1 as home
    pub odds: ProbabilityTriple,
}

impl MatchupAnalysis {
    /// Fractional odds labels for the unrounded probabilities
    pub fn bookmaker_odds(&self) -> crate::error::Result<BookmakerOdds> {
        bookmaker_odds(&self.odds)
    }
}

/// Analyze a prospective game, team 1 taking the home side of the odds
pub fn analyze_matchup(
    calculator: &dyn RatingCalculator,
    team1_rating: Rating,
    team2_rating: Rating,
) -> MatchupAnalysis {
    let odds = calculator.match_odds(team1_rating, team2_rating);

    MatchupAnalysis {
        team1_win_probability: to_percentage(odds.home),
        draw_probability: to_percentage(odds.draw),
        team2_win_probability: to_percentage(odds.away),
        team1_gain_on_win: calculator.expected_gain_on_win(team1_rating, team2_rating),
        team1_loss_on_loss: calculator.expected_loss_on_loss(team1_rating, team2_rating),
        team2_gain_on_win: calculator.expected_gain_on_win(team2_rating, team1_rating),
        team2_loss_on_loss: calculator.expected_loss_on_loss(team2_rating, team1_rating),
        odds,
    }
}

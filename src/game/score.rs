//! Two-leg aggregate scores
//!
//! A game is played over two legs; the aggregate over both legs decides the
//! outcome and the goal differential that scales the rating exchange.

use crate::types::{GoalDifferential, Outcome};
use serde::{Deserialize, Serialize};

/// Score of a single leg. Either side may still be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegScore {
    pub team1: Option<u32>,
    pub team2: Option<u32>,
}

impl LegScore {
    pub fn new(team1: u32, team2: u32) -> Self {
        Self {
            team1: Some(team1),
            team2: Some(team2),
        }
    }
}

/// Aggregate score of a two-leg game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieScore {
    pub leg1: LegScore,
    pub leg2: LegScore,
}

impl TieScore {
    /// Fully scored tie
    pub fn new(leg1: (u32, u32), leg2: (u32, u32)) -> Self {
        Self {
            leg1: LegScore::new(leg1.0, leg1.1),
            leg2: LegScore::new(leg2.0, leg2.1),
        }
    }

    /// Team 1 aggregate, `None` until both legs are scored.
    ///
    /// Summed in `u64` so two `u32` legs never overflow.
    pub fn team1_total(&self) -> Option<u64> {
        Some(u64::from(self.leg1.team1?) + u64::from(self.leg2.team1?))
    }

    /// Team 2 aggregate, `None` until both legs are scored
    pub fn team2_total(&self) -> Option<u64> {
        Some(u64::from(self.leg1.team2?) + u64::from(self.leg2.team2?))
    }

    pub fn is_complete(&self) -> bool {
        self.team1_total().is_some() && self.team2_total().is_some()
    }

    /// Higher aggregate wins, equal aggregates draw
    pub fn outcome_for_team1(&self) -> Option<Outcome> {
        let team1 = self.team1_total()?;
        let team2 = self.team2_total()?;

        Some(match team1.cmp(&team2) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        })
    }

    pub fn outcome_for_team2(&self) -> Option<Outcome> {
        self.outcome_for_team1().map(Outcome::complement)
    }

    /// Absolute aggregate margin, saturating at `GoalDifferential::MAX`
    pub fn goal_differential(&self) -> Option<GoalDifferential> {
        let margin = self.team1_total()?.abs_diff(self.team2_total()?);
        Some(GoalDifferential::try_from(margin).unwrap_or(GoalDifferential::MAX))
    }
}

impl std::fmt::Display for TieScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.team1_total(), self.team2_total()) {
            (Some(team1), Some(team2)) => write!(f, "{} - {}", team1, team2),
            _ => write!(f, "-"),
        }
    }
}

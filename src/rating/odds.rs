//! Fractional odds formatting for display

use crate::error::RatingError;
use crate::types::ProbabilityTriple;
use crate::utils::round_to;
use serde::{Deserialize, Serialize};

/// Display labels of the form `"1 : 2.5"` for each outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmakerOdds {
    pub home: String,
    pub draw: String,
    pub away: String,
}

/// Format a single probability as `"1 : round(1/p, 2)"`
pub fn odds_label(outcome: &str, probability: f64) -> crate::error::Result<String> {
    if !probability.is_finite() || probability <= 0.0 {
        return Err(RatingError::UndefinedOdds {
            outcome: outcome.to_string(),
        }
        .into());
    }

    Ok(format!("1 : {}", round_to(1.0 / probability, 2)))
}

/// Format every entry of a probability triple.
///
/// Fails with [`RatingError::UndefinedOdds`] on the first entry that is not
/// strictly positive, rather than producing an infinite label.
pub fn bookmaker_odds(odds: &ProbabilityTriple) -> crate::error::Result<BookmakerOdds> {
    Ok(BookmakerOdds {
        home: odds_label("home", odds.home)?,
        draw: odds_label("draw", odds.draw)?,
        away: odds_label("away", odds.away)?,
    })
}

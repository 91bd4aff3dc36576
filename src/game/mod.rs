//! Game recording
//!
//! This module derives outcomes from two-leg scores, settles finished games
//! into rating changes and history rows, and summarizes a team's recent form.

pub mod form;
pub mod score;
pub mod settlement;

// Re-export commonly used types
pub use form::recent_form;
pub use score::{LegScore, TieScore};
pub use settlement::{settle_game, Game, GameSettlement};

//! Rating engine configuration
//!
//! Every constant the Elo formula and the odds model depend on lives here so
//! it can be tuned without touching the algorithm shape.

use crate::error::RatingError;
use crate::types::{GoalDifferential, Rating};
use serde::{Deserialize, Serialize};

/// Step function scaling a rating change by the margin of victory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDifferentialScale {
    /// First differential that earns `moderate_multiplier`
    pub moderate_threshold: GoalDifferential,
    pub moderate_multiplier: f64,
    /// First differential that earns `large_multiplier`
    pub large_threshold: GoalDifferential,
    pub large_multiplier: f64,
    /// First differential past which the multiplier grows linearly
    pub blowout_threshold: GoalDifferential,
    /// Increment added per goal from `blowout_threshold - 1` on
    pub blowout_step: f64,
}

impl Default for GoalDifferentialScale {
    fn default() -> Self {
        Self {
            moderate_threshold: 4,
            moderate_multiplier: 1.5,
            large_threshold: 6,
            large_multiplier: 1.75,
            blowout_threshold: 8,
            blowout_step: 0.0625,
        }
    }
}

impl GoalDifferentialScale {
    /// Multiplier for a given goal differential. Non-decreasing in `goal_differential`.
    pub fn multiplier(&self, goal_differential: GoalDifferential) -> f64 {
        if goal_differential < self.moderate_threshold {
            1.0
        } else if goal_differential < self.large_threshold {
            self.moderate_multiplier
        } else if goal_differential < self.blowout_threshold {
            self.large_multiplier
        } else {
            let extra_goals = goal_differential - self.blowout_threshold.saturating_sub(1);
            self.large_multiplier + f64::from(extra_goals) * self.blowout_step
        }
    }

    /// Validate thresholds and multipliers
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.moderate_threshold == 0 {
            return Err(config_error("Moderate threshold must be greater than 0"));
        }

        if self.moderate_threshold >= self.large_threshold
            || self.large_threshold >= self.blowout_threshold
        {
            return Err(config_error(
                "Goal differential thresholds must be strictly ascending",
            ));
        }

        if !self.moderate_multiplier.is_finite() || self.moderate_multiplier < 1.0 {
            return Err(config_error("Moderate multiplier must be at least 1.0"));
        }

        if !self.large_multiplier.is_finite() || self.large_multiplier < self.moderate_multiplier
        {
            return Err(config_error(
                "Large multiplier must not be below the moderate multiplier",
            ));
        }

        if !self.blowout_step.is_finite() || self.blowout_step < 0.0 {
            return Err(config_error("Blowout step must be non-negative"));
        }

        Ok(())
    }
}

/// Elo rating system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EloConfig {
    /// Magnitude of a full upset swing
    pub k_factor: f64,
    /// Rating gap at which the favourite is ten times as likely to win
    pub rating_divisor: f64,
    /// Draw probability between equally rated teams
    pub base_draw: f64,
    /// Rating gap over which the draw probability decays by a factor of e
    pub draw_decay: f64,
    /// Rating assigned to newly created teams
    pub initial_rating: Rating,
    /// Margin-of-victory scaling, `None` to disable it
    #[serde(default)]
    pub goal_differential: Option<GoalDifferentialScale>,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: 40.0,
            rating_divisor: 400.0,
            base_draw: 0.22,
            draw_decay: 350.0,
            initial_rating: 1000,
            goal_differential: Some(GoalDifferentialScale::default()),
        }
    }
}

impl EloConfig {
    /// Earlier revision of the formula: double K-factor, no margin scaling
    pub fn classic() -> Self {
        Self {
            k_factor: 80.0,
            goal_differential: None,
            ..Self::default()
        }
    }

    /// Multiplier applied to a rounded base delta
    pub fn goal_multiplier(&self, goal_differential: GoalDifferential) -> f64 {
        self.goal_differential
            .as_ref()
            .map(|scale| scale.multiplier(goal_differential))
            .unwrap_or(1.0)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(config_error("K-factor must be positive"));
        }

        if !self.rating_divisor.is_finite() || self.rating_divisor <= 0.0 {
            return Err(config_error("Rating divisor must be positive"));
        }

        if !(0.0..1.0).contains(&self.base_draw) {
            return Err(config_error("Base draw probability must be in [0, 1)"));
        }

        if !self.draw_decay.is_finite() || self.draw_decay <= 0.0 {
            return Err(config_error("Draw decay must be positive"));
        }

        if let Some(scale) = &self.goal_differential {
            scale.validate()?;
        }

        Ok(())
    }
}

fn config_error(message: &str) -> anyhow::Error {
    RatingError::ConfigurationError {
        message: message.to_string(),
    }
    .into()
}

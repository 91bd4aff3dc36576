//! Main application configuration
//!
//! This module defines the configuration used by the `elo-engine` binary,
//! including environment variable loading, TOML files and validation.

use crate::config::rating::{EloConfig, GoalDifferentialScale};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub elo: EloConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Number of games shown in a team's recent form
    pub form_length: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "elo-engine".to_string(),
            log_level: "info".to_string(),
            form_length: 5,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(form_length) = env::var("FORM_LENGTH") {
            config.service.form_length = form_length
                .parse()
                .map_err(|_| anyhow!("Invalid FORM_LENGTH value: {}", form_length))?;
        }

        // Elo settings
        if let Ok(k_factor) = env::var("ELO_K_FACTOR") {
            config.elo.k_factor = k_factor
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_K_FACTOR value: {}", k_factor))?;
        }
        if let Ok(divisor) = env::var("ELO_RATING_DIVISOR") {
            config.elo.rating_divisor = divisor
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_RATING_DIVISOR value: {}", divisor))?;
        }
        if let Ok(base_draw) = env::var("ELO_BASE_DRAW") {
            config.elo.base_draw = base_draw
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_BASE_DRAW value: {}", base_draw))?;
        }
        if let Ok(decay) = env::var("ELO_DRAW_DECAY") {
            config.elo.draw_decay = decay
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_DRAW_DECAY value: {}", decay))?;
        }
        if let Ok(initial) = env::var("ELO_INITIAL_RATING") {
            config.elo.initial_rating = initial
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_INITIAL_RATING value: {}", initial))?;
        }
        if let Ok(scaling) = env::var("ELO_GOAL_SCALING") {
            let enabled: bool = scaling
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_GOAL_SCALING value: {}", scaling))?;
            config.elo.goal_differential = enabled.then(GoalDifferentialScale::default);
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Serialize the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    if config.service.form_length == 0 {
        return Err(anyhow!("Form length must be greater than 0"));
    }

    config.elo.validate()?;

    Ok(())
}

//! Main application configuration
//!
//! This module defines the top-level configuration for the parlor-rating
//! tool, including TOML and environment variable loading and validation.

use crate::config::rating::{ModelSettings, PredictorSettings};
use crate::predictor::Predictor;
use crate::rating::RatingModel;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub model: ModelSettings,
    pub predictor: PredictorSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "parlor-rating".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Parses an optional variable, naming it in the error
fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("Invalid {} value: {}", name, value)),
        None => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|name| env::var(name).ok())?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing sections use defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Overlays settings found through `lookup` onto this configuration
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        // Service settings
        if let Some(name) = lookup("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Model settings
        if let Some(model) = lookup("RATING_MODEL") {
            self.model.kind = model
                .parse()
                .map_err(|e| anyhow!("Invalid RATING_MODEL value: {}", e))?;
        }

        let params = &mut self.model.params;
        if let Some(mu) = parse_var(&lookup, "RATING_MU")? {
            params.mu = mu;
        }
        if let Some(sigma) = parse_var(&lookup, "RATING_SIGMA")? {
            params.sigma = sigma;
        }
        if let Some(beta) = parse_var(&lookup, "RATING_BETA")? {
            params.beta = beta;
            self.predictor.beta = beta;
        }
        if let Some(kappa) = parse_var(&lookup, "RATING_KAPPA")? {
            params.kappa = kappa;
            self.predictor.kappa = kappa;
        }
        if let Some(tau) = parse_var(&lookup, "RATING_TAU")? {
            params.tau = tau;
        }
        if let Some(epsilon) = parse_var(&lookup, "RATING_EPSILON")? {
            params.epsilon = epsilon;
        }
        if let Some(limit_sigma) = parse_var(&lookup, "RATING_LIMIT_SIGMA")? {
            params.limit_sigma = limit_sigma;
        }
        if let Some(balance) = parse_var(&lookup, "RATING_BALANCE")? {
            params.balance = balance;
            self.predictor.balance = balance;
        }

        Ok(())
    }

    /// Build the configured rating model
    pub fn rating_model(&self) -> RatingModel {
        self.model.build()
    }

    /// Build the configured predictor
    pub fn predictor(&self) -> Predictor {
        self.predictor.build()
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate model parameters
    let params = &config.model.params;
    if params.sigma <= 0.0 {
        return Err(anyhow!("Sigma must be positive"));
    }
    if params.beta <= 0.0 {
        return Err(anyhow!("Beta must be positive"));
    }
    if params.kappa <= 0.0 {
        return Err(anyhow!("Kappa must be positive"));
    }
    if params.tau < 0.0 {
        return Err(anyhow!("Tau cannot be negative"));
    }
    if params.epsilon < 0.0 {
        return Err(anyhow!("Epsilon cannot be negative"));
    }

    // Validate predictor settings
    if config.predictor.beta <= 0.0 {
        return Err(anyhow!("Predictor beta must be positive"));
    }
    if config.predictor.kappa <= 0.0 {
        return Err(anyhow!("Predictor kappa must be positive"));
    }

    Ok(())
}

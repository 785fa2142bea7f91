//! Model parameters shared by all rating models

use crate::types::{Rating, DEFAULT_MU, DEFAULT_SIGMA};
use serde::{Deserialize, Serialize};

/// Parameters fixed when a model is constructed
///
/// Plackett-Luce ignores `tau`; only the Thurstone-Mosteller models read
/// `epsilon`. Nothing is bounds-checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Mean of a new player's rating
    pub mu: f64,
    /// Standard deviation of a new player's rating
    pub sigma: f64,
    /// Performance variability within a single match
    pub beta: f64,
    /// Floor for the variance-shrink factor
    pub kappa: f64,
    /// Skill drift added to every sigma before an update
    pub tau: f64,
    /// Draw margin for Thurstone-Mosteller tie handling
    pub epsilon: f64,
    /// Never let an update increase a player's sigma
    pub limit_sigma: bool,
    /// Weight weaker teammates by their ordinal gap to the team's best player
    pub balance: bool,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            mu: DEFAULT_MU,
            sigma: DEFAULT_SIGMA,
            beta: 25.0 / 6.0,
            kappa: 0.0001,
            tau: 25.0 / 300.0,
            epsilon: 0.1,
            limit_sigma: false,
            balance: false,
        }
    }
}

impl ModelParams {
    /// A new player's rating under these parameters
    pub fn initial_rating(&self) -> Rating {
        Rating::new(self.mu, self.sigma)
    }
}

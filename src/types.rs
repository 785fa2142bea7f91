//! Common types used throughout the rating models

use serde::{Deserialize, Serialize};
use skillratings::weng_lin::WengLinRating;

/// Default mean skill for a new player
pub const DEFAULT_MU: f64 = 25.0;

/// Default skill uncertainty for a new player
pub const DEFAULT_SIGMA: f64 = 25.0 / 3.0;

/// A player's skill as a Gaussian with mean `mu` and standard deviation `sigma`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mu: f64,
    pub sigma: f64,
}

impl Rating {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Conservative skill estimate: the true skill is 99.7% likely to be higher.
    pub fn ordinal(&self) -> f64 {
        self.mu - 3.0 * self.sigma
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            mu: DEFAULT_MU,
            sigma: DEFAULT_SIGMA,
        }
    }
}

impl From<WengLinRating> for Rating {
    fn from(rating: WengLinRating) -> Self {
        Self {
            mu: rating.rating,
            sigma: rating.uncertainty,
        }
    }
}

impl From<Rating> for WengLinRating {
    fn from(rating: Rating) -> Self {
        Self {
            rating: rating.mu,
            uncertainty: rating.sigma,
        }
    }
}

/// Players competing together; order matters because weights index-align with it
pub type Team = Vec<Rating>;

/// A finished match as read by the command-line tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchInput {
    pub teams: Vec<Team>,
    /// Lower is better; ties and gaps allowed
    #[serde(default)]
    pub ranks: Option<Vec<i64>>,
    /// Higher is better
    #[serde(default)]
    pub scores: Option<Vec<i64>>,
    /// Per-player contribution weights, shaped like `teams`
    #[serde(default)]
    pub weights: Option<Vec<Vec<f64>>>,
}

/// Teams to run outcome predictions on
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionInput {
    pub teams: Vec<Team>,
}

/// Everything the predictor can say about a set of teams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub win_probabilities: Vec<f64>,
    pub draw_probability: f64,
    pub predicted_ranks: Vec<usize>,
    pub rank_probabilities: Vec<f64>,
}

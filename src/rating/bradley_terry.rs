//! Bradley-Terry rating models
//!
//! Each comparison uses a logistic win probability between two teams. The full
//! model compares every pair of teams; the partial model walks the ranking
//! ladder and only compares neighbouring placements.

use crate::error::Result;
use crate::rating::calculator::RatingCalculator;
use crate::rating::params::ModelParams;
use crate::rating::pipeline::{self, pairwise_pressures, Drift, Pairing, Pressure};
use crate::rating::team::TeamRating;
use crate::types::Team;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Pressure on `team_i` from one comparison against `team_q`
fn compare(beta: f64, team_i: &TeamRating<'_>, team_q: &TeamRating<'_>) -> Pressure {
    let c = (team_i.sigma_squared + team_q.sigma_squared + 2.0 * beta * beta).sqrt();
    let p = 1.0 / (1.0 + ((team_q.mu - team_i.mu) / c).exp());
    let sigma_squared_to_c = team_i.sigma_squared / c;

    let score = match team_q.rank.cmp(&team_i.rank) {
        Ordering::Greater => 1.0,
        Ordering::Equal => 0.5,
        Ordering::Less => 0.0,
    };

    let gamma = (team_i.sigma_squared / c).sqrt();

    Pressure {
        omega: sigma_squared_to_c * (score - p),
        delta: ((gamma * sigma_squared_to_c) / c) * p * (1.0 - p),
    }
}

/// Bradley-Terry with all-pairs comparisons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BradleyTerryFull {
    params: ModelParams,
}

impl BradleyTerryFull {
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }
}

impl RatingCalculator for BradleyTerryFull {
    fn rate(
        &self,
        teams: &[Team],
        ranks: Option<&[i64]>,
        scores: Option<&[i64]>,
        weights: Option<&[Vec<f64>]>,
    ) -> Result<Vec<Team>> {
        let beta = self.params.beta;
        pipeline::rate(
            "bradley-terry-full",
            &self.params,
            Drift::Additive,
            teams,
            ranks,
            scores,
            weights,
            |team_ratings| {
                pairwise_pressures(team_ratings, Pairing::Full, |i, q| compare(beta, i, q))
            },
        )
    }

    fn params(&self) -> &ModelParams {
        &self.params
    }
}

/// Bradley-Terry comparing only ladder neighbours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BradleyTerryPartial {
    params: ModelParams,
}

impl BradleyTerryPartial {
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }
}

impl RatingCalculator for BradleyTerryPartial {
    fn rate(
        &self,
        teams: &[Team],
        ranks: Option<&[i64]>,
        scores: Option<&[i64]>,
        weights: Option<&[Vec<f64>]>,
    ) -> Result<Vec<Team>> {
        let beta = self.params.beta;
        pipeline::rate(
            "bradley-terry-partial",
            &self.params,
            Drift::Geometric,
            teams,
            ranks,
            scores,
            weights,
            |team_ratings| {
                pairwise_pressures(team_ratings, Pairing::Ladder, |i, q| compare(beta, i, q))
            },
        )
    }

    fn params(&self) -> &ModelParams {
        &self.params
    }
}

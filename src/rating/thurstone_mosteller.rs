//! Thurstone-Mosteller rating models
//!
//! Comparisons use the normal CDF with a draw margin of width epsilon, so the
//! update comes from the truncated-Gaussian helpers `v`, `w`, `vt` and `wt`.

use crate::error::Result;
use crate::gaussian::{v, vt, w, wt};
use crate::rating::calculator::RatingCalculator;
use crate::rating::params::ModelParams;
use crate::rating::pipeline::{self, pairwise_pressures, Drift, Pairing, Pressure};
use crate::rating::team::TeamRating;
use crate::types::Team;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Pressure on `team_i` from `team_q` given the comparison scale, draw margin
/// and variance factor
fn compare(
    team_i: &TeamRating<'_>,
    team_q: &TeamRating<'_>,
    c: f64,
    margin: f64,
    gamma: f64,
) -> Pressure {
    let delta_mu = (team_i.mu - team_q.mu) / c;
    let sigma_squared_to_c = team_i.sigma_squared / c;
    let scale = gamma * sigma_squared_to_c / c;

    match team_q.rank.cmp(&team_i.rank) {
        Ordering::Greater => Pressure {
            omega: sigma_squared_to_c * v(delta_mu, margin),
            delta: scale * w(delta_mu, margin),
        },
        Ordering::Less => Pressure {
            omega: -sigma_squared_to_c * v(-delta_mu, margin),
            delta: scale * w(-delta_mu, margin),
        },
        Ordering::Equal => Pressure {
            omega: sigma_squared_to_c * vt(delta_mu, margin),
            delta: scale * wt(delta_mu, margin),
        },
    }
}

fn spread(beta: f64, team_i: &TeamRating<'_>, team_q: &TeamRating<'_>) -> f64 {
    (team_i.sigma_squared + team_q.sigma_squared + 2.0 * beta * beta).sqrt()
}

/// Thurstone-Mosteller with all-pairs comparisons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThurstoneMostellerFull {
    params: ModelParams,
}

impl ThurstoneMostellerFull {
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }
}

impl RatingCalculator for ThurstoneMostellerFull {
    fn rate(
        &self,
        teams: &[Team],
        ranks: Option<&[i64]>,
        scores: Option<&[i64]>,
        weights: Option<&[Vec<f64>]>,
    ) -> Result<Vec<Team>> {
        let ModelParams { beta, epsilon, .. } = self.params;
        pipeline::rate(
            "thurstone-mosteller-full",
            &self.params,
            Drift::Geometric,
            teams,
            ranks,
            scores,
            weights,
            |team_ratings| {
                pairwise_pressures(team_ratings, Pairing::Full, |team_i, team_q| {
                    let c = spread(beta, team_i, team_q);
                    let gamma = team_i.sigma_squared.sqrt() / c;
                    compare(team_i, team_q, c, epsilon, gamma)
                })
            },
        )
    }

    fn params(&self) -> &ModelParams {
        &self.params
    }
}

/// Thurstone-Mosteller comparing only ladder neighbours.
///
/// The comparison scale is doubled and the draw margin is expressed in units
/// of that scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThurstoneMostellerPartial {
    params: ModelParams,
}

impl ThurstoneMostellerPartial {
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }
}

impl RatingCalculator for ThurstoneMostellerPartial {
    fn rate(
        &self,
        teams: &[Team],
        ranks: Option<&[i64]>,
        scores: Option<&[i64]>,
        weights: Option<&[Vec<f64>]>,
    ) -> Result<Vec<Team>> {
        let ModelParams { beta, epsilon, .. } = self.params;
        pipeline::rate(
            "thurstone-mosteller-partial",
            &self.params,
            Drift::Geometric,
            teams,
            ranks,
            scores,
            weights,
            |team_ratings| {
                pairwise_pressures(team_ratings, Pairing::Ladder, |team_i, team_q| {
                    let c = 2.0 * spread(beta, team_i, team_q);
                    let gamma = (team_i.sigma_squared / c).sqrt();
                    compare(team_i, team_q, c, epsilon / c, gamma)
                })
            },
        )
    }

    fn params(&self) -> &ModelParams {
        &self.params
    }
}

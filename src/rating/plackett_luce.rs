//! Plackett-Luce rating model
//!
//! Treats a ranking as a sequence of eliminations: at each placement the
//! remaining teams compete with strength `exp(mu / c)` for the spot. Every
//! team is compared against every team it did not finish behind.

use crate::error::Result;
use crate::rating::calculator::RatingCalculator;
use crate::rating::params::ModelParams;
use crate::rating::pipeline::{self, Drift, Pressure};
use crate::rating::team::TeamRating;
use crate::types::Team;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of teams sharing each team's rank class
pub fn rank_counts(team_ratings: &[TeamRating<'_>]) -> Vec<usize> {
    let mut counts: HashMap<usize, usize> = HashMap::with_capacity(team_ratings.len());
    for team in team_ratings {
        *counts.entry(team.rank).or_default() += 1;
    }

    team_ratings.iter().map(|team| counts[&team.rank]).collect()
}

/// Shared comparison scale `sqrt(Σ (sigma²_k + beta²))`
pub fn scale(team_ratings: &[TeamRating<'_>], beta: f64) -> f64 {
    team_ratings
        .iter()
        .map(|team| team.sigma_squared + beta * beta)
        .sum::<f64>()
        .sqrt()
}

/// For each team j, the summed strength of all teams ranked at or below it
pub fn sum_q(team_ratings: &[TeamRating<'_>], c: f64) -> Vec<f64> {
    shifted_sum_q(team_ratings, c, 0.0)
}

/// Largest team mean, subtracted before exponentiating so strengths stay finite
fn strength_shift(team_ratings: &[TeamRating<'_>]) -> f64 {
    team_ratings
        .iter()
        .map(|team| team.mu)
        .fold(f64::NEG_INFINITY, f64::max)
}

fn shifted_sum_q(team_ratings: &[TeamRating<'_>], c: f64, shift: f64) -> Vec<f64> {
    let mut sums = vec![0.0; team_ratings.len()];
    for team in team_ratings {
        let strength = ((team.mu - shift) / c).exp();
        for (j, other) in team_ratings.iter().enumerate() {
            if team.rank >= other.rank {
                sums[j] += strength;
            }
        }
    }
    sums
}

fn pressures(params: &ModelParams, team_ratings: &[TeamRating<'_>]) -> Vec<Pressure> {
    let a = rank_counts(team_ratings);
    let c = scale(team_ratings, params.beta);
    // Shares are unchanged by a common shift of every mean.
    let shift = strength_shift(team_ratings);
    let sums = shifted_sum_q(team_ratings, c, shift);
    let gamma = params.sigma / c;

    team_ratings
        .iter()
        .enumerate()
        .map(|(i, team_i)| {
            let strength = ((team_i.mu - shift) / c).exp();
            let mut omega = 0.0;
            let mut delta = 0.0;

            for (q, team_q) in team_ratings.iter().enumerate() {
                // Contests decided after team i was eliminated don't involve it.
                if team_q.rank > team_i.rank {
                    continue;
                }

                let share = strength / sums[q];
                let count = a[q] as f64;
                delta += share * (1.0 - share) / count;
                if q == i {
                    omega += (1.0 - share) / count;
                } else {
                    omega -= share / count;
                }
            }

            Pressure {
                omega: omega * team_i.sigma_squared / c,
                delta: delta * team_i.sigma_squared / (c * c) * gamma,
            }
        })
        .collect()
}

/// Plackett-Luce with all-teams elimination comparisons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlackettLuce {
    params: ModelParams,
}

impl PlackettLuce {
    pub fn new(params: ModelParams) -> Self {
        Self { params }
    }
}

impl RatingCalculator for PlackettLuce {
    fn rate(
        &self,
        teams: &[Team],
        ranks: Option<&[i64]>,
        scores: Option<&[i64]>,
        weights: Option<&[Vec<f64>]>,
    ) -> Result<Vec<Team>> {
        pipeline::rate(
            "plackett-luce",
            &self.params,
            Drift::None,
            teams,
            ranks,
            scores,
            weights,
            |team_ratings| pressures(&self.params, team_ratings),
        )
    }

    fn params(&self) -> &ModelParams {
        &self.params
    }
}

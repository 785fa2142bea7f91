//! Match outcome predictions from current ratings
//!
//! The predictor never updates ratings. It aggregates teams the same way the
//! rating models do and compares them pairwise with the normal CDF.

use crate::error::Result;
use crate::gaussian::{phi_major, phi_major_inv};
use crate::rating::team::{calculate_team_ratings, TeamRating};
use crate::rating::validation::check_teams;
use crate::types::{PredictionReport, Team};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

/// Outcome predictor configured with the same beta/kappa/balance a model uses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Predictor {
    pub beta: f64,
    pub kappa: f64,
    pub balance: bool,
}

impl Default for Predictor {
    fn default() -> Self {
        Self {
            beta: 25.0 / 6.0,
            kappa: 0.0001,
            balance: false,
        }
    }
}

impl Predictor {
    pub fn new(beta: f64, kappa: f64, balance: bool) -> Self {
        Self {
            beta,
            kappa,
            balance,
        }
    }

    fn team_ratings<'a>(&self, teams: &'a [Team]) -> Vec<TeamRating<'a>> {
        calculate_team_ratings(teams, None, self.balance, self.kappa)
    }

    fn spread(&self, a: &TeamRating<'_>, b: &TeamRating<'_>) -> f64 {
        (2.0 * self.beta * self.beta + a.sigma_squared + b.sigma_squared).sqrt()
    }

    /// Averaged pairwise win probability per team, renormalized to sum to 1
    fn pairwise_win_probabilities(&self, team_ratings: &[TeamRating<'_>]) -> Vec<f64> {
        let n = team_ratings.len();
        let raw: Vec<f64> = team_ratings
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let sum: f64 = team_ratings
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, b)| phi_major((a.mu - b.mu) / self.spread(a, b)))
                    .sum();
                sum / (n - 1) as f64
            })
            .collect();

        let total: f64 = raw.iter().sum();
        raw.into_iter().map(|p| p / total).collect()
    }

    /// Probability of each team winning, in input order.
    ///
    /// Two teams get the exact head-to-head probability. With more teams each
    /// team's pairwise probabilities are averaged and the results renormalized.
    pub fn chance_of_winning(&self, teams: &[Team]) -> Result<Vec<f64>> {
        check_teams(teams)?;
        let team_ratings = self.team_ratings(teams);

        let probabilities = if let [a, b] = team_ratings.as_slice() {
            let p = phi_major((a.mu - b.mu) / self.spread(a, b));
            vec![p, 1.0 - p]
        } else {
            self.pairwise_win_probabilities(&team_ratings)
        };

        debug!(teams = teams.len(), ?probabilities, "predicted winners");
        Ok(probabilities)
    }

    /// Probability that the match ends in a draw.
    ///
    /// The draw margin grows with the total player count; the result is the
    /// mean draw probability over every unordered pair of teams.
    pub fn chance_of_draw(&self, teams: &[Team]) -> Result<f64> {
        check_teams(teams)?;

        let player_count = teams.iter().map(Vec::len).sum::<usize>() as f64;
        let draw_probability = 1.0 / player_count;
        let draw_margin =
            player_count.sqrt() * self.beta * phi_major_inv((1.0 + draw_probability) / 2.0);

        let team_ratings = self.team_ratings(teams);
        let mut total = 0.0;
        let mut pairs = 0usize;
        for (i, a) in team_ratings.iter().enumerate() {
            for b in &team_ratings[i + 1..] {
                let c = self.spread(a, b);
                total += phi_major((draw_margin - a.mu + b.mu) / c)
                    - phi_major((b.mu - a.mu - draw_margin) / c);
                pairs += 1;
            }
        }

        let probability = total / pairs as f64;
        debug!(teams = teams.len(), draw_margin, probability, "predicted draw");
        Ok(probability)
    }

    /// Most likely placement of each team and the probabilities behind it.
    ///
    /// Probabilities are compared at six decimal places, so near-equal teams
    /// share a competition rank (1, 1, 3, ...).
    pub fn chance_of_ranks(&self, teams: &[Team]) -> Result<(Vec<usize>, Vec<f64>)> {
        check_teams(teams)?;
        let team_ratings = self.team_ratings(teams);
        let probabilities = self.pairwise_win_probabilities(&team_ratings);

        let mut order: Vec<(usize, i64)> = probabilities
            .iter()
            .enumerate()
            .map(|(i, p)| (i, (p * 1_000_000.0).round() as i64))
            .collect();
        order.sort_by_key(|&(_, rounded)| Reverse(rounded));

        let mut ranks = vec![0; teams.len()];
        let mut current = 1;
        for (position, &(team, rounded)) in order.iter().enumerate() {
            if position > 0 && rounded < order[position - 1].1 {
                current = position + 1;
            }
            ranks[team] = current;
        }

        debug!(teams = teams.len(), ?ranks, "predicted ranks");
        Ok((ranks, probabilities))
    }

    /// Runs every prediction and gathers them into one report
    pub fn report(&self, teams: &[Team]) -> Result<PredictionReport> {
        let win_probabilities = self.chance_of_winning(teams)?;
        let draw_probability = self.chance_of_draw(teams)?;
        let (predicted_ranks, rank_probabilities) = self.chance_of_ranks(teams)?;

        Ok(PredictionReport {
            win_probabilities,
            draw_probability,
            predicted_ranks,
            rank_probabilities,
        })
    }
}

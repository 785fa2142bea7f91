//! The update pipeline shared by every rating model
//!
//! A model only decides how much mean-shift (omega) and variance-shrink
//! (delta) pressure each team receives. Validation, drift, ordering, weight
//! handling, the per-player update and restoring the caller's order all
//! happen here.

use crate::error::{RatingError, Result};
use crate::rating::params::ModelParams;
use crate::rating::team::{calculate_team_ratings, TeamRating};
use crate::rating::validation::check_rate_parameters;
use crate::types::{Rating, Team};
use crate::utils::{ladder_pairs, normalize, unwind};
use tracing::{debug, trace};

/// How skill drift inflates each sigma before an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drift {
    /// `sigma + tau²`, linear in sigma rather than the geometric form.
    /// Bradley-Terry full drifts this way.
    Additive,
    /// `sqrt(sigma² + tau²)`
    Geometric,
    /// Sigma is left as is
    None,
}

impl Drift {
    pub fn apply(self, sigma: f64, tau: f64) -> f64 {
        match self {
            Drift::Additive => sigma + tau * tau,
            Drift::Geometric => (sigma * sigma + tau * tau).sqrt(),
            Drift::None => sigma,
        }
    }
}

/// Which opponents a team is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// Every other team
    Full,
    /// Only the teams placed directly above and below
    Ladder,
}

impl Pairing {
    /// Opponent indices for each of `team_count` teams in rank order
    pub fn opponents(self, team_count: usize) -> Vec<Vec<usize>> {
        match self {
            Pairing::Full => (0..team_count)
                .map(|i| (0..team_count).filter(|&q| q != i).collect())
                .collect(),
            Pairing::Ladder => {
                let indices: Vec<usize> = (0..team_count).collect();
                ladder_pairs(&indices)
            }
        }
    }
}

/// Aggregate update pressure on one team
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pressure {
    pub omega: f64,
    pub delta: f64,
}

impl std::ops::AddAssign for Pressure {
    fn add_assign(&mut self, other: Self) {
        self.omega += other.omega;
        self.delta += other.delta;
    }
}

/// Sums a pairwise comparison over each team's opponents
pub fn pairwise_pressures<F>(
    team_ratings: &[TeamRating<'_>],
    pairing: Pairing,
    compare: F,
) -> Vec<Pressure>
where
    F: Fn(&TeamRating<'_>, &TeamRating<'_>) -> Pressure,
{
    let opponents = pairing.opponents(team_ratings.len());

    team_ratings
        .iter()
        .zip(opponents)
        .map(|(team_i, opponents)| {
            let mut pressure = Pressure::default();
            for q in opponents {
                pressure += compare(team_i, &team_ratings[q]);
            }
            pressure
        })
        .collect()
}

/// Runs a full rate call for one model
#[allow(clippy::too_many_arguments)]
pub fn rate<F>(
    model: &'static str,
    params: &ModelParams,
    drift: Drift,
    teams: &[Team],
    ranks: Option<&[i64]>,
    scores: Option<&[i64]>,
    weights: Option<&[Vec<f64>]>,
    pressures: F,
) -> Result<Vec<Team>>
where
    F: FnOnce(&[TeamRating<'_>]) -> Vec<Pressure>,
{
    check_rate_parameters(teams, ranks, scores, weights)?;

    debug!(
        model,
        teams = teams.len(),
        from_scores = scores.is_some(),
        weighted = weights.is_some(),
        "rating match"
    );

    // Scores rank higher-is-better, so negate them into placements.
    let ranks: Vec<i64> = ranks
        .map(<[i64]>::to_vec)
        .or_else(|| scores.map(|scores| scores.iter().map(|s| s.saturating_neg()).collect()))
        .ok_or(RatingError::NoRanksOrScores)?;

    let drifted: Vec<Team> = teams
        .iter()
        .map(|team| {
            team.iter()
                .map(|player| Rating::new(player.mu, drift.apply(player.sigma, params.tau)))
                .collect()
        })
        .collect();

    let (ordered_teams, tenet) = unwind(&ranks, &drifted);
    let ordered_weights = weights.map(|weights| {
        let normalized: Vec<Vec<f64>> = weights
            .iter()
            .map(|team_weights| normalize(team_weights, 1.0, 2.0))
            .collect();
        unwind(&ranks, &normalized).0
    });

    let mut sorted_ranks = ranks;
    sorted_ranks.sort_unstable();

    let team_ratings = calculate_team_ratings(
        &ordered_teams,
        Some(&sorted_ranks),
        params.balance,
        params.kappa,
    );
    let pressures = pressures(&team_ratings);

    let updated: Vec<Team> = team_ratings
        .iter()
        .zip(&pressures)
        .enumerate()
        .map(|(i, (team_rating, pressure))| {
            trace!(
                model,
                team = tenet[i],
                omega = pressure.omega,
                delta = pressure.delta,
                "team pressure"
            );
            let team_weights = ordered_weights.as_ref().map(|w| w[i].as_slice());
            apply_pressure(team_rating, *pressure, team_weights, params.kappa)
        })
        .collect();

    let (mut restored, _) = unwind(&tenet, &updated);

    if params.limit_sigma {
        for (team, original) in restored.iter_mut().zip(teams) {
            for (player, before) in team.iter_mut().zip(original) {
                player.sigma = player.sigma.min(before.sigma);
            }
        }
    }

    Ok(restored)
}

/// Distributes a team's pressure over its players in the caller's order.
///
/// A player's share is `sigma² / team sigma²`. Weights scale the update up on
/// a positive omega and down otherwise; the shrink factor is floored at kappa.
pub fn apply_pressure(
    team_rating: &TeamRating<'_>,
    pressure: Pressure,
    weights: Option<&[f64]>,
    kappa: f64,
) -> Team {
    team_rating
        .team
        .iter()
        .enumerate()
        .map(|(j, player)| {
            let weight = weight_at(weights, j);
            let share = player.sigma * player.sigma / team_rating.sigma_squared;

            let (mu, shrink) = if pressure.omega > 0.0 {
                (
                    player.mu + share * pressure.omega * weight,
                    1.0 - share * pressure.delta * weight,
                )
            } else {
                (
                    player.mu + share * pressure.omega / weight,
                    1.0 - share * pressure.delta / weight,
                )
            };

            Rating::new(mu, player.sigma * shrink.max(kappa).sqrt())
        })
        .collect()
}

/// Weight of the player at `index`, 1.0 when none was supplied
fn weight_at(weights: Option<&[f64]>, index: usize) -> f64 {
    weights
        .and_then(|weights| weights.get(index))
        .copied()
        .unwrap_or(1.0)
}

//! Team-level aggregation of player ratings

use crate::types::{Rating, Team};

/// A team collapsed into one Gaussian plus its competition rank class
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRating<'a> {
    pub mu: f64,
    pub sigma_squared: f64,
    /// Players in the caller's order
    pub team: &'a [Rating],
    pub rank: usize,
}

/// Assigns competition rank classes to teams already sorted by placement.
///
/// The class only advances when the rank strictly increases over the previous
/// team, and then jumps to that team's index, so tied teams share a class.
/// Without ranks each team's index is its rank.
pub fn calculate_rankings(team_count: usize, ranks: Option<&[i64]>) -> Vec<usize> {
    let team_scores: Vec<i64> = match ranks {
        Some(ranks) => ranks.to_vec(),
        None => (0..team_count as i64).collect(),
    };

    let mut output = Vec::with_capacity(team_count);
    let mut class = 0;
    for (i, score) in team_scores.iter().enumerate() {
        if i > 0 && team_scores[i - 1] < *score {
            class = i;
        }
        output.push(class);
    }
    output
}

/// Aggregates every team into a `TeamRating`.
///
/// With `balance` enabled each player is weighted by
/// `1 + (max_ordinal - ordinal) / (max_ordinal + kappa)` before summing.
pub fn calculate_team_ratings<'a>(
    teams: &'a [Team],
    ranks: Option<&[i64]>,
    balance: bool,
    kappa: f64,
) -> Vec<TeamRating<'a>> {
    let rank = calculate_rankings(teams.len(), ranks);

    teams
        .iter()
        .zip(rank)
        .map(|(team, rank)| {
            let mut sorted_team = team.clone();
            sorted_team.sort_by(|a, b| b.ordinal().total_cmp(&a.ordinal()));

            let max_ordinal = sorted_team.first().map(Rating::ordinal).unwrap_or(0.0);
            let mut mu = 0.0;
            let mut sigma_squared = 0.0;

            for player in &sorted_team {
                let balance_weight = if balance {
                    1.0 + (max_ordinal - player.ordinal()) / (max_ordinal + kappa)
                } else {
                    1.0
                };
                mu += player.mu * balance_weight;
                sigma_squared += (player.sigma * balance_weight) * (player.sigma * balance_weight);
            }

            TeamRating {
                mu,
                sigma_squared,
                team: team.as_slice(),
                rank,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rankings_without_ranks_use_index() {
        assert_eq!(calculate_rankings(4, None), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rankings_share_class_on_ties() {
        assert_eq!(calculate_rankings(4, Some(&[1, 1, 1, 4])), vec![0, 0, 0, 3]);
        assert_eq!(calculate_rankings(4, Some(&[1, 2, 2, 3])), vec![0, 1, 1, 3]);
        assert_eq!(calculate_rankings(3, Some(&[-20, -10, -10])), vec![0, 1, 1]);
    }

    #[test]
    fn test_rankings_ignore_gaps() {
        assert_eq!(calculate_rankings(3, Some(&[5, 50, 500])), vec![0, 1, 2]);
    }

    #[test]
    fn test_team_rating_sums() {
        let teams = vec![
            vec![Rating::new(25.0, 8.0)],
            vec![Rating::new(20.0, 3.0), Rating::new(30.0, 4.0)],
        ];

        let ratings = calculate_team_ratings(&teams, None, false, 0.0001);

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].mu, 25.0);
        assert_eq!(ratings[0].sigma_squared, 64.0);
        assert_eq!(ratings[0].rank, 0);
        assert_eq!(ratings[1].mu, 50.0);
        assert_eq!(ratings[1].sigma_squared, 25.0);
        assert_eq!(ratings[1].rank, 1);
    }

    #[test]
    fn test_team_rating_keeps_caller_order() {
        let teams = vec![
            vec![Rating::new(10.0, 3.0), Rating::new(40.0, 2.0)],
            vec![Rating::new(25.0, 8.0)],
        ];

        let ratings = calculate_team_ratings(&teams, None, true, 0.0001);
        assert_eq!(ratings[0].team, teams[0].as_slice());
    }

    #[test]
    fn test_balance_weights_weaker_players() {
        let strong = Rating::new(30.0, 5.0);
        let weak = Rating::new(20.0, 5.0);
        let teams = vec![vec![weak, strong], vec![Rating::default()]];
        let kappa = 0.0001;

        let ratings = calculate_team_ratings(&teams, None, true, kappa);

        let weight = 1.0 + (15.0 - 5.0) / (15.0 + kappa);
        let expected_mu = 30.0 + 20.0 * weight;
        let expected_sigma_squared = 25.0 + (5.0 * weight) * (5.0 * weight);
        assert!((ratings[0].mu - expected_mu).abs() < 1e-12);
        assert!((ratings[0].sigma_squared - expected_sigma_squared).abs() < 1e-12);

        let unbalanced = calculate_team_ratings(&teams, None, false, kappa);
        assert_eq!(unbalanced[0].mu, 50.0);
        assert!(ratings[0].mu > unbalanced[0].mu);
    }
}

//! Shape checks run before any rating or prediction work

use crate::error::{RatingError, Result};
use crate::types::Team;

/// Checks that there are at least two teams and none is empty
pub fn check_teams(teams: &[Team]) -> Result<()> {
    if teams.len() < 2 {
        return Err(RatingError::LessThanTwoTeams);
    }
    if teams.iter().any(|team| team.is_empty()) {
        return Err(RatingError::EmptyTeam);
    }
    Ok(())
}

/// Validates the arguments of a rate call
pub fn check_rate_parameters(
    teams: &[Team],
    ranks: Option<&[i64]>,
    scores: Option<&[i64]>,
    weights: Option<&[Vec<f64>]>,
) -> Result<()> {
    check_teams(teams)?;

    match (ranks, scores) {
        (Some(_), Some(_)) => return Err(RatingError::RanksAndScores),
        (None, None) => return Err(RatingError::NoRanksOrScores),
        _ => {}
    }

    if ranks.is_some_and(|ranks| ranks.len() != teams.len()) {
        return Err(RatingError::RanksAndTeamsMismatch);
    }
    if scores.is_some_and(|scores| scores.len() != teams.len()) {
        return Err(RatingError::ScoresAndTeamsMismatch);
    }

    if let Some(weights) = weights {
        if weights.len() != teams.len() {
            return Err(RatingError::WeightsAndTeamsMismatch);
        }
        if teams
            .iter()
            .zip(weights)
            .any(|(team, team_weights)| team.len() != team_weights.len())
        {
            return Err(RatingError::WeightsAndTeamsMismatch);
        }
    }

    Ok(())
}

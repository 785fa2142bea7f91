//! Error types for rating and prediction calls
//!
//! Every variant is a shape violation detected before any computation runs,
//! so a failed call never produces a partial result.

/// Result type alias for convenience
pub type Result<T, E = RatingError> = std::result::Result<T, E>;

/// Input validation failures for rating models and the predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("less than two teams")]
    LessThanTwoTeams,

    #[error("empty team")]
    EmptyTeam,

    #[error("ranks or scores must be provided")]
    NoRanksOrScores,

    #[error("ranks and scores cannot be provided together")]
    RanksAndScores,

    #[error("ranks must have same shape as teams")]
    RanksAndTeamsMismatch,

    #[error("scores must have same shape as teams")]
    ScoresAndTeamsMismatch,

    #[error("weights must have same shape as teams")]
    WeightsAndTeamsMismatch,
}

//! Rating calculator trait
//!
//! This module defines the single capability every rating model provides:
//! turning a finished match into updated player ratings.

use crate::error::Result;
use crate::rating::params::ModelParams;
use crate::types::{Rating, Team};

/// Trait for calculating rating changes after games
pub trait RatingCalculator: Send + Sync {
    /// Calculate new ratings for every player in a finished match
    ///
    /// # Arguments
    /// * `teams` - At least two non-empty teams
    /// * `ranks` - Placement per team, lower is better, ties allowed
    /// * `scores` - Points per team, higher is better; exclusive with `ranks`
    /// * `weights` - Optional per-player contribution, shaped like `teams`
    ///
    /// # Returns
    /// Updated teams in the caller's order. The inputs are never modified.
    fn rate(
        &self,
        teams: &[Team],
        ranks: Option<&[i64]>,
        scores: Option<&[i64]>,
        weights: Option<&[Vec<f64>]>,
    ) -> Result<Vec<Team>>;

    /// Parameters the model was constructed with
    fn params(&self) -> &ModelParams;

    /// Get the initial rating for new players
    fn initial_rating(&self) -> Rating {
        self.params().initial_rating()
    }
}

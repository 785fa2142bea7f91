//! Bayesian rating models for team-based matches
//!
//! Every model shares the same pipeline (validation, drift, rank ordering,
//! per-player update) and differs only in how it compares teams.

pub mod bradley_terry;
pub mod calculator;
pub mod model;
pub mod params;
pub mod pipeline;
pub mod plackett_luce;
pub mod team;
pub mod thurstone_mosteller;
pub mod validation;

// Re-export commonly used types
pub use bradley_terry::{BradleyTerryFull, BradleyTerryPartial};
pub use calculator::RatingCalculator;
pub use model::{ModelKind, RatingModel};
pub use params::ModelParams;
pub use plackett_luce::PlackettLuce;
pub use team::{calculate_team_ratings, TeamRating};
pub use thurstone_mosteller::{ThurstoneMostellerFull, ThurstoneMostellerPartial};
pub use validation::{check_rate_parameters, check_teams};

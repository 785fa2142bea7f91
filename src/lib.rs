//! Parlor Rating - Bayesian skill ratings for team-based matches
//!
//! This crate provides five OpenSkill-style rating models (Bradley-Terry full
//! and partial, Plackett-Luce, Thurstone-Mosteller full and partial) and an
//! outcome predictor, all operating on Gaussian player ratings.

pub mod config;
pub mod error;
pub mod gaussian;
pub mod predictor;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use predictor::Predictor;
pub use rating::{
    BradleyTerryFull, BradleyTerryPartial, ModelKind, ModelParams, PlackettLuce,
    RatingCalculator, RatingModel, ThurstoneMostellerFull, ThurstoneMostellerPartial,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

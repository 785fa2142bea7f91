//! Test fixtures and builders for integration testing

#![allow(dead_code)]

use parlor_rating::rating::{ModelKind, ModelParams, RatingModel};
use parlor_rating::types::{Rating, Team};

/// A team of `count` fresh players at the default rating
pub fn fresh_team(count: usize) -> Team {
    vec![Rating::default(); count]
}

/// A single-player team
pub fn solo(mu: f64, sigma: f64) -> Team {
    vec![Rating::new(mu, sigma)]
}

/// Every model built with the same parameters
pub fn all_models(params: ModelParams) -> Vec<RatingModel> {
    ModelKind::ALL
        .into_iter()
        .map(|kind| RatingModel::new(kind, params))
        .collect()
}

/// A four-team free-for-all with mixed team sizes and a shared placement
pub fn mixed_lobby() -> (Vec<Team>, Vec<i64>) {
    let teams = vec![
        vec![Rating::new(28.0, 6.5), Rating::new(22.0, 7.0)],
        solo(31.0, 4.0),
        vec![Rating::new(18.0, 8.0), Rating::new(25.0, 5.0), Rating::new(24.0, 6.0)],
        solo(20.0, 3.0),
    ];
    let ranks = vec![2, 1, 2, 4];
    (teams, ranks)
}

/// Asserts two ratings agree to within `tolerance` on both components
pub fn assert_rating_close(actual: Rating, expected: Rating, tolerance: f64) {
    assert!(
        (actual.mu - expected.mu).abs() < tolerance,
        "mu {} != {}",
        actual.mu,
        expected.mu
    );
    assert!(
        (actual.sigma - expected.sigma).abs() < tolerance,
        "sigma {} != {}",
        actual.sigma,
        expected.sigma
    );
}

//! Integration tests for the parlor-rating library
//!
//! These tests drive every rating model and the predictor through the public
//! API, including:
//! - Winner/loser direction and tie symmetry
//! - Score and rank inputs producing the same update
//! - Validation errors shared by all models
//! - Caller data never being modified
//! - Agreement with the skillratings Weng-Lin implementation

mod fixtures;

use parlor_rating::rating::{ModelKind, ModelParams, RatingCalculator, RatingModel};
use parlor_rating::types::{Rating, Team};
use parlor_rating::{Predictor, RatingError};
use skillratings::weng_lin::{weng_lin, WengLinConfig, WengLinRating};
use skillratings::Outcomes;

use fixtures::{all_models, assert_rating_close, fresh_team, mixed_lobby, solo};

/// Teams, ranks, scores, weights and the error they must produce
type RateCase = (
    Vec<Team>,
    Option<Vec<i64>>,
    Option<Vec<i64>>,
    Option<Vec<Vec<f64>>>,
    RatingError,
);

#[test]
fn test_every_model_rewards_the_winner() {
    let teams = vec![fresh_team(1), fresh_team(1)];

    for model in all_models(ModelParams::default()) {
        let result = model.rate(&teams, Some(&[1, 2]), None, None).unwrap();

        assert!(
            result[0][0].mu > 25.0,
            "{} winner should gain",
            model.kind()
        );
        assert!(
            result[1][0].mu < 25.0,
            "{} loser should drop",
            model.kind()
        );
        assert!(result[0][0].sigma > 0.0);
        assert!(result[1][0].sigma > 0.0);
    }
}

#[test]
fn test_equal_teams_tied_keep_their_mean() {
    let teams = vec![fresh_team(2), fresh_team(2)];

    for model in all_models(ModelParams::default()) {
        let result = model.rate(&teams, Some(&[1, 1]), None, None).unwrap();

        for team in &result {
            for player in team {
                assert!(
                    (player.mu - 25.0).abs() < 1e-9,
                    "{} moved a tied mean to {}",
                    model.kind(),
                    player.mu
                );
            }
        }
        assert_eq!(result[0], result[1]);
    }
}

#[test]
fn test_scores_match_equivalent_ranks() {
    let (teams, _) = mixed_lobby();
    let scores = [30, 45, 30, 10];
    let ranks = [2, 1, 2, 4];

    for model in all_models(ModelParams::default()) {
        let by_scores = model.rate(&teams, None, Some(&scores), None).unwrap();
        let by_ranks = model.rate(&teams, Some(&ranks), None, None).unwrap();

        assert_eq!(by_scores, by_ranks, "{} disagrees", model.kind());
    }
}

#[test]
fn test_output_shape_follows_input() {
    let (teams, ranks) = mixed_lobby();

    for model in all_models(ModelParams::default()) {
        let result = model.rate(&teams, Some(&ranks), None, None).unwrap();

        assert_eq!(result.len(), teams.len());
        for (updated, original) in result.iter().zip(&teams) {
            assert_eq!(updated.len(), original.len());
        }
    }
}

#[test]
fn test_rank_order_is_restored() {
    let (teams, ranks) = mixed_lobby();
    // Same match with the teams listed in a different order.
    let shuffled: Vec<Team> = vec![
        teams[3].clone(),
        teams[0].clone(),
        teams[2].clone(),
        teams[1].clone(),
    ];
    let shuffled_ranks = [ranks[3], ranks[0], ranks[2], ranks[1]];

    for kind in [ModelKind::PlackettLuce, ModelKind::BradleyTerryFull] {
        let model = RatingModel::new(kind, ModelParams::default());
        let original = model.rate(&teams, Some(&ranks), None, None).unwrap();
        let reordered = model.rate(&shuffled, Some(&shuffled_ranks), None, None).unwrap();

        assert_eq!(reordered[0], original[3]);
        assert_eq!(reordered[3], original[1]);
    }
}

#[test]
fn test_inputs_are_not_modified() {
    let (teams, ranks) = mixed_lobby();
    let weights = vec![vec![2.0, 1.0], vec![1.0], vec![0.5, 1.0, 3.0], vec![1.0]];
    let teams_before = teams.clone();
    let ranks_before = ranks.clone();
    let weights_before = weights.clone();

    for model in all_models(ModelParams::default()) {
        model
            .rate(&teams, Some(&ranks), None, Some(&weights))
            .unwrap();
    }

    assert_eq!(teams, teams_before);
    assert_eq!(ranks, ranks_before);
    assert_eq!(weights, weights_before);
}

#[test]
fn test_validation_errors_are_shared() {
    let teams = vec![fresh_team(1), fresh_team(1)];
    let cases: Vec<RateCase> = vec![
        (
            vec![fresh_team(1)],
            Some(vec![1]),
            None,
            None,
            RatingError::LessThanTwoTeams,
        ),
        (
            vec![fresh_team(1), Vec::new()],
            Some(vec![1, 2]),
            None,
            None,
            RatingError::EmptyTeam,
        ),
        (teams.clone(), None, None, None, RatingError::NoRanksOrScores),
        (
            teams.clone(),
            Some(vec![1, 2]),
            Some(vec![1, 2]),
            None,
            RatingError::RanksAndScores,
        ),
        (
            teams.clone(),
            Some(vec![1]),
            None,
            None,
            RatingError::RanksAndTeamsMismatch,
        ),
        (
            teams.clone(),
            None,
            Some(vec![1, 2, 3]),
            None,
            RatingError::ScoresAndTeamsMismatch,
        ),
        (
            teams.clone(),
            Some(vec![1, 2]),
            None,
            Some(vec![vec![1.0], vec![1.0, 2.0]]),
            RatingError::WeightsAndTeamsMismatch,
        ),
    ];

    for model in all_models(ModelParams::default()) {
        for (teams, ranks, scores, weights, expected) in &cases {
            let result = model.rate(
                teams,
                ranks.as_deref(),
                scores.as_deref(),
                weights.as_deref(),
            );
            assert_eq!(result, Err(*expected), "{}", model.kind());
        }
    }
}

#[test]
fn test_every_model_handles_large_means() {
    let teams = vec![solo(5000.0, 1.0), solo(4990.0, 1.0)];

    for model in all_models(ModelParams::default()) {
        let result = model.rate(&teams, Some(&[1, 2]), None, None).unwrap();

        for player in result.iter().flatten() {
            assert!(
                player.mu.is_finite() && player.sigma.is_finite(),
                "{} produced {:?}",
                model.kind(),
                player
            );
        }
        assert!(result[0][0].mu > 5000.0, "{}", model.kind());
        assert!(result[1][0].mu < 4990.0, "{}", model.kind());
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(RatingError::LessThanTwoTeams.to_string(), "less than two teams");
    assert_eq!(
        RatingError::RanksAndScores.to_string(),
        "ranks and scores cannot be provided together"
    );
    assert_eq!(
        RatingError::WeightsAndTeamsMismatch.to_string(),
        "weights must have same shape as teams"
    );
}

#[test]
fn test_limit_sigma_never_widens() {
    let (teams, ranks) = mixed_lobby();
    let params = ModelParams {
        tau: 2.0,
        limit_sigma: true,
        ..ModelParams::default()
    };

    for model in all_models(params) {
        let result = model.rate(&teams, Some(&ranks), None, None).unwrap();

        for (updated, original) in result.iter().zip(&teams) {
            for (after, before) in updated.iter().zip(original) {
                assert!(
                    after.sigma <= before.sigma,
                    "{} widened sigma {} -> {}",
                    model.kind(),
                    before.sigma,
                    after.sigma
                );
            }
        }
    }
}

#[test]
fn test_heavier_weight_moves_further() {
    let teams = vec![fresh_team(2), fresh_team(2)];
    let weights = vec![vec![1.0, 4.0], vec![1.0, 1.0]];

    for model in all_models(ModelParams::default()) {
        let result = model
            .rate(&teams, Some(&[1, 2]), None, Some(&weights))
            .unwrap();

        let light_gain = result[0][0].mu - 25.0;
        let heavy_gain = result[0][1].mu - 25.0;
        assert!(heavy_gain > light_gain, "{}", model.kind());
    }
}

#[test]
fn test_balance_changes_uneven_teams() {
    let teams = vec![
        vec![Rating::new(35.0, 3.0), Rating::new(15.0, 6.0)],
        vec![Rating::new(25.0, 5.0), Rating::new(25.0, 5.0)],
    ];
    let balanced = ModelParams {
        balance: true,
        ..ModelParams::default()
    };

    for kind in ModelKind::ALL {
        let plain = RatingModel::new(kind, ModelParams::default())
            .rate(&teams, Some(&[1, 2]), None, None)
            .unwrap();
        let weighted = RatingModel::new(kind, balanced)
            .rate(&teams, Some(&[1, 2]), None, None)
            .unwrap();

        assert_ne!(plain, weighted, "{}", kind);
    }
}

#[test]
fn test_bradley_terry_matches_weng_lin_mean_update() {
    let params = ModelParams {
        tau: 0.0,
        ..ModelParams::default()
    };
    let model = RatingModel::new(ModelKind::BradleyTerryFull, params);
    let first = Rating::new(30.0, 6.0);
    let second = Rating::new(24.0, 7.5);

    let ours = model
        .rate(&[vec![first], vec![second]], Some(&[1, 2]), None, None)
        .unwrap();

    let config = WengLinConfig {
        beta: params.beta,
        ..WengLinConfig::default()
    };
    let (theirs_first, theirs_second) = weng_lin(
        &WengLinRating::from(first),
        &WengLinRating::from(second),
        &Outcomes::WIN,
        &config,
    );

    assert!((ours[0][0].mu - theirs_first.rating).abs() < 1e-9);
    assert!((ours[1][0].mu - theirs_second.rating).abs() < 1e-9);
}

#[test]
fn test_weng_lin_ratings_feed_models() {
    let stored = vec![
        WengLinRating {
            rating: 27.0,
            uncertainty: 6.0,
        },
        WengLinRating::new(),
    ];
    let teams: Vec<Team> = stored.into_iter().map(|r| vec![Rating::from(r)]).collect();

    let result = RatingModel::default()
        .rate(&teams, Some(&[2, 1]), None, None)
        .unwrap();
    let back = WengLinRating::from(result[1][0]);

    assert!(back.rating > 25.0);
}

#[test]
fn test_predictor_favours_stronger_team() {
    let teams = vec![solo(20.0, 4.0), solo(32.0, 4.0), solo(26.0, 4.0)];
    let predictor = Predictor::default();

    let wins = predictor.chance_of_winning(&teams).unwrap();
    let (ranks, _) = predictor.chance_of_ranks(&teams).unwrap();
    let draw = predictor.chance_of_draw(&teams).unwrap();

    assert!((wins.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    assert!(wins[1] > wins[2] && wins[2] > wins[0]);
    assert_eq!(ranks, vec![3, 1, 2]);
    assert!(draw > 0.0 && draw < 1.0);
}

#[test]
fn test_rating_then_prediction_round() {
    let mut teams = vec![fresh_team(1), fresh_team(1)];
    let model = RatingModel::new(ModelKind::ThurstoneMostellerFull, ModelParams::default());
    let predictor = Predictor::default();

    for _ in 0..5 {
        teams = model.rate(&teams, Some(&[1, 2]), None, None).unwrap();
    }

    let wins = predictor.chance_of_winning(&teams).unwrap();
    assert!(wins[0] > 0.75);
    // Symmetric head-to-head updates conserve the total mean.
    assert!((teams[0][0].mu + teams[1][0].mu - 50.0).abs() < 1e-6);
    assert_rating_close(
        Rating::new(teams[0][0].mu - 25.0, teams[0][0].sigma),
        Rating::new(25.0 - teams[1][0].mu, teams[1][0].sigma),
        1e-6,
    );
}

//! Rating model and predictor settings

use crate::predictor::Predictor;
use crate::rating::{ModelKind, ModelParams, RatingModel};
use serde::{Deserialize, Serialize};

/// Which model to run and the parameters it is built with
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub kind: ModelKind,
    #[serde(flatten)]
    pub params: ModelParams,
}

impl ModelSettings {
    pub fn build(&self) -> RatingModel {
        RatingModel::new(self.kind, self.params)
    }
}

/// Settings for outcome predictions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorSettings {
    pub beta: f64,
    pub kappa: f64,
    pub balance: bool,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        let predictor = Predictor::default();
        Self {
            beta: predictor.beta,
            kappa: predictor.kappa,
            balance: predictor.balance,
        }
    }
}

impl PredictorSettings {
    pub fn build(&self) -> Predictor {
        Predictor::new(self.beta, self.kappa, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::RatingCalculator;

    #[test]
    fn test_model_settings_flatten_params() {
        let settings: ModelSettings = toml::from_str(
            r#"
            kind = "thurstone-mosteller-partial"
            beta = 3.5
            limit_sigma = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.kind, ModelKind::ThurstoneMostellerPartial);
        assert_eq!(settings.params.beta, 3.5);
        assert!(settings.params.limit_sigma);
        assert_eq!(settings.params.mu, 25.0);

        let model = settings.build();
        assert_eq!(model.kind(), ModelKind::ThurstoneMostellerPartial);
        assert_eq!(model.params().beta, 3.5);
    }

    #[test]
    fn test_predictor_settings_default_matches_predictor() {
        assert_eq!(PredictorSettings::default().build(), Predictor::default());
    }
}

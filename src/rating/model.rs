//! The closed family of rating models behind one tagged enum

use crate::error::Result;
use crate::rating::bradley_terry::{BradleyTerryFull, BradleyTerryPartial};
use crate::rating::calculator::RatingCalculator;
use crate::rating::params::ModelParams;
use crate::rating::plackett_luce::PlackettLuce;
use crate::rating::thurstone_mosteller::{ThurstoneMostellerFull, ThurstoneMostellerPartial};
use crate::types::Team;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which rating model to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    BradleyTerryFull,
    BradleyTerryPartial,
    #[default]
    PlackettLuce,
    ThurstoneMostellerFull,
    ThurstoneMostellerPartial,
}

impl ModelKind {
    pub const ALL: [ModelKind; 5] = [
        ModelKind::BradleyTerryFull,
        ModelKind::BradleyTerryPartial,
        ModelKind::PlackettLuce,
        ModelKind::ThurstoneMostellerFull,
        ModelKind::ThurstoneMostellerPartial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::BradleyTerryFull => "bradley-terry-full",
            ModelKind::BradleyTerryPartial => "bradley-terry-partial",
            ModelKind::PlackettLuce => "plackett-luce",
            ModelKind::ThurstoneMostellerFull => "thurstone-mosteller-full",
            ModelKind::ThurstoneMostellerPartial => "thurstone-mosteller-partial",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown rating model: {}", s))
    }
}

/// Any of the five rating models, chosen at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RatingModel {
    BradleyTerryFull(BradleyTerryFull),
    BradleyTerryPartial(BradleyTerryPartial),
    PlackettLuce(PlackettLuce),
    ThurstoneMostellerFull(ThurstoneMostellerFull),
    ThurstoneMostellerPartial(ThurstoneMostellerPartial),
}

impl RatingModel {
    pub fn new(kind: ModelKind, params: ModelParams) -> Self {
        match kind {
            ModelKind::BradleyTerryFull => Self::BradleyTerryFull(BradleyTerryFull::new(params)),
            ModelKind::BradleyTerryPartial => {
                Self::BradleyTerryPartial(BradleyTerryPartial::new(params))
            }
            ModelKind::PlackettLuce => Self::PlackettLuce(PlackettLuce::new(params)),
            ModelKind::ThurstoneMostellerFull => {
                Self::ThurstoneMostellerFull(ThurstoneMostellerFull::new(params))
            }
            ModelKind::ThurstoneMostellerPartial => {
                Self::ThurstoneMostellerPartial(ThurstoneMostellerPartial::new(params))
            }
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            Self::BradleyTerryFull(_) => ModelKind::BradleyTerryFull,
            Self::BradleyTerryPartial(_) => ModelKind::BradleyTerryPartial,
            Self::PlackettLuce(_) => ModelKind::PlackettLuce,
            Self::ThurstoneMostellerFull(_) => ModelKind::ThurstoneMostellerFull,
            Self::ThurstoneMostellerPartial(_) => ModelKind::ThurstoneMostellerPartial,
        }
    }

    fn inner(&self) -> &dyn RatingCalculator {
        match self {
            Self::BradleyTerryFull(model) => model,
            Self::BradleyTerryPartial(model) => model,
            Self::PlackettLuce(model) => model,
            Self::ThurstoneMostellerFull(model) => model,
            Self::ThurstoneMostellerPartial(model) => model,
        }
    }
}

impl Default for RatingModel {
    fn default() -> Self {
        Self::new(ModelKind::default(), ModelParams::default())
    }
}

impl RatingCalculator for RatingModel {
    fn rate(
        &self,
        teams: &[Team],
        ranks: Option<&[i64]>,
        scores: Option<&[i64]>,
        weights: Option<&[Vec<f64>]>,
    ) -> Result<Vec<Team>> {
        self.inner().rate(teams, ranks, scores, weights)
    }

    fn params(&self) -> &ModelParams {
        self.inner().params()
    }
}

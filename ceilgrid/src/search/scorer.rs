use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GridError;
use crate::entities::{Interior, LayoutCandidate};
use crate::util::{GridConfig, PanelCountBand, ScoringWeights};

/// Objective of the grid search.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    /// Rewards panel counts within the preferred band, penalizes counts outside of it
    #[default]
    Balanced,
    /// Rewards fewer panels, and thus fewer seams between them
    MinimizeSeams,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::MinimizeSeams => "minimize_seams",
        }
    }
}

impl FromStr for Strategy {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(Strategy::Balanced),
            "minimize_seams" => Ok(Strategy::MinimizeSeams),
            _ => Err(GridError::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.name().to_string()
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Assigns every candidate a score in `(0, 1]`, higher is better.
///
/// `score = efficiency * aspect_penalty * count_bonus`, where
/// * `efficiency` is the fraction of the interior covered by panels,
/// * `aspect_penalty = 1 / (1 + aspect * |panel_width / panel_height - target_aspect_ratio|)`,
/// * `count_bonus` depends on the [`Strategy`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutScorer {
    pub strategy: Strategy,
    pub target_aspect_ratio: f64,
    pub weights: ScoringWeights,
    pub band: PanelCountBand,
}

impl LayoutScorer {
    pub fn new(strategy: Strategy, target_aspect_ratio: f64, config: &GridConfig) -> Self {
        Self {
            strategy,
            target_aspect_ratio,
            weights: config.scoring,
            band: config.preferred_panels,
        }
    }

    pub fn score(&self, candidate: &LayoutCandidate, interior: &Interior) -> f64 {
        self.efficiency(candidate, interior) * self.aspect_penalty(candidate) * self.count_bonus(candidate)
    }

    /// Fraction of the interior covered by the panels of `candidate`
    pub fn efficiency(&self, candidate: &LayoutCandidate, interior: &Interior) -> f64 {
        let covered = candidate.panel_width * candidate.panel_height * candidate.total_panels() as f64;
        covered / interior.area()
    }

    pub fn aspect_penalty(&self, candidate: &LayoutCandidate) -> f64 {
        1.0 / (1.0 + self.weights.aspect * candidate.aspect_error(self.target_aspect_ratio))
    }

    pub fn count_bonus(&self, candidate: &LayoutCandidate) -> f64 {
        let n_panels = candidate.total_panels();
        match self.strategy {
            Strategy::Balanced => match self.band.contains(n_panels) {
                true => 1.0,
                false => {
                    let distance = self.band.distance(n_panels) as f64;
                    1.0 / (1.0 + self.weights.band_slope * distance)
                }
            },
            Strategy::MinimizeSeams => 1.0 / (1.0 + self.weights.seam * n_panels as f64),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::entities::LengthUnit;
use crate::util::{MAX_PANEL_DIMENSION, MAX_SURFACE_DIMENSION};

///Configuration of the grid search.
///Lengths are expressed in millimeters, regardless of the unit of the surface.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    ///Maximum width and height of a single panel, in millimeters
    pub max_panel_dimension: f64,
    ///Maximum length and width of a surface accepted by the validator, in millimeters
    pub max_surface_dimension: f64,
    ///Practical range of total panel counts. Bounds the search window and is rewarded by the balanced strategy.
    pub preferred_panels: PanelCountBand,
    ///Factor by which the search window extends beyond the upper edge of `preferred_panels`, on each axis
    pub window_widen_factor: f64,
    ///Weights of the scoring function
    #[serde(default)]
    pub scoring: ScoringWeights,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_panel_dimension: MAX_PANEL_DIMENSION,
            max_surface_dimension: MAX_SURFACE_DIMENSION,
            preferred_panels: PanelCountBand { min: 4, max: 16 },
            window_widen_factor: 1.25,
            scoring: ScoringWeights::default(),
        }
    }
}

impl GridConfig {
    /// This config with its lengths converted from millimeters to `unit`
    pub fn for_unit(&self, unit: LengthUnit) -> Self {
        let mm = unit.millimeters_per_unit();
        Self {
            max_panel_dimension: self.max_panel_dimension / mm,
            max_surface_dimension: self.max_surface_dimension / mm,
            ..*self
        }
    }

    /// Number of panel counts the search examines along each axis
    pub fn window_span(&self) -> usize {
        let span = (self.preferred_panels.max as f64 * self.window_widen_factor).ceil();
        //float to int casts saturate
        (span as usize).max(1)
    }
}

///Inclusive range of total panel counts
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelCountBand {
    pub min: usize,
    pub max: usize,
}

impl PanelCountBand {
    pub fn contains(&self, n_panels: usize) -> bool {
        (self.min..=self.max).contains(&n_panels)
    }

    /// Distance from `n_panels` to the nearest edge of the band, zero inside the band
    pub fn distance(&self, n_panels: usize) -> usize {
        if n_panels < self.min {
            self.min - n_panels
        } else {
            n_panels.saturating_sub(self.max)
        }
    }
}

///Constants of the scoring function
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScoringWeights {
    ///Steepness of the penalty on deviating from the target aspect ratio
    pub aspect: f64,
    ///Steepness of the reward for fewer panels in the minimize-seams strategy
    pub seam: f64,
    ///Steepness of the penalty on panel counts outside the preferred band in the balanced strategy
    pub band_slope: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            aspect: 1.2,
            seam: 0.05,
            band_slope: 0.1,
        }
    }
}

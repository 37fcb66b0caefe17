use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::entities::{LayoutResult, MaterialSpec};
use crate::error::GridResult;
use crate::util::assertions;
use crate::validation;

/// Default fraction of material lost to cutting and breakage
pub const DEFAULT_WASTE_FACTOR: f64 = 0.15;

/// Pricing parameters on top of the material price.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CostParameters {
    /// Fraction of the material cost added as waste, in `[0, 1]`
    pub waste_factor: f64,
    /// Labor cost as a fraction of material and waste cost, no labor if absent
    pub labor_multiplier: Option<f64>,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            waste_factor: DEFAULT_WASTE_FACTOR,
            labor_multiplier: None,
        }
    }
}

/// Cost of a layout, in the currency of the material price.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CostBreakdown {
    pub material_cost: f64,
    pub waste_cost: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Total cost divided over `total_panels` panels
    pub fn per_panel(&self, total_panels: usize) -> Option<f64> {
        match total_panels {
            0 => None,
            n => Some(self.total_cost / n as f64),
        }
    }
}

impl Display for CostBreakdown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "material: {:.2}, waste: {:.2}, labor: {:.2}, total: {:.2}",
            self.material_cost, self.waste_cost, self.labor_cost, self.total_cost
        )
    }
}

/// Prices the panels of a layout.
pub struct CostEstimator;

impl CostEstimator {
    /// Fails with [`InvalidCostParameter`](crate::GridError::InvalidCostParameter) before computing anything
    /// if the material price or `params` are out of range.
    pub fn estimate(
        layout: &LayoutResult,
        material: &MaterialSpec,
        params: &CostParameters,
    ) -> GridResult<CostBreakdown> {
        validation::validate_cost_parameters(material, params.waste_factor, params.labor_multiplier)?;

        let covered_area_m2 = layout.covered_area_m2();
        let material_cost = covered_area_m2 * material.cost_per_unit_area;
        let waste_cost = material_cost * params.waste_factor;
        let subtotal = material_cost + waste_cost;
        let labor_cost = subtotal * params.labor_multiplier.unwrap_or(0.0);
        let total_cost = subtotal + labor_cost;

        let cost = CostBreakdown {
            material_cost,
            waste_cost,
            labor_cost,
            total_cost,
        };
        debug_assert!(assertions::cost_is_consistent(&cost), "{cost}");
        debug!(
            "[COST] {:.3} m2 of '{}' at {:.2}/m2: {}",
            covered_area_m2, material.name, material.cost_per_unit_area, cost
        );
        Ok(cost)
    }
}

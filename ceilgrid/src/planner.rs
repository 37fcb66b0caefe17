use log::info;
use serde::{Deserialize, Serialize};

use crate::cost::{CostBreakdown, CostEstimator, CostParameters, DEFAULT_WASTE_FACTOR};
use crate::entities::{LayoutResult, MaterialSpec, SpacingSpec, SurfaceDimensions};
use crate::error::GridResult;
use crate::search::{LayoutSelector, Strategy};
use crate::util::GridConfig;
use crate::validation;

/// Options of a single calculation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PlanOptions {
    pub strategy: Strategy,
    /// Fraction of the material cost added as waste, in `[0, 1]`
    pub waste_factor: f64,
    /// Labor cost as a fraction of material and waste cost
    pub labor_multiplier: Option<f64>,
    /// Preferred panel width over panel height
    pub target_aspect_ratio: f64,
    /// Forces a grid of (`panel_count_x`, `panel_count_y`) instead of searching for one
    pub fixed_grid: Option<(usize, usize)>,
    /// Number of runner-up layouts reported next to the selected one
    pub n_alternatives: usize,
    pub grid: GridConfig,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            waste_factor: DEFAULT_WASTE_FACTOR,
            labor_multiplier: None,
            target_aspect_ratio: 1.0,
            fixed_grid: None,
            n_alternatives: 3,
            grid: GridConfig::default(),
        }
    }
}

impl PlanOptions {
    pub fn cost_parameters(&self) -> CostParameters {
        CostParameters {
            waste_factor: self.waste_factor,
            labor_multiplier: self.labor_multiplier,
        }
    }
}

/// Everything a single calculation depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanRequest {
    pub surface: SurfaceDimensions,
    pub spacing: SpacingSpec,
    pub material: MaterialSpec,
    pub options: PlanOptions,
}

/// Outcome of a calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub strategy: Strategy,
    pub layout: LayoutResult,
    pub cost: CostBreakdown,
    /// Best layouts after `layout`, in order of preference.
    /// For a fixed grid, these are the best layouts the search would have selected instead.
    pub alternatives: Vec<LayoutResult>,
}

/// Validates the request, selects (or evaluates the fixed) layout and prices it.
/// No search work is done unless all inputs are valid.
pub fn plan(request: &PlanRequest) -> GridResult<Plan> {
    let PlanRequest {
        surface,
        spacing,
        material,
        options,
    } = request;
    let cost_params = options.cost_parameters();

    validation::validate_config(&options.grid, options.target_aspect_ratio)?;
    validation::validate_inputs(surface, spacing, &options.grid)?;
    validation::validate_cost_parameters(material, cost_params.waste_factor, cost_params.labor_multiplier)?;

    let selector = LayoutSelector::new(
        *surface,
        *spacing,
        options.strategy,
        options.target_aspect_ratio,
        options.grid,
    );

    let (layout, alternatives) = match options.fixed_grid {
        Some((nx, ny)) => {
            let layout = selector.evaluate_fixed(nx, ny)?;
            (layout, selector.rank(options.n_alternatives)?)
        }
        None => {
            let mut ranked = selector.rank(options.n_alternatives + 1)?;
            let layout = ranked.remove(0);
            (layout, ranked)
        }
    };

    let cost = CostEstimator::estimate(&layout, material, &cost_params)?;

    info!(
        "[PLAN] {} x {} {}: {}, total cost {:.2}",
        surface.length(),
        surface.width(),
        surface.unit().symbol(),
        layout,
        cost.total_cost
    );

    Ok(Plan {
        strategy: options.strategy,
        layout,
        cost,
        alternatives,
    })
}

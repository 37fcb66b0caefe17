use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::LengthUnit;
use crate::planner::PlanOptions;
use crate::search::Strategy;

/// External representation of a project: a single surface to be covered with panels.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtProject {
    pub name: String,
    pub surface: ExtSurface,
    pub spacing: ExtSpacing,
    pub material: ExtMaterial,
    /// Options specific to this project.
    /// Replace the options of the application entirely if present, omitted fields take their default values.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<PlanOptions>,
}

/// External representation of [`SurfaceDimensions`](crate::entities::SurfaceDimensions).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtSurface {
    /// Extent along the x-axis
    pub length: f64,
    /// Extent along the y-axis
    pub width: f64,
    /// Unit of all lengths in the project, millimeters if not specified
    #[serde(default)]
    pub unit: LengthUnit,
}

/// External representation of [`SpacingSpec`](crate::entities::SpacingSpec).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtSpacing {
    pub perimeter_gap: f64,
    pub panel_gap: f64,
}

/// External representation of [`MaterialSpec`](crate::entities::MaterialSpec).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtMaterial {
    pub name: String,
    /// Price per square meter
    pub cost_per_unit_area: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub attributes: BTreeMap<String, String>,
}

/// External representation of an axis-aligned rectangle.
/// With its bottom left corner at (x_min, y_min), a width and height.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtRect {
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
}

/// External representation of [`LayoutResult`](crate::entities::LayoutResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayout {
    pub panel_count_x: usize,
    pub panel_count_y: usize,
    pub panel_width: f64,
    pub panel_height: f64,
    pub total_panels: usize,
    /// In the unit of the surface squared
    pub covered_area: f64,
    pub covered_area_m2: f64,
    /// In the unit of the surface squared
    pub total_area: f64,
    pub coverage_ratio: f64,
    pub score: f64,
    /// Position of every panel on the surface
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub panels: Vec<ExtRect>,
}

/// External representation of [`CostBreakdown`](crate::cost::CostBreakdown).
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtCost {
    pub material_cost: f64,
    pub waste_cost: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cost_per_panel: Option<f64>,
}

/// External representation of a [`Plan`](crate::planner::Plan).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlan {
    pub strategy: Strategy,
    pub layout: ExtLayout,
    pub cost: ExtCost,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub alternatives: Vec<ExtLayout>,
}

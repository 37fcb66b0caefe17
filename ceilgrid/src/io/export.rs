use itertools::Itertools;

use crate::cost::CostBreakdown;
use crate::entities::{LayoutResult, MaterialSpec};
use crate::io::ext_repr::{
    ExtCost, ExtLayout, ExtMaterial, ExtPlan, ExtProject, ExtRect, ExtSpacing, ExtSurface,
};
use crate::planner::{Plan, PlanRequest};

/// Exports a [`Plan`]. Only the selected layout carries the positions of its panels.
pub fn export_plan(plan: &Plan) -> ExtPlan {
    ExtPlan {
        strategy: plan.strategy,
        layout: export_layout(&plan.layout, true),
        cost: export_cost(&plan.cost, plan.layout.total_panels()),
        alternatives: plan
            .alternatives
            .iter()
            .map(|alt| export_layout(alt, false))
            .collect_vec(),
    }
}

pub fn export_layout(layout: &LayoutResult, with_panels: bool) -> ExtLayout {
    let panels = match with_panels {
        true => layout
            .panel_rects()
            .map(|r| ExtRect {
                x_min: r.x_min,
                y_min: r.y_min,
                width: r.width(),
                height: r.height(),
            })
            .collect_vec(),
        false => vec![],
    };

    ExtLayout {
        panel_count_x: layout.panel_count_x(),
        panel_count_y: layout.panel_count_y(),
        panel_width: layout.panel_width(),
        panel_height: layout.panel_height(),
        total_panels: layout.total_panels(),
        covered_area: layout.covered_area(),
        covered_area_m2: layout.covered_area_m2(),
        total_area: layout.total_area(),
        coverage_ratio: layout.coverage_ratio(),
        score: layout.score(),
        panels,
    }
}

pub fn export_cost(cost: &CostBreakdown, total_panels: usize) -> ExtCost {
    ExtCost {
        material_cost: cost.material_cost,
        waste_cost: cost.waste_cost,
        labor_cost: cost.labor_cost,
        total_cost: cost.total_cost,
        cost_per_panel: cost.per_panel(total_panels),
    }
}

/// Exports the inputs of a calculation as a project, the options included.
pub fn export_project(name: &str, request: &PlanRequest) -> ExtProject {
    ExtProject {
        name: name.to_string(),
        surface: ExtSurface {
            length: request.surface.length(),
            width: request.surface.width(),
            unit: request.surface.unit(),
        },
        spacing: ExtSpacing {
            perimeter_gap: request.spacing.perimeter_gap(),
            panel_gap: request.spacing.panel_gap(),
        },
        material: export_material(&request.material),
        options: Some(request.options),
    }
}

pub fn export_material(material: &MaterialSpec) -> ExtMaterial {
    ExtMaterial {
        name: material.name.clone(),
        cost_per_unit_area: material.cost_per_unit_area,
        description: material.description.clone(),
        attributes: material.attributes.clone(),
    }
}

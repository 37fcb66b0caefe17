use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::cost::CostBreakdown;
use crate::entities::{Interior, LayoutCandidate, LayoutResult};
use crate::geometry::Rect;
use crate::util::{FIT_TOLERANCE, FPA};
//Various checks to verify correctness of the results of a calculation
//Used in debug_assert!() blocks

pub fn candidate_fits_interior(
    candidate: &LayoutCandidate,
    interior: &Interior,
    max_dimension: f64,
) -> bool {
    let span_x = interior.occupied_span(candidate.panel_width, candidate.panel_count_x);
    let span_y = interior.occupied_span(candidate.panel_height, candidate.panel_count_y);

    candidate.panel_width > 0.0
        && candidate.panel_height > 0.0
        && FPA(candidate.panel_width) <= FPA(max_dimension)
        && FPA(candidate.panel_height) <= FPA(max_dimension)
        && FPA(span_x) <= FPA(interior.available_x)
        && FPA(span_y) <= FPA(interior.available_y)
}

pub fn layout_respects_constraints(layout: &LayoutResult, max_dimension: f64) -> bool {
    let candidate = LayoutCandidate {
        panel_count_x: layout.panel_count_x(),
        panel_count_y: layout.panel_count_y(),
        panel_width: layout.panel_width(),
        panel_height: layout.panel_height(),
        score: Some(layout.score()),
    };
    if !candidate_fits_interior(&candidate, &layout.interior(), max_dimension) {
        error!("[ASSERT] layout does not fit its interior: {layout}");
        return false;
    }
    if layout.total_panels() != layout.panel_count_x() * layout.panel_count_y() {
        error!("[ASSERT] panel count mismatch: {layout}");
        return false;
    }
    let panel_area: f64 = layout.panel_rects().map(|r| r.area()).sum();
    if !approx_eq!(f64, panel_area, layout.covered_area(), epsilon = 1e-6 * layout.covered_area().max(1.0)) {
        error!("[ASSERT] covered area {} deviates from the panels: {panel_area}", layout.covered_area());
        return false;
    }
    panels_inside_interior(layout) && panels_are_disjoint(layout)
}

pub fn panels_inside_interior(layout: &LayoutResult) -> bool {
    let p = layout.spacing().perimeter_gap();
    let interior_rect = Rect {
        x_min: p,
        y_min: p,
        x_max: layout.surface().length() - p,
        y_max: layout.surface().width() - p,
    };
    layout
        .panel_rects()
        .all(|panel| interior_rect.almost_contains(&panel))
}

pub fn panels_are_disjoint(layout: &LayoutResult) -> bool {
    layout
        .panel_rects()
        .tuple_combinations()
        .all(|(a, b)| match Rect::intersection(a, b) {
            None => true,
            //touching panels (no panel gap) may overlap by rounding errors only
            Some(overlap) => overlap.width() <= FIT_TOLERANCE || overlap.height() <= FIT_TOLERANCE,
        })
}

pub fn cost_is_consistent(cost: &CostBreakdown) -> bool {
    cost.material_cost >= 0.0
        && cost.waste_cost >= 0.0
        && cost.labor_cost >= 0.0
        && cost.total_cost >= cost.material_cost
        && approx_eq!(
            f64,
            cost.total_cost,
            cost.material_cost + cost.waste_cost + cost.labor_cost,
            epsilon = 1e-6 * cost.total_cost.max(1.0)
        )
}

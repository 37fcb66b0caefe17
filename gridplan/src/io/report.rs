use std::fmt::{self, Write};

use ceilgrid::planner::{Plan, PlanRequest};
use thousands::Separable;

/// Human-readable summary of a plan, as written to `sol_<name>.txt`.
pub fn plan_report(name: &str, request: &PlanRequest, plan: &Plan) -> Result<String, fmt::Error> {
    let mut report = String::new();
    write_plan(&mut report, name, request, plan)?;
    Ok(report)
}

/// Writes the summary of [`plan_report`] to `out`.
pub fn write_plan<W: Write>(out: &mut W, name: &str, request: &PlanRequest, plan: &Plan) -> fmt::Result {
    let surface = &request.surface;
    let unit = surface.unit().symbol();
    let layout = &plan.layout;
    let cost = &plan.cost;
    let money = |v: f64| format!("{v:.2}").separate_with_commas();

    writeln!(out, "Project: {name}")?;
    writeln!(
        out,
        "Surface: {} x {} {unit} ({} {unit}2)",
        surface.length().separate_with_commas(),
        surface.width().separate_with_commas(),
        surface.area().separate_with_commas()
    )?;
    writeln!(
        out,
        "Spacing: perimeter gap {} {unit}, panel gap {} {unit}",
        request.spacing.perimeter_gap(),
        request.spacing.panel_gap()
    )?;
    writeln!(
        out,
        "Material: {} at {}/m2",
        request.material.name,
        money(request.material.cost_per_unit_area)
    )?;
    for (key, value) in &request.material.attributes {
        writeln!(out, "  {key}: {value}")?;
    }
    writeln!(out)?;

    writeln!(out, "Layout ({}):", plan.strategy)?;
    writeln!(
        out,
        "  grid:      {} x {} ({} panels)",
        layout.panel_count_x(),
        layout.panel_count_y(),
        layout.total_panels()
    )?;
    writeln!(
        out,
        "  panel:     {:.1} x {:.1} {unit}",
        layout.panel_width(),
        layout.panel_height()
    )?;
    writeln!(out, "  covered:   {:.3} m2", layout.covered_area_m2())?;
    writeln!(out, "  coverage:  {:.2}%", layout.coverage_ratio() * 100.0)?;
    writeln!(out, "  score:     {:.5}", layout.score())?;
    writeln!(out)?;

    writeln!(out, "Cost:")?;
    writeln!(out, "  material:  {}", money(cost.material_cost))?;
    writeln!(out, "  waste:     {}", money(cost.waste_cost))?;
    writeln!(out, "  labor:     {}", money(cost.labor_cost))?;
    writeln!(out, "  total:     {}", money(cost.total_cost))?;
    if let Some(per_panel) = cost.per_panel(layout.total_panels()) {
        writeln!(out, "  per panel: {}", money(per_panel))?;
    }

    if !plan.alternatives.is_empty() {
        writeln!(out)?;
        writeln!(out, "Alternatives:")?;
        for (i, alt) in plan.alternatives.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} x {} ({} panels), {:.1} x {:.1} {unit}, score {:.5}",
                i + 1,
                alt.panel_count_x(),
                alt.panel_count_y(),
                alt.total_panels(),
                alt.panel_width(),
                alt.panel_height(),
                alt.score()
            )?;
        }
    }
    Ok(())
}

use log::debug;

use crate::entities::{MaterialSpec, SpacingSpec, SurfaceDimensions};
use crate::error::{GridError, GridResult};
use crate::util::{GridConfig, MAX_WINDOW_SPAN};

/// Checks both surface dimensions: finite, positive and not above `max_surface_dimension`
/// (converted to the unit of the surface).
pub fn validate_surface(surface: &SurfaceDimensions, config: &GridConfig) -> GridResult<()> {
    let config = config.for_unit(surface.unit());
    for (name, value) in [("length", surface.length()), ("width", surface.width())] {
        if !value.is_finite() {
            return Err(GridError::InvalidDimension {
                name,
                value,
                constraint: "must be a finite number".into(),
            });
        }
        if value <= 0.0 {
            return Err(GridError::InvalidDimension {
                name,
                value,
                constraint: "must be positive".into(),
            });
        }
        if value > config.max_surface_dimension {
            return Err(GridError::InvalidDimension {
                name,
                value,
                constraint: format!("must not exceed {}", config.max_surface_dimension),
            });
        }
    }
    Ok(())
}

/// Checks that both gaps are finite and non-negative.
pub fn validate_spacing(spacing: &SpacingSpec) -> GridResult<()> {
    for (name, value) in [
        ("perimeter_gap", spacing.perimeter_gap()),
        ("panel_gap", spacing.panel_gap()),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(GridError::InvalidSpacing {
                name,
                value,
                constraint: "must be a finite, non-negative number".into(),
            });
        }
    }
    Ok(())
}

/// Validates the surface and the spacing, and checks that the perimeter gap
/// leaves usable interior space along both axes (`2 * perimeter_gap < length` and `< width`).
pub fn validate_inputs(
    surface: &SurfaceDimensions,
    spacing: &SpacingSpec,
    config: &GridConfig,
) -> GridResult<()> {
    validate_surface(surface, config)?;
    validate_spacing(spacing)?;

    let reserved = 2.0 * spacing.perimeter_gap();
    for (axis, extent) in [("length", surface.length()), ("width", surface.width())] {
        if reserved >= extent {
            return Err(GridError::InvalidSpacing {
                name: "perimeter_gap",
                value: spacing.perimeter_gap(),
                constraint: format!(
                    "twice the perimeter gap ({reserved}) leaves no usable space along the {axis} ({extent})"
                ),
            });
        }
    }
    debug!(
        "[VAL] inputs valid: {} x {} {}, gaps {}/{}",
        surface.length(),
        surface.width(),
        surface.unit().symbol(),
        spacing.perimeter_gap(),
        spacing.panel_gap()
    );
    Ok(())
}

/// Checks the parameters of the cost estimation.
/// The waste factor is a fraction in `[0, 1]`, the labor multiplier (if any) and the material price are non-negative.
pub fn validate_cost_parameters(
    material: &MaterialSpec,
    waste_factor: f64,
    labor_multiplier: Option<f64>,
) -> GridResult<()> {
    if !material.cost_per_unit_area.is_finite() || material.cost_per_unit_area < 0.0 {
        return Err(GridError::InvalidCostParameter {
            name: "cost_per_unit_area",
            value: material.cost_per_unit_area,
            constraint: "must be a finite, non-negative price".into(),
        });
    }
    if !(0.0..=1.0).contains(&waste_factor) {
        return Err(GridError::InvalidCostParameter {
            name: "waste_factor",
            value: waste_factor,
            constraint: "must be a fraction between 0 and 1".into(),
        });
    }
    if let Some(labor_multiplier) = labor_multiplier {
        if !labor_multiplier.is_finite() || labor_multiplier < 0.0 {
            return Err(GridError::InvalidCostParameter {
                name: "labor_multiplier",
                value: labor_multiplier,
                constraint: "must be a finite, non-negative fraction".into(),
            });
        }
    }
    Ok(())
}

/// Checks the tunables of the search and the requested target aspect ratio.
pub fn validate_config(config: &GridConfig, target_aspect_ratio: f64) -> GridResult<()> {
    let invalid = |name: &'static str, value: f64, constraint: &str| GridError::InvalidConfig {
        name,
        value,
        constraint: constraint.into(),
    };

    if !target_aspect_ratio.is_finite() || target_aspect_ratio <= 0.0 {
        return Err(invalid(
            "target_aspect_ratio",
            target_aspect_ratio,
            "must be positive",
        ));
    }
    if !config.max_panel_dimension.is_finite() || config.max_panel_dimension <= 0.0 {
        return Err(invalid(
            "max_panel_dimension",
            config.max_panel_dimension,
            "must be positive",
        ));
    }
    if !config.max_surface_dimension.is_finite() || config.max_surface_dimension <= 0.0 {
        return Err(invalid(
            "max_surface_dimension",
            config.max_surface_dimension,
            "must be positive",
        ));
    }
    let band = config.preferred_panels;
    if band.min == 0 || band.min > band.max {
        return Err(invalid(
            "preferred_panels.min",
            band.min as f64,
            &format!("must be at least 1 and at most preferred_panels.max ({})", band.max),
        ));
    }
    if !config.window_widen_factor.is_finite() || config.window_widen_factor < 1.0 {
        return Err(invalid(
            "window_widen_factor",
            config.window_widen_factor,
            "must be at least 1",
        ));
    }
    if config.window_span() > MAX_WINDOW_SPAN {
        return Err(invalid(
            "window_widen_factor",
            config.window_widen_factor,
            &format!(
                "preferred_panels.max ({}) times the widen factor must not exceed {MAX_WINDOW_SPAN}",
                band.max
            ),
        ));
    }
    let weights = config.scoring;
    for (name, value) in [
        ("scoring.aspect", weights.aspect),
        ("scoring.seam", weights.seam),
        ("scoring.band_slope", weights.band_slope),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(name, value, "must be non-negative"));
        }
    }
    Ok(())
}

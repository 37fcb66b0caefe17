use log::debug;

use crate::entities::{MaterialSpec, SpacingSpec, SurfaceDimensions};
use crate::error::GridResult;
use crate::io::ext_repr::{ExtMaterial, ExtProject, ExtSpacing, ExtSurface};
use crate::planner::{PlanOptions, PlanRequest};
use crate::validation;

/// Converts external representations into validated internal ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct Importer {
    /// Options for projects which do not specify their own
    pub default_options: PlanOptions,
}

impl Importer {
    pub fn new(default_options: PlanOptions) -> Self {
        Self { default_options }
    }

    /// Builds a fully validated [`PlanRequest`] from a project.
    pub fn import_project(&self, ext_project: &ExtProject) -> GridResult<PlanRequest> {
        let options = ext_project.options.unwrap_or(self.default_options);
        validation::validate_config(&options.grid, options.target_aspect_ratio)?;

        let surface = import_surface(&ext_project.surface);
        let spacing = import_spacing(&ext_project.spacing);
        validation::validate_inputs(&surface, &spacing, &options.grid)?;

        let material = import_material(&ext_project.material);
        validation::validate_cost_parameters(&material, options.waste_factor, options.labor_multiplier)?;

        debug!(
            "[IMPORT] project '{}' imported ({} options)",
            ext_project.name,
            match ext_project.options {
                Some(_) => "project",
                None => "default",
            }
        );

        Ok(PlanRequest {
            surface,
            spacing,
            material,
            options,
        })
    }
}

pub fn import_surface(ext_surface: &ExtSurface) -> SurfaceDimensions {
    SurfaceDimensions::with_unit(ext_surface.length, ext_surface.width, ext_surface.unit)
}

pub fn import_spacing(ext_spacing: &ExtSpacing) -> SpacingSpec {
    SpacingSpec::new(ext_spacing.perimeter_gap, ext_spacing.panel_gap)
}

pub fn import_material(ext_material: &ExtMaterial) -> MaterialSpec {
    MaterialSpec {
        name: ext_material.name.clone(),
        cost_per_unit_area: ext_material.cost_per_unit_area,
        description: ext_material.description.clone(),
        attributes: ext_material.attributes.clone(),
    }
}

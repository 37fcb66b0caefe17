#[cfg(test)]
mod tests {
    use ceilgrid::GridError;
    use ceilgrid::entities::{LengthUnit, MaterialSpec, SpacingSpec, SurfaceDimensions};
    use ceilgrid::util::{GridConfig, MAX_WINDOW_SPAN, PanelCountBand};
    use ceilgrid::validation;
    use test_case::test_case;

    #[test_case(6000.0, 5000.0; "scenario surface")]
    #[test_case(1.0, 1.0; "tiny")]
    #[test_case(100_000.0, 100_000.0; "at the upper bound")]
    fn valid_surface(length: f64, width: f64) {
        let surface = SurfaceDimensions::new(length, width);
        assert!(validation::validate_surface(&surface, &GridConfig::default()).is_ok());
    }

    #[test_case(0.0, 5000.0, "length"; "zero length")]
    #[test_case(6000.0, -1.0, "width"; "negative width")]
    #[test_case(f64::NAN, 5000.0, "length"; "nan length")]
    #[test_case(6000.0, f64::INFINITY, "width"; "infinite width")]
    #[test_case(100_001.0, 5000.0, "length"; "absurd length")]
    fn invalid_surface(length: f64, width: f64, expected_name: &str) {
        let surface = SurfaceDimensions::new(length, width);
        match validation::validate_surface(&surface, &GridConfig::default()) {
            Err(GridError::InvalidDimension { name, .. }) => assert_eq!(name, expected_name),
            other => panic!("expected InvalidDimension, got {other:?}"),
        }
    }

    #[test_case(-1.0, 0.0, "perimeter_gap"; "negative perimeter gap")]
    #[test_case(0.0, -0.5, "panel_gap"; "negative panel gap")]
    #[test_case(f64::NAN, 0.0, "perimeter_gap"; "nan perimeter gap")]
    #[test_case(0.0, f64::INFINITY, "panel_gap"; "infinite panel gap")]
    fn invalid_spacing(perimeter_gap: f64, panel_gap: f64, expected_name: &str) {
        let spacing = SpacingSpec::new(perimeter_gap, panel_gap);
        match validation::validate_spacing(&spacing) {
            Err(GridError::InvalidSpacing { name, .. }) => assert_eq!(name, expected_name),
            other => panic!("expected InvalidSpacing, got {other:?}"),
        }
    }

    #[test_case(100.0, 100.0, 60.0; "perimeter consumes small surface")]
    #[test_case(6000.0, 5000.0, 2500.0; "perimeter gap at half the width")]
    #[test_case(6000.0, 5000.0, 3000.0; "perimeter gap at half the length")]
    fn perimeter_gap_leaves_no_interior(length: f64, width: f64, perimeter_gap: f64) {
        let surface = SurfaceDimensions::new(length, width);
        let spacing = SpacingSpec::new(perimeter_gap, 0.0);
        let result = validation::validate_inputs(&surface, &spacing, &GridConfig::default());
        assert!(
            matches!(result, Err(GridError::InvalidSpacing { name: "perimeter_gap", .. })),
            "{result:?}"
        );
    }

    #[test]
    fn perimeter_gap_just_below_half_is_accepted() {
        let surface = SurfaceDimensions::new(6000.0, 5000.0);
        let spacing = SpacingSpec::new(2499.0, 10.0);
        assert!(validation::validate_inputs(&surface, &spacing, &GridConfig::default()).is_ok());
    }

    #[test]
    fn error_message_names_value_and_constraint() {
        let surface = SurfaceDimensions::new(100.0, 100.0);
        let spacing = SpacingSpec::new(60.0, 0.0);
        let err = validation::validate_inputs(&surface, &spacing, &GridConfig::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("perimeter_gap"), "{msg}");
        assert!(msg.contains("60"), "{msg}");
    }

    #[test_case(450.0, 0.0, None; "no waste no labor")]
    #[test_case(450.0, 1.0, Some(0.0); "full waste zero labor")]
    #[test_case(0.0, 0.15, Some(0.25); "free material")]
    fn valid_cost_parameters(price: f64, waste_factor: f64, labor_multiplier: Option<f64>) {
        let material = MaterialSpec::new("mineral fiber", price);
        assert!(validation::validate_cost_parameters(&material, waste_factor, labor_multiplier).is_ok());
    }

    #[test_case(450.0, 1.5, None, "waste_factor"; "waste above one")]
    #[test_case(450.0, -0.1, None, "waste_factor"; "negative waste")]
    #[test_case(450.0, f64::NAN, None, "waste_factor"; "nan waste")]
    #[test_case(450.0, 0.15, Some(-1.0), "labor_multiplier"; "negative labor")]
    #[test_case(450.0, 0.15, Some(f64::NAN), "labor_multiplier"; "nan labor")]
    #[test_case(-450.0, 0.15, None, "cost_per_unit_area"; "negative price")]
    #[test_case(f64::INFINITY, 0.15, None, "cost_per_unit_area"; "infinite price")]
    fn invalid_cost_parameters(
        price: f64,
        waste_factor: f64,
        labor_multiplier: Option<f64>,
        expected_name: &str,
    ) {
        let material = MaterialSpec::new("mineral fiber", price);
        match validation::validate_cost_parameters(&material, waste_factor, labor_multiplier) {
            Err(GridError::InvalidCostParameter { name, .. }) => assert_eq!(name, expected_name),
            other => panic!("expected InvalidCostParameter, got {other:?}"),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validation::validate_config(&GridConfig::default(), 1.0).is_ok());
    }

    #[test]
    fn invalid_config() {
        let default = GridConfig::default();

        let cases = [
            (default, 0.0, "target_aspect_ratio"),
            (default, -1.0, "target_aspect_ratio"),
            (
                GridConfig {
                    max_panel_dimension: 0.0,
                    ..default
                },
                1.0,
                "max_panel_dimension",
            ),
            (
                GridConfig {
                    preferred_panels: PanelCountBand { min: 0, max: 16 },
                    ..default
                },
                1.0,
                "preferred_panels.min",
            ),
            (
                GridConfig {
                    preferred_panels: PanelCountBand { min: 20, max: 16 },
                    ..default
                },
                1.0,
                "preferred_panels.min",
            ),
            (
                GridConfig {
                    window_widen_factor: 0.5,
                    ..default
                },
                1.0,
                "window_widen_factor",
            ),
            (
                GridConfig {
                    window_widen_factor: 1e300,
                    ..default
                },
                1.0,
                "window_widen_factor",
            ),
            (
                GridConfig {
                    preferred_panels: PanelCountBand { min: 4, max: usize::MAX },
                    window_widen_factor: 1.0,
                    ..default
                },
                1.0,
                "window_widen_factor",
            ),
        ];

        for (config, target, expected_name) in cases {
            match validation::validate_config(&config, target) {
                Err(GridError::InvalidConfig { name, .. }) => assert_eq!(name, expected_name),
                other => panic!("expected InvalidConfig for {expected_name}, got {other:?}"),
            }
        }
    }

    #[test_case(16, 16.0, true; "at the limit")]
    #[test_case(16, 16.01, false; "just above the limit")]
    #[test_case(MAX_WINDOW_SPAN, 1.0, true; "band at the limit")]
    #[test_case(MAX_WINDOW_SPAN + 1, 1.0, false; "band above the limit")]
    fn window_span_limit(band_max: usize, widen_factor: f64, accepted: bool) {
        let config = GridConfig {
            preferred_panels: PanelCountBand { min: 4, max: band_max },
            window_widen_factor: widen_factor,
            ..GridConfig::default()
        };
        let result = validation::validate_config(&config, 1.0);
        assert_eq!(result.is_ok(), accepted, "{result:?}");
    }

    #[test_case(LengthUnit::Millimeter, 100_000.0, true; "millimeters at the bound")]
    #[test_case(LengthUnit::Centimeter, 10_000.0, true; "centimeters at the bound")]
    #[test_case(LengthUnit::Centimeter, 10_001.0, false; "centimeters above the bound")]
    #[test_case(LengthUnit::Meter, 100.0, true; "meters at the bound")]
    #[test_case(LengthUnit::Meter, 150.0, false; "meters above the bound")]
    fn surface_bound_follows_the_unit(unit: LengthUnit, length: f64, accepted: bool) {
        let surface = SurfaceDimensions::with_unit(length, 1.0, unit);
        let result = validation::validate_surface(&surface, &GridConfig::default());
        assert_eq!(result.is_ok(), accepted, "{result:?}");
    }

    #[test]
    fn config_lengths_convert_from_millimeters() {
        let default = GridConfig::default();
        assert_eq!(default.for_unit(LengthUnit::Millimeter), default);

        let centimeters = default.for_unit(LengthUnit::Centimeter);
        assert_eq!(centimeters.max_panel_dimension, 240.0);
        assert_eq!(centimeters.max_surface_dimension, 10_000.0);

        let meters = default.for_unit(LengthUnit::Meter);
        assert_eq!(meters.max_panel_dimension, 2.4);
        assert_eq!(meters.max_surface_dimension, 100.0);
        assert_eq!(meters.preferred_panels, default.preferred_panels);
    }
}

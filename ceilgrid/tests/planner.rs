#[cfg(test)]
mod tests {
    use ceilgrid::GridError;
    use ceilgrid::entities::{LengthUnit, MaterialSpec, SpacingSpec, SurfaceDimensions};
    use ceilgrid::planner::{PlanOptions, PlanRequest, plan};
    use ceilgrid::search::Strategy;
    use ceilgrid::util::{FIT_TOLERANCE, GridConfig, MAX_PANEL_DIMENSION, assertions};
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn request(length: f64, width: f64, perimeter_gap: f64, panel_gap: f64) -> PlanRequest {
        PlanRequest {
            surface: SurfaceDimensions::new(length, width),
            spacing: SpacingSpec::new(perimeter_gap, panel_gap),
            material: MaterialSpec::new("acoustic tile", 450.0),
            options: PlanOptions::default(),
        }
    }

    #[test]
    fn scenario_1() {
        init_logger();
        let plan = plan(&request(6000.0, 5000.0, 200.0, 200.0)).unwrap();

        assert_eq!(plan.strategy, Strategy::Balanced);
        assert_eq!(plan.layout.grid_shape(), (4, 3));
        assert!(approx_eq!(f64, plan.layout.coverage_ratio(), 0.70, epsilon = 1e-9));
        assert_eq!(plan.alternatives.len(), 3);
        assert!(plan.alternatives.iter().all(|alt| alt.grid_shape() != (4, 3)));
        assert!(plan.alternatives.iter().all(|alt| alt.score() <= plan.layout.score() + 1e-9));
        // 21 m2 at 450/m2, 15% waste
        assert!(approx_eq!(f64, plan.cost.material_cost, 9450.0, epsilon = 1e-6));
        assert!(approx_eq!(f64, plan.cost.total_cost, 9450.0 * 1.15, epsilon = 1e-6));
    }

    #[test]
    fn scenario_2() {
        init_logger();
        let plan = plan(&request(4800.0, 3600.0, 200.0, 200.0)).unwrap();
        assert_eq!(plan.layout.grid_shape(), (3, 2));
        assert_eq!(plan.layout.total_panels(), 6);
    }

    #[test]
    fn scenario_3() {
        let result = plan(&request(100.0, 100.0, 60.0, 0.0));
        assert!(matches!(result, Err(GridError::InvalidSpacing { .. })), "{result:?}");
    }

    #[test]
    fn scenario_4() {
        init_logger();
        let mut request = request(6000.0, 5000.0, 200.0, 200.0);
        request.options.fixed_grid = Some((4, 4));
        request.options.labor_multiplier = Some(0.25);
        let plan = plan(&request).unwrap();

        assert_eq!(plan.layout.grid_shape(), (4, 4));
        assert!(approx_eq!(f64, plan.layout.covered_area_m2(), 20.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, plan.cost.material_cost, 9000.0, epsilon = 1e-6));
        assert!(approx_eq!(f64, plan.cost.waste_cost, 1350.0, epsilon = 1e-6));
        assert!(approx_eq!(f64, plan.cost.labor_cost, 2587.5, epsilon = 1e-6));
        assert!(approx_eq!(f64, plan.cost.total_cost, 12937.5, epsilon = 1e-6));
        // searched alternatives, the first one being what the search would have selected
        assert_eq!(plan.alternatives[0].grid_shape(), (4, 3));
    }

    #[test]
    fn scenario_5() {
        let balanced = plan(&request(6000.0, 5000.0, 200.0, 200.0)).unwrap();
        let mut seams_request = request(6000.0, 5000.0, 200.0, 200.0);
        seams_request.options.strategy = Strategy::MinimizeSeams;
        let seams = plan(&seams_request).unwrap();

        assert!(seams.layout.total_panels() <= balanced.layout.total_panels());
    }

    #[test]
    fn plans_are_deterministic() {
        let request = request(12_345.0, 6_789.0, 120.0, 35.0);
        let a = plan(&request).unwrap();
        let b = plan(&request).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_inputs_fail_before_search() {
        let mut bad_waste = request(6000.0, 5000.0, 200.0, 200.0);
        bad_waste.options.waste_factor = 2.0;
        assert!(matches!(plan(&bad_waste), Err(GridError::InvalidCostParameter { .. })));

        let mut bad_target = request(6000.0, 5000.0, 200.0, 200.0);
        bad_target.options.target_aspect_ratio = 0.0;
        assert!(matches!(plan(&bad_target), Err(GridError::InvalidConfig { .. })));

        let bad_dimension = request(-6000.0, 5000.0, 200.0, 200.0);
        assert!(matches!(plan(&bad_dimension), Err(GridError::InvalidDimension { .. })));

        // half of the width
        let bad_spacing = request(6000.0, 5000.0, 2500.0, 0.0);
        assert!(matches!(plan(&bad_spacing), Err(GridError::InvalidSpacing { .. })));
    }

    #[test]
    fn impossible_layout() {
        let result = plan(&request(3400.0, 3400.0, 200.0, 3000.0));
        assert!(matches!(result, Err(GridError::LayoutImpossible { .. })), "{result:?}");
    }

    #[test_case(Strategy::Balanced; "balanced")]
    #[test_case(Strategy::MinimizeSeams; "minimize seams")]
    fn layouts_respect_constraints(strategy: Strategy) {
        for length in (1500..=30_000).step_by(2300) {
            for width in (1500..=30_000).step_by(3100) {
                let mut request = request(length as f64, width as f64, 75.0, 40.0);
                request.options.strategy = strategy;
                let plan = plan(&request).unwrap();
                let layout = &plan.layout;
                let interior = layout.interior();

                assert!(layout.panel_width() <= MAX_PANEL_DIMENSION + FIT_TOLERANCE);
                assert!(layout.panel_height() <= MAX_PANEL_DIMENSION + FIT_TOLERANCE);
                let span_x = interior.occupied_span(layout.panel_width(), layout.panel_count_x());
                let span_y = interior.occupied_span(layout.panel_height(), layout.panel_count_y());
                assert!(span_x <= interior.available_x + FIT_TOLERANCE);
                assert!(span_y <= interior.available_y + FIT_TOLERANCE);
                assert!(layout.coverage_ratio() > 0.0 && layout.coverage_ratio() < 1.0);
                assert!(plan.cost.total_cost >= plan.cost.material_cost);
                assert!(assertions::panels_are_disjoint(layout), "{layout}");
                assert!(assertions::panels_inside_interior(layout), "{layout}");
            }
        }
    }

    #[test]
    fn oversized_search_window_is_rejected() {
        let mut request = request(6000.0, 5000.0, 200.0, 200.0);
        request.options.grid.window_widen_factor = 1e300;
        match plan(&request) {
            Err(GridError::InvalidConfig { name, .. }) => assert_eq!(name, "window_widen_factor"),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test_case(LengthUnit::Meter, 30.0, 3.0, 2.4; "meters")]
    #[test_case(LengthUnit::Centimeter, 1850.0, 1240.0, 240.0; "centimeters")]
    fn panel_limit_follows_the_unit(unit: LengthUnit, length: f64, width: f64, max_dimension: f64) {
        init_logger();
        let mut request = request(length, width, 0.0, 0.0);
        request.surface = SurfaceDimensions::with_unit(length, width, unit);
        request.options.strategy = Strategy::MinimizeSeams;
        let plan = plan(&request).unwrap();

        assert!(plan.layout.panel_width() <= max_dimension + FIT_TOLERANCE, "{}", plan.layout);
        assert!(plan.layout.panel_height() <= max_dimension + FIT_TOLERANCE, "{}", plan.layout);
        for alt in &plan.alternatives {
            assert!(alt.panel_width() <= max_dimension + FIT_TOLERANCE, "{alt}");
            assert!(alt.panel_height() <= max_dimension + FIT_TOLERANCE, "{alt}");
        }
    }

    #[test]
    fn custom_grid_config() {
        let mut request = request(6000.0, 5000.0, 200.0, 200.0);
        request.options.grid = GridConfig {
            max_panel_dimension: 1200.0,
            ..GridConfig::default()
        };
        let plan = plan(&request).unwrap();
        assert!(plan.layout.panel_width() <= 1200.0 + FIT_TOLERANCE);
        assert!(plan.layout.panel_height() <= 1200.0 + FIT_TOLERANCE);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: PlanOptions =
            serde_json::from_str(r#"{"strategy": "minimize_seams", "fixed_grid": [4, 4]}"#).unwrap();
        assert_eq!(options.strategy, Strategy::MinimizeSeams);
        assert_eq!(options.fixed_grid, Some((4, 4)));
        assert_eq!(options.waste_factor, 0.15);
        assert_eq!(options.n_alternatives, 3);
        assert_eq!(options.grid, GridConfig::default());

        let unknown = serde_json::from_str::<PlanOptions>(r#"{"strategy": "cheapest"}"#);
        assert!(unknown.is_err());
    }
}

use ceilgrid::planner::PlanOptions;
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration of the planner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct PlannerConfig {
    /// Options of the calculation, for projects which do not specify their own
    #[serde(default)]
    pub plan_options: PlanOptions,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

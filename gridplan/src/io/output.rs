use ceilgrid::io::ext_repr::{ExtPlan, ExtProject};
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanOutput {
    #[serde(flatten)]
    pub project: ExtProject,
    pub plan: ExtPlan,
    pub config: PlannerConfig,
}

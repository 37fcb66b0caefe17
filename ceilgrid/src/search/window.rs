use std::ops::RangeInclusive;

use crate::entities::{Axis, Interior};
use crate::util::{GridConfig, MAX_WINDOW_SPAN};

/// The bounded range of panel counts examined along each axis.
///
/// Along an axis, the window starts at the smallest count which keeps panels under the maximum dimension
/// (all smaller counts are infeasible) and spans `ceil(preferred_panels.max * window_widen_factor)` counts,
/// at most [`MAX_WINDOW_SPAN`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchWindow {
    /// Number of panel counts examined per axis
    pub span: usize,
    pub max_panel_dimension: f64,
}

impl SearchWindow {
    /// `span` is clamped to `1..=MAX_WINDOW_SPAN`
    pub fn new(span: usize, max_panel_dimension: f64) -> Self {
        Self {
            span: span.clamp(1, MAX_WINDOW_SPAN),
            max_panel_dimension,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.window_span(), config.max_panel_dimension)
    }

    /// Panel counts to examine along `axis` of `interior`
    pub fn axis_range(&self, interior: &Interior, axis: Axis) -> RangeInclusive<usize> {
        let lo = interior.min_count(axis, self.max_panel_dimension);
        lo..=lo.saturating_add(self.span - 1)
    }

    /// Upper bound on the number of (x, y) pairs examined
    pub fn pair_count(&self) -> usize {
        self.span.saturating_mul(self.span)
    }
}

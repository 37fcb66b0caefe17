use std::fmt::{Display, Formatter};

use crate::entities::{Axis, Interior};
use crate::util::FIT_TOLERANCE;

/// A candidate panel grid, only alive during the search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCandidate {
    pub panel_count_x: usize,
    pub panel_count_y: usize,
    pub panel_width: f64,
    pub panel_height: f64,
    /// Assigned by the [`LayoutScorer`](crate::search::LayoutScorer), `None` until then
    pub score: Option<f64>,
}

impl LayoutCandidate {
    /// Lays out a `panel_count_x` × `panel_count_y` grid in `interior`.
    /// Returns `None` if the panels would have a non-positive size or exceed `max_dimension`.
    pub fn new(
        interior: &Interior,
        panel_count_x: usize,
        panel_count_y: usize,
        max_dimension: f64,
    ) -> Option<Self> {
        if panel_count_x == 0 || panel_count_y == 0 {
            return None;
        }
        let panel_width = interior.panel_size(Axis::X, panel_count_x);
        let panel_height = interior.panel_size(Axis::Y, panel_count_y);

        let feasible = |size: f64| size > 0.0 && size <= max_dimension + FIT_TOLERANCE;
        match feasible(panel_width) && feasible(panel_height) {
            true => Some(Self {
                panel_count_x,
                panel_count_y,
                panel_width,
                panel_height,
                score: None,
            }),
            false => None,
        }
    }

    pub fn total_panels(&self) -> usize {
        self.panel_count_x * self.panel_count_y
    }

    /// Width over height of a single panel
    pub fn aspect_ratio(&self) -> f64 {
        self.panel_width / self.panel_height
    }

    pub fn aspect_error(&self, target_aspect_ratio: f64) -> f64 {
        (self.aspect_ratio() - target_aspect_ratio).abs()
    }

    pub fn with_score(self, score: f64) -> Self {
        Self {
            score: Some(score),
            ..self
        }
    }
}

impl Display for LayoutCandidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} ({:.1} x {:.1})",
            self.panel_count_x, self.panel_count_y, self.panel_width, self.panel_height
        )?;
        if let Some(score) = self.score {
            write!(f, " score: {score:.5}")?;
        }
        Ok(())
    }
}

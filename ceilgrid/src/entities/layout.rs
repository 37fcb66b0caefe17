use std::fmt::{Display, Formatter};

use itertools::iproduct;

use crate::entities::{Interior, LayoutCandidate, SpacingSpec, SurfaceDimensions};
use crate::geometry::Rect;

/// The panel grid selected for a surface, the primary output of a calculation.
///
/// Only produced by the [`LayoutSelector`](crate::search::LayoutSelector),
/// which guarantees the panels fit the interior and respect the maximum panel dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutResult {
    surface: SurfaceDimensions,
    spacing: SpacingSpec,
    panel_count_x: usize,
    panel_count_y: usize,
    panel_width: f64,
    panel_height: f64,
    total_panels: usize,
    covered_area: f64,
    total_area: f64,
    coverage_ratio: f64,
    score: f64,
}

impl LayoutResult {
    pub(crate) fn from_scored(
        surface: &SurfaceDimensions,
        spacing: &SpacingSpec,
        candidate: &LayoutCandidate,
        score: f64,
    ) -> Self {
        let total_panels = candidate.total_panels();
        let covered_area = candidate.panel_width * candidate.panel_height * total_panels as f64;
        let total_area = surface.area();
        Self {
            surface: *surface,
            spacing: *spacing,
            panel_count_x: candidate.panel_count_x,
            panel_count_y: candidate.panel_count_y,
            panel_width: candidate.panel_width,
            panel_height: candidate.panel_height,
            total_panels,
            covered_area,
            total_area,
            coverage_ratio: covered_area / total_area,
            score,
        }
    }

    pub fn surface(&self) -> &SurfaceDimensions {
        &self.surface
    }

    pub fn spacing(&self) -> &SpacingSpec {
        &self.spacing
    }

    pub fn interior(&self) -> Interior {
        Interior::new(&self.surface, &self.spacing)
    }

    pub fn panel_count_x(&self) -> usize {
        self.panel_count_x
    }

    pub fn panel_count_y(&self) -> usize {
        self.panel_count_y
    }

    /// Grid shape as (`panel_count_x`, `panel_count_y`)
    pub fn grid_shape(&self) -> (usize, usize) {
        (self.panel_count_x, self.panel_count_y)
    }

    pub fn panel_width(&self) -> f64 {
        self.panel_width
    }

    pub fn panel_height(&self) -> f64 {
        self.panel_height
    }

    pub fn total_panels(&self) -> usize {
        self.total_panels
    }

    /// Sum of all panel areas, in the unit of the surface squared
    pub fn covered_area(&self) -> f64 {
        self.covered_area
    }

    /// Sum of all panel areas, in square meters
    pub fn covered_area_m2(&self) -> f64 {
        self.surface.unit().to_square_meters(self.covered_area)
    }

    /// Area of the entire surface, in the unit of the surface squared
    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Covered area relative to the total surface area
    pub fn coverage_ratio(&self) -> f64 {
        self.coverage_ratio
    }

    /// Score assigned by the strategy that selected this layout
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Rectangles of all panels in surface coordinates (origin in a corner of the surface),
    /// row by row along the y-axis.
    pub fn panel_rects(&self) -> impl Iterator<Item = Rect> + Clone + '_ {
        let offset = self.spacing.perimeter_gap();
        let pitch_x = self.panel_width + self.spacing.panel_gap();
        let pitch_y = self.panel_height + self.spacing.panel_gap();
        iproduct!(0..self.panel_count_y, 0..self.panel_count_x).map(move |(j, i)| {
            let x_min = offset + i as f64 * pitch_x;
            let y_min = offset + j as f64 * pitch_y;
            Rect {
                x_min,
                y_min,
                x_max: x_min + self.panel_width,
                y_max: y_min + self.panel_height,
            }
        })
    }
}

impl Display for LayoutResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} grid of {} panels, {:.1} x {:.1} {}, coverage {:.2}%",
            self.panel_count_x,
            self.panel_count_y,
            self.total_panels,
            self.panel_width,
            self.panel_height,
            self.surface.unit().symbol(),
            self.coverage_ratio * 100.0
        )
    }
}

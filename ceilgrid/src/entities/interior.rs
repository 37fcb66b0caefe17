use std::fmt::{Display, Formatter};

use crate::entities::{SpacingSpec, SurfaceDimensions};

/// One of the two axes of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along the length of the surface, panels are counted by `panel_count_x`
    X,
    /// Along the width of the surface, panels are counted by `panel_count_y`
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "length (x)"),
            Axis::Y => write!(f, "width (y)"),
        }
    }
}

/// The usable interior of a surface: what remains inside the perimeter gap.
/// Panels and the gaps between them share this space along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interior {
    pub available_x: f64,
    pub available_y: f64,
    pub panel_gap: f64,
}

impl Interior {
    pub fn new(surface: &SurfaceDimensions, spacing: &SpacingSpec) -> Self {
        Self {
            available_x: surface.length() - 2.0 * spacing.perimeter_gap(),
            available_y: surface.width() - 2.0 * spacing.perimeter_gap(),
            panel_gap: spacing.panel_gap(),
        }
    }

    pub fn available(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.available_x,
            Axis::Y => self.available_y,
        }
    }

    pub fn area(&self) -> f64 {
        self.available_x * self.available_y
    }

    /// Size of each panel when `count` panels and the `count - 1` gaps between them share the axis.
    /// Can be zero or negative when the gaps alone consume the available space.
    pub fn panel_size(&self, axis: Axis, count: usize) -> f64 {
        debug_assert!(count > 0);
        let n = count as f64;
        (self.available(axis) - (n - 1.0) * self.panel_gap) / n
    }

    /// Space taken along an axis by `count` panels of `size` and the gaps between them.
    pub fn occupied_span(&self, size: f64, count: usize) -> f64 {
        let n = count as f64;
        n * size + (n - 1.0).max(0.0) * self.panel_gap
    }

    /// Smallest panel count along `axis` for which the panels do not exceed `max_dimension`.
    ///
    /// Follows from `(available - (n - 1) * gap) / n <= max`, i.e. `n >= (available + gap) / (max + gap)`.
    pub fn min_count(&self, axis: Axis, max_dimension: f64) -> usize {
        let ratio = (self.available(axis) + self.panel_gap) / (max_dimension + self.panel_gap);
        //slack for ratios which are integral up to rounding
        let n = (ratio - 1e-9).ceil();
        if n.is_finite() && n >= 1.0 {
            n as usize
        } else {
            1
        }
    }
}

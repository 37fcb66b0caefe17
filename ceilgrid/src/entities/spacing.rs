/// Reserved empty space on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingSpec {
    perimeter_gap: f64,
    panel_gap: f64,
}

impl SpacingSpec {
    pub fn new(perimeter_gap: f64, panel_gap: f64) -> Self {
        Self {
            perimeter_gap,
            panel_gap,
        }
    }

    /// Space kept free along all four edges of the surface
    pub fn perimeter_gap(&self) -> f64 {
        self.perimeter_gap
    }

    /// Space kept free between two adjacent panels
    pub fn panel_gap(&self) -> f64 {
        self.panel_gap
    }
}

use itertools::{Itertools, iproduct};
use log::debug;

use crate::entities::{Axis, Interior, LayoutCandidate};
use crate::search::SearchWindow;
use crate::util::FIT_TOLERANCE;

/// Enumerates the candidate grids of an interior within a [`SearchWindow`].
///
/// The panel size along one axis only depends on the panel count along that same axis,
/// so feasibility is decided per axis and the candidates are the product of the feasible counts.
#[derive(Clone, Copy, Debug)]
pub struct CandidateGenerator {
    interior: Interior,
    window: SearchWindow,
}

impl CandidateGenerator {
    pub fn new(interior: Interior, window: SearchWindow) -> Self {
        Self { interior, window }
    }

    pub fn interior(&self) -> &Interior {
        &self.interior
    }

    /// Panel counts within the window for which the panels along `axis` have a positive size
    /// not exceeding the maximum panel dimension.
    pub fn feasible_counts(&self, axis: Axis) -> Vec<usize> {
        let max_dimension = self.window.max_panel_dimension;
        self.window
            .axis_range(&self.interior, axis)
            .filter(|&n| {
                let size = self.interior.panel_size(axis, n);
                size > 0.0 && size <= max_dimension + FIT_TOLERANCE
            })
            .collect_vec()
    }

    /// The first axis along which no count is feasible, if any.
    /// Whenever this is `Some`, [`generate`](Self::generate) produces no candidates.
    pub fn infeasible_axis(&self) -> Option<Axis> {
        [Axis::X, Axis::Y]
            .into_iter()
            .find(|&axis| self.feasible_counts(axis).is_empty())
    }

    /// All feasible candidates in the window, ordered by `panel_count_x`, then `panel_count_y`.
    /// None of them carry a score yet.
    pub fn generate(&self) -> Vec<LayoutCandidate> {
        let counts_x = self.feasible_counts(Axis::X);
        let counts_y = self.feasible_counts(Axis::Y);
        let max_dimension = self.window.max_panel_dimension;

        let candidates = iproduct!(counts_x.iter(), counts_y.iter())
            .filter_map(|(&nx, &ny)| LayoutCandidate::new(&self.interior, nx, ny, max_dimension))
            .collect_vec();

        debug!(
            "[GEN] {} candidates ({} x {} feasible counts, window of {} pairs) for interior {:.1} x {:.1}",
            candidates.len(),
            counts_x.len(),
            counts_y.len(),
            self.window.pair_count(),
            self.interior.available_x,
            self.interior.available_y
        );
        candidates
    }
}

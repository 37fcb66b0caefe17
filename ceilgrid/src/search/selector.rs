use std::cmp::Ordering;

use float_cmp::approx_eq;
use log::{debug, info};
use ordered_float::OrderedFloat;

use crate::entities::{Axis, Interior, LayoutCandidate, LayoutResult, SpacingSpec, SurfaceDimensions};
use crate::error::{GridError, GridResult};
use crate::search::{CandidateGenerator, LayoutScorer, SearchWindow, Strategy};
use crate::util::{GridConfig, SCORE_EPSILON, assertions};

/// Searches the panel grid of a single surface.
///
/// Every call is a pure function of the inputs given at construction:
/// identical inputs always select the identical layout.
#[derive(Clone, Copy, Debug)]
pub struct LayoutSelector {
    surface: SurfaceDimensions,
    spacing: SpacingSpec,
    config: GridConfig,
    scorer: LayoutScorer,
    generator: CandidateGenerator,
}

impl LayoutSelector {
    /// Assumes the inputs passed [`validation`](crate::validation).
    /// The millimeter lengths of `config` are converted to the unit of `surface`.
    pub fn new(
        surface: SurfaceDimensions,
        spacing: SpacingSpec,
        strategy: Strategy,
        target_aspect_ratio: f64,
        config: GridConfig,
    ) -> Self {
        let interior = Interior::new(&surface, &spacing);
        let config = config.for_unit(surface.unit());
        Self {
            surface,
            spacing,
            config,
            scorer: LayoutScorer::new(strategy, target_aspect_ratio, &config),
            generator: CandidateGenerator::new(interior, SearchWindow::from_config(&config)),
        }
    }

    /// Selects the best scoring layout.
    pub fn select(&self) -> GridResult<LayoutResult> {
        let candidates = self.scored_candidates()?;
        let n_candidates = candidates.len();
        let best = select_best(candidates, self.scorer.target_aspect_ratio)
            .ok_or_else(|| self.impossible())?;

        let layout = self.to_layout(&best);
        info!(
            "[SEL] selected {} out of {} candidates (strategy: {}, score: {:.5})",
            layout,
            n_candidates,
            self.scorer.strategy,
            layout.score()
        );
        Ok(layout)
    }

    /// The best `n` layouts, in order of preference. The first one equals the result of [`select`](Self::select).
    pub fn rank(&self, n: usize) -> GridResult<Vec<LayoutResult>> {
        let mut remaining = self.scored_candidates()?;
        let target_aspect_ratio = self.scorer.target_aspect_ratio;

        let mut ranked = vec![];
        while ranked.len() < n {
            let Some((idx, _)) = remaining
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| compare_candidates(a, b, target_aspect_ratio))
            else {
                break;
            };
            let best = remaining.swap_remove(idx);
            ranked.push(self.to_layout(&best));
        }
        debug!("[SEL] ranked {} layouts", ranked.len());
        Ok(ranked)
    }

    /// Scores a grid with the given counts, regardless of the search window.
    /// Fails if the panels would not have a positive size within the maximum panel dimension.
    pub fn evaluate_fixed(&self, panel_count_x: usize, panel_count_y: usize) -> GridResult<LayoutResult> {
        let interior = self.generator.interior();
        let max_dimension = self.config.max_panel_dimension;

        let candidate = LayoutCandidate::new(interior, panel_count_x, panel_count_y, max_dimension)
            .ok_or_else(|| {
                let reason = match panel_count_x == 0 || panel_count_y == 0 {
                    true => format!("the fixed {panel_count_x}x{panel_count_y} grid contains no panels"),
                    false => format!(
                        "the fixed {}x{} grid yields panels of {:.1} x {:.1}, which are not within (0, {}]",
                        panel_count_x,
                        panel_count_y,
                        interior.panel_size(Axis::X, panel_count_x),
                        interior.panel_size(Axis::Y, panel_count_y),
                        max_dimension
                    ),
                };
                GridError::LayoutImpossible { reason }
            })?;
        let score = self.scorer.score(&candidate, interior);
        let layout = self.to_layout(&candidate.with_score(score));
        info!("[SEL] evaluated fixed grid: {} (score: {:.5})", layout, score);
        Ok(layout)
    }

    fn scored_candidates(&self) -> GridResult<Vec<LayoutCandidate>> {
        let interior = self.generator.interior();
        let candidates = self
            .generator
            .generate()
            .into_iter()
            .map(|c| c.with_score(self.scorer.score(&c, interior)))
            .collect::<Vec<_>>();

        match candidates.is_empty() {
            true => Err(self.impossible()),
            false => Ok(candidates),
        }
    }

    fn to_layout(&self, candidate: &LayoutCandidate) -> LayoutResult {
        let score = candidate.score.unwrap_or_else(|| {
            self.scorer.score(candidate, self.generator.interior())
        });
        let layout = LayoutResult::from_scored(&self.surface, &self.spacing, candidate, score);
        debug_assert!(assertions::layout_respects_constraints(
            &layout,
            self.config.max_panel_dimension
        ));
        layout
    }

    fn impossible(&self) -> GridError {
        let interior = self.generator.interior();
        let max_dimension = self.config.max_panel_dimension;
        let axis = self.generator.infeasible_axis().unwrap_or(Axis::X);
        GridError::LayoutImpossible {
            reason: format!(
                "no panel count along the {} keeps panels at a positive size of at most {} (available: {:.1}, panel gap: {:.1})",
                axis,
                max_dimension,
                interior.available(axis),
                interior.panel_gap
            ),
        }
    }
}

/// Picks the best of a set of scored candidates, `None` if the set is empty.
///
/// Scores within [`SCORE_EPSILON`] of each other are considered equal, ties are broken by
/// fewer panels, then the smaller deviation from `target_aspect_ratio`,
/// then the smaller `panel_count_x` and finally the smaller `panel_count_y`.
pub fn select_best(
    candidates: impl IntoIterator<Item = LayoutCandidate>,
    target_aspect_ratio: f64,
) -> Option<LayoutCandidate> {
    candidates
        .into_iter()
        .max_by(|a, b| compare_candidates(a, b, target_aspect_ratio))
}

/// [`Ordering::Greater`] if `a` is preferred over `b`.
fn compare_candidates(a: &LayoutCandidate, b: &LayoutCandidate, target_aspect_ratio: f64) -> Ordering {
    let score_a = a.score.unwrap_or(f64::NEG_INFINITY);
    let score_b = b.score.unwrap_or(f64::NEG_INFINITY);

    if !approx_eq!(f64, score_a, score_b, epsilon = SCORE_EPSILON) {
        return OrderedFloat(score_a).cmp(&OrderedFloat(score_b));
    }
    //reversed: smaller is preferred for all tie-breaks
    b.total_panels()
        .cmp(&a.total_panels())
        .then_with(|| {
            let err_a = OrderedFloat(a.aspect_error(target_aspect_ratio));
            let err_b = OrderedFloat(b.aspect_error(target_aspect_ratio));
            err_b.cmp(&err_a)
        })
        .then_with(|| b.panel_count_x.cmp(&a.panel_count_x))
        .then_with(|| b.panel_count_y.cmp(&a.panel_count_y))
}

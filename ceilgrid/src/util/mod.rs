/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::GridConfig;
#[doc(inline)]
pub use config::PanelCountBand;
#[doc(inline)]
pub use config::ScoringWeights;
#[doc(inline)]
pub use fpa::FPA;

/// Hard ceiling on the width and height of a single panel, in millimeters
pub const MAX_PANEL_DIMENSION: f64 = 2400.0;

/// Upper bound on a sane surface dimension, in millimeters
pub const MAX_SURFACE_DIMENSION: f64 = 100_000.0;

/// Upper bound on the number of panel counts examined along a single axis
pub const MAX_WINDOW_SPAN: usize = 256;

/// Absolute tolerance on lengths when checking whether panels fit
pub const FIT_TOLERANCE: f64 = 1e-6;

/// Scores closer than this are considered equal and fall through to the tie-breaks
pub const SCORE_EPSILON: f64 = 1e-9;

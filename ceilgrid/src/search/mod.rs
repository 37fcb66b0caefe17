//! The search for the best panel grid: candidates are enumerated inside a bounded [`SearchWindow`],
//! scored by a [`LayoutScorer`] and compared by the [`LayoutSelector`].

/// Enumeration of feasible candidate grids
pub mod generator;

/// Scoring of candidates according to a [`Strategy`]
pub mod scorer;

/// Selection of the best candidate, including tie-breaking
pub mod selector;

mod window;

#[doc(inline)]
pub use generator::CandidateGenerator;
#[doc(inline)]
pub use scorer::LayoutScorer;
#[doc(inline)]
pub use scorer::Strategy;
#[doc(inline)]
pub use selector::LayoutSelector;
#[doc(inline)]
pub use window::SearchWindow;

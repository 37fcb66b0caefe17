//! Partitioning engine for rectangular ceilings.
//!
//! A surface is subdivided into a grid of equal rectangular panels which respect a perimeter gap,
//! a gap between adjacent panels and a maximum panel dimension.
//! The grid is chosen by a bounded search over candidate panel counts, scored by a
//! [`Strategy`](search::Strategy), after which the cost of the chosen layout is estimated.
//!
//! The calculation is a pure function chain:
//! [`validation`] → [`search::generator`] → [`search::scorer`] → [`search::selector`] → [`cost`].
//! [`planner::plan`] runs the whole chain for a single [`PlanRequest`](planner::PlanRequest).

/// Entities modelling the surface, its spacing, the material and the resulting layout
pub mod entities;

/// Axis-aligned geometric primitives
pub mod geometry;

/// Checks on the inputs of a calculation, performed before any search work
pub mod validation;

/// Generation, scoring and selection of candidate panel grids
pub mod search;

/// Material, waste and labor cost of a selected layout
pub mod cost;

/// The end-to-end calculation for a single request
pub mod planner;

/// External (serializable) representations of inputs and results
pub mod io;

/// Helper functions and configuration which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::GridError;
#[doc(inline)]
pub use error::GridResult;

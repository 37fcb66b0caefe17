use thiserror::Error;

/// Errors raised by a calculation.
/// Every variant identifies the offending value and the constraint it violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// A surface dimension is non-positive, not finite or absurdly large.
    #[error("invalid dimension '{name}': {value} ({constraint})")]
    InvalidDimension {
        name: &'static str,
        value: f64,
        constraint: String,
    },

    /// A gap is negative, or the gaps leave no usable interior space.
    #[error("invalid spacing '{name}': {value} ({constraint})")]
    InvalidSpacing {
        name: &'static str,
        value: f64,
        constraint: String,
    },

    /// An unrecognized strategy name was requested.
    #[error("unknown layout strategy '{0}' (expected 'balanced' or 'minimize_seams')")]
    UnknownStrategy(String),

    /// No candidate grid satisfies the constraints for the given inputs.
    #[error("no feasible panel layout: {reason}")]
    LayoutImpossible { reason: String },

    /// A waste factor, labor multiplier or material price is out of range.
    #[error("invalid cost parameter '{name}': {value} ({constraint})")]
    InvalidCostParameter {
        name: &'static str,
        value: f64,
        constraint: String,
    },

    /// A tunable of the search or scoring configuration is out of range.
    #[error("invalid configuration '{name}': {value} ({constraint})")]
    InvalidConfig {
        name: &'static str,
        value: f64,
        constraint: String,
    },
}

/// Result type alias for all fallible operations of the engine.
pub type GridResult<T> = Result<T, GridError>;

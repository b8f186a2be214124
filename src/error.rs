//! Error types for simplification.

use thiserror::Error;

/// Errors that can occur while simplifying a polyline.
///
/// Every check runs before any simplification work starts, so an error
/// never comes with partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// A tolerance parameter is negative, NaN, or infinite.
    #[error("invalid parameter `{name}`: {value} (must be finite and non-negative)")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value, widened to `f64` for reporting.
        value: f64,
    },

    /// The point sequence is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Ways in which a point sequence can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// A point has a different number of coordinates than the first point.
    #[error("point {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        /// Index of the offending point.
        index: usize,
        /// Dimension of the first point.
        expected: usize,
        /// Dimension of the offending point.
        found: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate on axis {axis}")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
        /// Axis of the offending coordinate.
        axis: usize,
    },

    /// Points carry no coordinates at all.
    #[error("points must have at least one coordinate")]
    ZeroDimension,
}

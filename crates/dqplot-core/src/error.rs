//! Error types for dqplot-rs.

use std::fmt;

use thiserror::Error;

/// The category a dual quaternion argument was expected to belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DqCategory {
    /// A unit dual quaternion (rigid transformation).
    Unit,
    /// A pure quaternion (3D point or direction, no dual part).
    PureQuaternion,
    /// A Plücker line.
    Line,
    /// A plane (unit normal plus signed offset).
    Plane,
}

impl fmt::Display for DqCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DqCategory::Unit => "unit dual quaternion",
            DqCategory::PureQuaternion => "pure quaternion",
            DqCategory::Line => "line",
            DqCategory::Plane => "plane",
        };
        f.write_str(text)
    }
}

/// The main error type for dqplot-rs operations.
#[derive(Error, Debug)]
pub enum DqPlotError {
    /// A dual quaternion argument is not of the required category.
    #[error("the input {argument} = {value} is not a {expected}")]
    Validation {
        argument: &'static str,
        expected: DqCategory,
        value: String,
    },

    /// Grids that must share a shape do not.
    #[error("shapes of arguments must be the same: expected {expected:?}, got {actual:?}")]
    Shape {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A joint vector does not match the model's degrees of freedom.
    #[error("joint vector has {actual} entries but the model has {expected} degrees of freedom")]
    Dimension { expected: usize, actual: usize },

    /// A joint index past the end of the chain.
    #[error("joint index {index} is out of range for a chain with {dim} joints")]
    JointIndexOutOfRange { index: usize, dim: usize },

    /// The object cannot be plotted.
    #[error("plot not implemented for {0}")]
    UnsupportedType(String),

    /// A scalar or count parameter is out of range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for dqplot-rs operations.
pub type Result<T> = std::result::Result<T, DqPlotError>;

/// Fails with [`DqPlotError::InvalidParameter`] unless `value` is finite and positive.
///
/// # Errors
///
/// Returns [`DqPlotError::InvalidParameter`] naming `name`.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DqPlotError::InvalidParameter {
            name,
            reason: format!("must be positive, got {value}"),
        })
    }
}

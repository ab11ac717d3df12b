//! Error types.
//!
//! Curve computations never fail: degenerate input gives an empty or otherwise
//! defined result. Errors only come from the configuration layer.

use thiserror::Error;

/// Result type used across the crate
pub type BezierResult<T> = Result<T, BezierError>;

#[derive(Debug, Error)]
pub enum BezierError {
    /// A configuration value is out of its valid range
    #[error("invalid spline configuration: {0}")]
    InvalidConfig(String),

    /// The configuration could not be parsed
    #[error("failed to parse spline configuration: {0}")]
    Json(#[from] serde_json::Error),
}

//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::R3;

/// Top-level error type for the crate.
///
/// Every variant is a construction-time configuration error. Field sampling
/// itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmFieldError {
    /// Raised when a current element direction is neither `IN` nor `OUT`.
    #[error("only IN and OUT are supported, got direction {}", components(.0))]
    InvalidOrientation(R3),
    /// Raised when a bar magnet's dimensions are inconsistent.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Raised when a field or sampling configuration is out of range.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

fn components(v: &R3) -> String {
    format!("({}, {}, {})", v.x, v.y, v.z)
}

//! Tunables shared by the field samplers.
//!
//! All magnitudes in this crate are unitless, so there are no physical constants
//! here; Coulomb's law and the current-element law are evaluated up to a constant.

use crate::math::Scalar;

/// Default squared in-plane distance below which a source contributes nothing.
///
/// A source is suppressed when both `dx²` and `dy²` are at most this value.
pub const DEFAULT_NEAR_FIELD_THRESHOLD: Scalar = 0.05;

/// Number of current elements in each row of a decomposed bar magnet.
pub const BAR_MAGNET_ROW_LEN: usize = 10;

/// Total current elements produced by one bar magnet.
pub const BAR_MAGNET_ELEMENT_COUNT: usize = 2 * BAR_MAGNET_ROW_LEN;

/// Default bar magnet height.
pub const DEFAULT_BAR_MAGNET_HEIGHT: Scalar = 2.0;

/// Default bar magnet width.
pub const DEFAULT_BAR_MAGNET_WIDTH: Scalar = 0.5;

/// Smallest accepted near-field threshold.
///
/// Any unsuppressed source is then at least `sqrt(MIN)` away in the plane, so
/// `r³` stays far above the smallest positive `f64` and samples remain finite.
pub const MIN_NEAR_FIELD_THRESHOLD: Scalar = 1.0e-12;

/// Largest number of points a sampling grid may hold.
pub const MAX_GRID_POINTS: usize = 1 << 24;

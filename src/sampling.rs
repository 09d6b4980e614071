//! Grid sampling of vector fields for arrow-plot renderers.

use log::trace;

use crate::constants::MAX_GRID_POINTS;
use crate::errors::EmFieldError;
use crate::math::{R3, Scalar};

/// Anything that maps a point in space to a field vector.
///
/// Implemented by every field type in this crate and by plain `Fn(R3) -> R3`
/// closures, so a renderer can take either.
pub trait VectorField {
    /// Field vector at `point`.
    fn value_at(&self, point: R3) -> R3;
}

impl<F> VectorField for F
where
    F: Fn(R3) -> R3,
{
    fn value_at(&self, point: R3) -> R3 {
        self(point)
    }
}

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` evenly spaced points on the segment from `start` to `end`, both inclusive.
#[must_use]
pub fn linspace_points(start: R3, end: R3, n: usize) -> Vec<R3> {
    linspace(0.0, 1.0, n)
        .into_iter()
        .map(|t| start + (end - start) * t)
        .collect()
}

/// Rectangular lattice of query points in a plane of constant z.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SamplingGridFields")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingGrid {
    x_range: (Scalar, Scalar),
    y_range: (Scalar, Scalar),
    step: Scalar,
    z: Scalar,
}

impl SamplingGrid {
    /// Creates a grid covering `x_range` × `y_range` at spacing `step`.
    ///
    /// Fails when the grid would hold more than [`MAX_GRID_POINTS`] points.
    pub fn new(x_range: (Scalar, Scalar), y_range: (Scalar, Scalar), step: Scalar) -> Result<Self, EmFieldError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(EmFieldError::InvalidConfig(format!(
                "grid step must be finite and positive, got {step}"
            )));
        }
        for (axis, (lo, hi)) in [("x", x_range), ("y", y_range)] {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(EmFieldError::InvalidConfig(format!(
                    "{axis} range must be finite with min <= max, got [{lo}, {hi}]"
                )));
            }
        }
        let points = axis_count(x_range, step) * axis_count(y_range, step);
        if !points.is_finite() || points > MAX_GRID_POINTS as Scalar {
            return Err(EmFieldError::InvalidConfig(format!(
                "grid of step {step} would hold {points:e} points, limit is {MAX_GRID_POINTS}"
            )));
        }
        Ok(Self {
            x_range,
            y_range,
            step,
            z: 0.0,
        })
    }

    /// Places the grid in the plane `z`.
    #[must_use]
    pub const fn at_depth(mut self, z: Scalar) -> Self {
        self.z = z;
        self
    }

    /// Spacing between neighbouring points.
    #[must_use]
    pub const fn step(&self) -> Scalar {
        self.step
    }

    fn axis_values(&self, range: (Scalar, Scalar)) -> impl Iterator<Item = Scalar> {
        let (lo, step) = (range.0, self.step);
        // Bounded by MAX_GRID_POINTS in `new`.
        let count = axis_count(range, step) as usize;
        (0..count).map(move |i| lo + step * i as Scalar)
    }

    /// Number of points along x and y.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (
            self.axis_values(self.x_range).count(),
            self.axis_values(self.y_range).count(),
        )
    }

    /// All grid points, row by row from the lowest y, x varying fastest.
    #[must_use]
    pub fn points(&self) -> Vec<R3> {
        let xs: Vec<Scalar> = self.axis_values(self.x_range).collect();
        self.axis_values(self.y_range)
            .flat_map(|y| xs.iter().map(move |&x| R3::new(x, y, self.z)))
            .collect()
    }
}

/// Points along one axis, kept as a float so oversized grids can be rejected
/// before any conversion to `usize`.
fn axis_count((lo, hi): (Scalar, Scalar), step: Scalar) -> Scalar {
    // Tolerance keeps `hi` when the span is an exact multiple of `step`.
    ((hi - lo) / step + 1.0e-9).floor() + 1.0
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SamplingGridFields {
    x_range: (Scalar, Scalar),
    y_range: (Scalar, Scalar),
    step: Scalar,
    z: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<SamplingGridFields> for SamplingGrid {
    type Error = EmFieldError;

    fn try_from(fields: SamplingGridFields) -> Result<Self, Self::Error> {
        Ok(Self::new(fields.x_range, fields.y_range, fields.step)?.at_depth(fields.z))
    }
}

impl Default for SamplingGrid {
    fn default() -> Self {
        Self {
            x_range: (-7.0, 7.0),
            y_range: (-4.0, 4.0),
            step: 0.5,
            z: 0.0,
        }
    }
}

/// Field vector evaluated at one grid point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Query point.
    pub point: R3,
    /// Field vector at `point`.
    pub vector: R3,
}

impl FieldSample {
    /// Euclidean length of the field vector.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.vector.norm()
    }
}

/// Evaluates `field` at every point of `grid`.
#[must_use]
pub fn sample_grid<F>(field: &F, grid: &SamplingGrid) -> Vec<FieldSample>
where
    F: VectorField + ?Sized,
{
    let samples: Vec<FieldSample> = grid
        .points()
        .into_iter()
        .map(|point| FieldSample {
            point,
            vector: field.value_at(point),
        })
        .collect();
    trace!("sampled {} grid point(s) at step {}", samples.len(), grid.step);
    samples
}

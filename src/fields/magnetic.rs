use log::debug;

use crate::config::FieldConfig;
use crate::errors::EmFieldError;
use crate::math::{IN, OUT, R3, Scalar};
use crate::sampling::VectorField;

use super::near_field::NearFieldRule;

/// Direction of a current element relative to the viewing plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Current flowing toward the viewer (+z).
    #[default]
    Out,
    /// Current flowing away from the viewer (-z).
    In,
}

impl Orientation {
    /// Unit direction vector.
    #[must_use]
    pub const fn direction(self) -> R3 {
        match self {
            Self::Out => OUT,
            Self::In => IN,
        }
    }

    /// Factor applied to a magnitude supplied for this orientation.
    #[must_use]
    pub const fn sign(self) -> Scalar {
        match self {
            Self::Out => 1.0,
            Self::In => -1.0,
        }
    }
}

impl TryFrom<R3> for Orientation {
    type Error = EmFieldError;

    fn try_from(direction: R3) -> Result<Self, Self::Error> {
        if direction == OUT {
            Ok(Self::Out)
        } else if direction == IN {
            Ok(Self::In)
        } else {
            Err(EmFieldError::InvalidOrientation(direction))
        }
    }
}

/// Point current element perpendicular to the viewing plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentElement {
    /// Current position. May be moved between field queries.
    pub position: R3,
    magnitude: Scalar,
    orientation: Orientation,
}

impl CurrentElement {
    /// Creates an element carrying `magnitude` in direction `orientation`.
    ///
    /// `Orientation::In` negates the stored magnitude.
    #[must_use]
    pub fn new(position: R3, magnitude: Scalar, orientation: Orientation) -> Self {
        Self {
            position,
            magnitude: magnitude * orientation.sign(),
            orientation,
        }
    }

    /// Creates an element from a raw direction vector, which must be `IN` or `OUT`.
    pub fn with_direction(position: R3, magnitude: Scalar, direction: R3) -> Result<Self, EmFieldError> {
        let orientation = Orientation::try_from(direction)?;
        Ok(Self::new(position, magnitude, orientation))
    }

    /// Effective signed magnitude used by the field law.
    #[must_use]
    pub const fn magnitude(&self) -> Scalar {
        self.magnitude
    }

    /// Orientation given at construction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Places the element at `position`.
    pub fn move_to(&mut self, position: R3) -> &mut Self {
        self.position = position;
        self
    }

    /// Translates the element by `offset`.
    pub fn shift(&mut self, offset: R3) -> &mut Self {
        self.position += offset;
        self
    }
}

/// Magnetic field at `point` from point current elements.
///
/// Each element contributes `magnitude * (-dy, dx, 0) / r³`, i.e. a vector
/// perpendicular to the in-plane offset, decaying with the cube of the full 3D
/// distance.
#[must_use]
pub fn magnetic_field_from_currents(point: R3, currents: &[CurrentElement], rule: &NearFieldRule) -> R3 {
    let mut b = R3::zeros();
    for c in currents {
        let r_vec = point - c.position;
        if rule.suppresses(&r_vec) {
            continue;
        }
        let r = r_vec.norm();
        b += R3::new(-r_vec.y, r_vec.x, 0.0) * (c.magnitude / (r * r * r));
    }
    b
}

/// Magnetic field of a set of current elements.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct CurrentMagneticField {
    currents: Vec<CurrentElement>,
    config: FieldConfig,
}

impl CurrentMagneticField {
    /// Builds a field from `currents` using the default configuration.
    #[must_use]
    pub fn new(currents: impl IntoIterator<Item = CurrentElement>) -> Self {
        Self::with_config(currents, FieldConfig::default())
    }

    /// Builds a field from `currents` using `config`.
    #[must_use]
    pub fn with_config(currents: impl IntoIterator<Item = CurrentElement>, config: FieldConfig) -> Self {
        let currents: Vec<_> = currents.into_iter().collect();
        debug!(
            "current magnetic field over {} element(s), near-field threshold {}",
            currents.len(),
            config.near_field_threshold()
        );
        Self { currents, config }
    }

    /// Source elements.
    #[must_use]
    pub fn currents(&self) -> &[CurrentElement] {
        &self.currents
    }

    /// Mutable access to the sources, for moving elements between queries.
    pub fn currents_mut(&mut self) -> &mut [CurrentElement] {
        &mut self.currents
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Field vector at `point`.
    #[must_use]
    pub fn field_at(&self, point: R3) -> R3 {
        magnetic_field_from_currents(point, &self.currents, &self.config.near_field())
    }
}

impl VectorField for CurrentMagneticField {
    fn value_at(&self, point: R3) -> R3 {
        self.field_at(point)
    }
}

//! Bar magnets modelled as an equivalent current loop.
//!
//! A magnet is not a source by itself. It decomposes into two rows of point
//! current elements running along its long axis, one row on each side, with
//! opposite signs. Their superposed field is the magnet's field.

use log::debug;
use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_2;

use crate::config::FieldConfig;
use crate::constants::{
    BAR_MAGNET_ELEMENT_COUNT, BAR_MAGNET_ROW_LEN, DEFAULT_BAR_MAGNET_HEIGHT, DEFAULT_BAR_MAGNET_WIDTH,
};
use crate::errors::EmFieldError;
use crate::math::{angle_of_vector, rotate_about_z, DOWN, R3, Scalar, UP};
use crate::sampling::{linspace_points, VectorField};

use super::magnetic::{CurrentElement, CurrentMagneticField, Orientation};

/// Bar magnet defined by its pole positions and body dimensions.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BarMagnetFields")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarMagnet {
    north: R3,
    south: R3,
    height: Scalar,
    width: Scalar,
}

impl BarMagnet {
    /// Creates a magnet. `width` must be strictly less than `height` and the poles
    /// must not coincide.
    pub fn new(north: R3, south: R3, height: Scalar, width: Scalar) -> Result<Self, EmFieldError> {
        if width.partial_cmp(&height) != Some(Ordering::Less) {
            return Err(EmFieldError::InvalidGeometry(format!(
                "bar magnet must be taller than its width (height {height}, width {width})"
            )));
        }
        if (north - south).norm() == 0.0 {
            return Err(EmFieldError::InvalidGeometry(
                "north and south poles coincide".to_owned(),
            ));
        }
        Ok(Self {
            north,
            south,
            height,
            width,
        })
    }

    /// North pole position.
    #[must_use]
    pub const fn north(&self) -> R3 {
        self.north
    }

    /// South pole position.
    #[must_use]
    pub const fn south(&self) -> R3 {
        self.south
    }

    /// Body height.
    #[must_use]
    pub const fn height(&self) -> Scalar {
        self.height
    }

    /// Body width; the two current rows sit `width / 2` either side of the axis.
    #[must_use]
    pub const fn width(&self) -> Scalar {
        self.width
    }

    /// Distance between the poles.
    #[must_use]
    pub fn length(&self) -> Scalar {
        (self.north - self.south).norm()
    }

    /// Midpoint between the poles.
    #[must_use]
    pub fn center(&self) -> R3 {
        (self.north + self.south) * 0.5
    }

    /// Vector from the south pole to the north pole.
    #[must_use]
    pub fn south_to_north(&self) -> R3 {
        self.north - self.south
    }

    /// Translates the magnet by `offset`.
    pub fn shift(&mut self, offset: R3) -> &mut Self {
        self.north += offset;
        self.south += offset;
        self
    }

    /// Moves the magnet so that its center sits at `center`.
    pub fn move_to(&mut self, center: R3) -> &mut Self {
        let offset = center - self.center();
        self.shift(offset)
    }

    /// Rotates the magnet by `angle` radians about its center in the viewing plane.
    pub fn rotate(&mut self, angle: Scalar) -> &mut Self {
        let center = self.center();
        self.north = rotate_about_z(self.north, center, angle);
        self.south = rotate_about_z(self.south, center, angle);
        self
    }

    /// Decomposes the magnet into its equivalent current elements.
    ///
    /// The first row lies at `x = +width/2` in the magnet frame and carries -1,
    /// the second at `x = -width/2` carries +1. Both run from `+length/2` to
    /// `-length/2` along the local y axis, which is then turned onto the
    /// south-to-north direction.
    #[must_use]
    pub fn current_elements(&self) -> [CurrentElement; BAR_MAGNET_ELEMENT_COUNT] {
        let half_width = self.width / 2.0;
        let half_length = self.length() / 2.0;
        let angle = -FRAC_PI_2 + angle_of_vector(&self.south_to_north());
        let center = self.center();
        let row = |x: Scalar| {
            linspace_points(
                R3::new(x, half_length, 0.0),
                R3::new(x, -half_length, 0.0),
                BAR_MAGNET_ROW_LEN,
            )
        };
        let right = row(half_width);
        let left = row(-half_width);

        std::array::from_fn(|i| {
            let (local, magnitude) = if i < BAR_MAGNET_ROW_LEN {
                (right[i], -1.0)
            } else {
                (left[i - BAR_MAGNET_ROW_LEN], 1.0)
            };
            let position = rotate_about_z(local, R3::zeros(), angle) + center;
            CurrentElement::new(position, magnitude, Orientation::Out)
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BarMagnetFields {
    north: R3,
    south: R3,
    height: Scalar,
    width: Scalar,
}

#[cfg(feature = "serde")]
impl TryFrom<BarMagnetFields> for BarMagnet {
    type Error = EmFieldError;

    fn try_from(fields: BarMagnetFields) -> Result<Self, Self::Error> {
        Self::new(fields.north, fields.south, fields.height, fields.width)
    }
}

impl Default for BarMagnet {
    fn default() -> Self {
        Self {
            north: UP,
            south: DOWN,
            height: DEFAULT_BAR_MAGNET_HEIGHT,
            width: DEFAULT_BAR_MAGNET_WIDTH,
        }
    }
}

/// Magnetic field of one or more bar magnets.
///
/// The magnets are decomposed when the field is built; moving a magnet
/// afterwards requires building a new field.
#[derive(Debug, Clone)]
pub struct BarMagneticField {
    currents: CurrentMagneticField,
}

impl BarMagneticField {
    /// Builds the field of `magnets` using the default configuration.
    #[must_use]
    pub fn new(magnets: &[BarMagnet]) -> Self {
        Self::with_config(magnets, FieldConfig::default())
    }

    /// Builds the field of `magnets` using `config`.
    #[must_use]
    pub fn with_config(magnets: &[BarMagnet], config: FieldConfig) -> Self {
        let currents: Vec<CurrentElement> = magnets.iter().flat_map(BarMagnet::current_elements).collect();
        debug!(
            "decomposed {} bar magnet(s) into {} current element(s)",
            magnets.len(),
            currents.len()
        );
        Self {
            currents: CurrentMagneticField::with_config(currents, config),
        }
    }

    /// Current elements the magnets were decomposed into.
    #[must_use]
    pub fn currents(&self) -> &[CurrentElement] {
        self.currents.currents()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FieldConfig {
        self.currents.config()
    }

    /// Field vector at `point`.
    #[must_use]
    pub fn field_at(&self, point: R3) -> R3 {
        self.currents.field_at(point)
    }
}

impl VectorField for BarMagneticField {
    fn value_at(&self, point: R3) -> R3 {
        self.field_at(point)
    }
}

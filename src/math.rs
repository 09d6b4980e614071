//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{Rotation3, Vector3};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Unit vector pointing out of the viewing plane (+z).
pub const OUT: R3 = R3::new(0.0, 0.0, 1.0);
/// Unit vector pointing into the viewing plane (-z).
pub const IN: R3 = R3::new(0.0, 0.0, -1.0);
/// Unit vector along +y.
pub const UP: R3 = R3::new(0.0, 1.0, 0.0);
/// Unit vector along -y.
pub const DOWN: R3 = R3::new(0.0, -1.0, 0.0);

/// Angle of the in-plane projection of `v`, measured counter-clockwise from +x.
#[must_use]
pub fn angle_of_vector(v: &R3) -> Scalar {
    v.y.atan2(v.x)
}

/// Rotates `point` by `angle` radians about the z axis through `about`.
#[must_use]
pub fn rotate_about_z(point: R3, about: R3, angle: Scalar) -> R3 {
    let rotation = Rotation3::from_axis_angle(&R3::z_axis(), angle);
    about + rotation * (point - about)
}

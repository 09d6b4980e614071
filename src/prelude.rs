//! Convenience re-exports for building field visualizations.

pub use crate::config::FieldConfig;
pub use crate::constants::*;
pub use crate::errors::EmFieldError;
pub use crate::fields::{
    electric_field_from_point_charges, magnetic_field_from_currents, BarMagnet, BarMagneticField,
    CurrentElement, CurrentMagneticField, ElectricField, ForceVector, NearFieldRule, Orientation,
    PointCharge, Polarity,
};
pub use crate::io::{write_vtk_header, write_vtk_vector_field};
pub use crate::math::{angle_of_vector, rotate_about_z, DOWN, IN, OUT, R3, Scalar, UP};
pub use crate::sampling::{linspace, linspace_points, sample_grid, FieldSample, SamplingGrid, VectorField};

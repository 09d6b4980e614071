//! Point-source field samplers.

mod bar_magnet;
mod electrostatic;
mod magnetic;
mod near_field;

pub use bar_magnet::{BarMagnet, BarMagneticField};
pub use electrostatic::{
    electric_field_from_point_charges, ElectricField, ForceVector, PointCharge, Polarity,
};
pub use magnetic::{magnetic_field_from_currents, CurrentElement, CurrentMagneticField, Orientation};
pub use near_field::NearFieldRule;

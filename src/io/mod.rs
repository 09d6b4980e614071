//! I/O helpers for exporting sampled field data.

pub mod vtk;

pub use vtk::*;

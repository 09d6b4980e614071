#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Default tunables for the field samplers.
pub mod constants;
/// Shared mathematical utilities (vectors, rotations).
pub mod math;
/// Field evaluation settings.
pub mod config;
/// Point charges, current elements, bar magnets and their fields.
pub mod fields;
/// Grid sampling helpers for arrow-plot renderers.
pub mod sampling;
/// Export of sampled fields.
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

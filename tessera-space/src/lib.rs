//! Tessera Space Crate
//!
//! Axis conventions and coordinate-system conversion for mesh ingestion.
//! A [`CoordinateSystem3D`] names which axis each physical direction
//! (right, up, forward) occupies; a [`SpaceConverter`] remaps vectors
//! between two such conventions and reports whether the remapping flips
//! handedness.

pub mod convert;
pub mod system;

pub use convert::SpaceConverter;
pub use system::{Axis, AxisLine, CoordinateSystem3D, Sign, SpaceDirection};

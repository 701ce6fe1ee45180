//! Tessera Mesh Crate
//!
//! Mesh ingestion core: consumes raw polygon-mesh data from an external
//! parser, remaps positions and normals into a target coordinate
//! convention, fan-triangulates faces, deduplicates vertices, and emits
//! a flat, GPU-ready vertex/index pair with winding corrected across
//! handedness changes.
//!
//! Triangulation is exact for convex planar faces only. Concave or
//! self-intersecting faces produce a structurally valid but visually
//! wrong mesh; see [`MeshBuilder`].

pub mod builder;
pub mod error;
pub mod model;
pub mod obj;
pub mod raw;
pub mod vertex;

pub use builder::MeshBuilder;
pub use error::LoadError;
pub use model::Model;
pub use raw::{FaceCorner, RawMesh, RawShape};
pub use vertex::Vertex;

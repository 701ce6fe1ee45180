//! Turns raw per-face mesh data into a deduplicated, indexed model.

use crate::model::Model;
use crate::raw::{FaceCorner, RawMesh};
use crate::vertex::{Vertex, VertexKey};
use glam::{Vec2, Vec3};
use std::collections::HashMap;
use std::mem;
use tessera_space::{CoordinateSystem3D, SpaceConverter};
use tracing::{debug, warn};

// Any non-trivial mesh has at least a few dozen vertices; start the
// working buffers with room for them.
const VERTEX_CAPACITY: usize = 64;

/// Builds [`Model`]s from [`RawMesh`] data.
///
/// A builder owns one [`SpaceConverter`] for its (source, target)
/// convention pair and a set of working buffers that are reused across
/// builds. Each build runs to completion and hands off an independent
/// artifact; the builder is then ready for the next source.
///
/// Faces are fan-triangulated around their first corner, which is exact
/// for convex planar polygons only. Concave or self-intersecting faces
/// produce a structurally valid mesh with wrong geometry; no repair is
/// attempted.
pub struct MeshBuilder {
    converter: SpaceConverter,
    flip_winding: bool,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    unique_vertices: HashMap<VertexKey, u32>,
}

impl MeshBuilder {
    /// Create a builder converting from `source` to `target`.
    ///
    /// # Panics
    ///
    /// Panics when either system is not a valid axis permutation; see
    /// [`SpaceConverter::new`].
    pub fn new(source: CoordinateSystem3D, target: CoordinateSystem3D) -> Self {
        let converter = SpaceConverter::new(source, target);
        let flip_winding = converter.flips_handedness();
        MeshBuilder {
            converter,
            flip_winding,
            vertices: Vec::with_capacity(VERTEX_CAPACITY),
            indices: Vec::with_capacity(3 * VERTEX_CAPACITY),
            unique_vertices: HashMap::new(),
        }
    }

    /// The converter shared by every vertex of every build.
    pub const fn converter(&self) -> &SpaceConverter {
        &self.converter
    }

    /// Build an indexed model from `raw`.
    ///
    /// When `shape_filter` is `Some`, only shapes with that exact name
    /// contribute faces; a filter that matches nothing yields an empty
    /// model, which is a legitimate result rather than an error.
    pub fn build(&mut self, raw: &RawMesh, shape_filter: Option<&str>) -> Model {
        self.vertices.clear();
        self.indices.clear();
        self.unique_vertices.clear();

        let mut selected_shapes = 0usize;
        for shape in &raw.shapes {
            if let Some(name) = shape_filter
                && shape.name != name
            {
                continue;
            }
            selected_shapes += 1;

            for face in shape.faces() {
                self.add_face(raw, face);
            }
        }

        if selected_shapes == 0 && let Some(name) = shape_filter {
            warn!("no shape named {name:?} in source; producing an empty model");
        }

        debug!(
            vertices = self.vertices.len(),
            indices = self.indices.len(),
            shapes = selected_shapes,
            flipped_winding = self.flip_winding,
            "mesh build finished"
        );

        Model::new(
            mem::take(&mut self.vertices),
            Some(mem::take(&mut self.indices)),
        )
    }

    /// Fan-triangulate one face around corner 0 and emit its triangles,
    /// reversing corner order when the conversion flipped handedness so
    /// the result stays front-facing under the target convention.
    fn add_face(&mut self, raw: &RawMesh, corners: &[FaceCorner]) {
        if corners.len() < 3 {
            warn!("skipping degenerate face with {} corners", corners.len());
            return;
        }

        for i in 0..corners.len() - 2 {
            let (a, b, c) = (corners[0], corners[i + 1], corners[i + 2]);
            if self.flip_winding {
                self.add_corner(raw, c);
                self.add_corner(raw, b);
                self.add_corner(raw, a);
            } else {
                self.add_corner(raw, a);
                self.add_corner(raw, b);
                self.add_corner(raw, c);
            }
        }
    }

    /// Assemble the corner's vertex, deduplicate it, and append its
    /// index to the output.
    fn add_corner(&mut self, raw: &RawMesh, corner: FaceCorner) {
        let vertex = self.assemble_vertex(raw, corner);

        let next_index = self.vertices.len() as u32;
        let vertices = &mut self.vertices;
        let index = *self
            .unique_vertices
            .entry(vertex.dedup_key())
            .or_insert_with(|| {
                vertices.push(vertex);
                next_index
            });

        self.indices.push(index);
    }

    /// Read the corner's attributes and convert position and normal into
    /// the target convention. Texture coordinates are 2D and never
    /// converted. Absent attributes default to zero.
    fn assemble_vertex(&self, raw: &RawMesh, corner: FaceCorner) -> Vertex {
        let mut position = raw.position(corner.position);
        self.converter.convert_in_place(&mut position);

        let normal = match corner.normal {
            Some(index) => {
                let mut normal = raw.normal(index);
                self.converter.convert_in_place(&mut normal);
                normal
            }
            None => Vec3::ZERO,
        };

        let tex_coords = match corner.tex_coord {
            Some(index) => raw.tex_coord(index),
            None => Vec2::ZERO,
        };

        Vertex::new(position, normal, tex_coords)
    }
}

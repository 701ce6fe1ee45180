//! Raw mesh data as handed over by an external parser.
//!
//! Attribute arrays are flat and shared across shapes; faces reference
//! them through per-corner indices. This is the shape of the data a
//! Wavefront OBJ parser produces, but nothing here is OBJ-specific.

use glam::{Vec2, Vec3};

/// One corner of a polygonal face.
///
/// Normal and texture-coordinate indices are optional; a corner without
/// them gets defaulted attributes during assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    pub position: u32,
    pub normal: Option<u32>,
    pub tex_coord: Option<u32>,
}

/// The faces of one named shape/group.
///
/// `corners` holds the corner records of every face back to back;
/// `face_arities` gives the number of corners in each face, in order.
#[derive(Debug, Clone, Default)]
pub struct RawShape {
    pub name: String,
    pub corners: Vec<FaceCorner>,
    pub face_arities: Vec<u32>,
}

impl RawShape {
    /// Iterate over the faces as corner-record slices.
    pub fn faces(&self) -> impl Iterator<Item = &[FaceCorner]> {
        self.face_arities.iter().scan(0usize, |start, &arity| {
            let begin = *start;
            *start += arity as usize;
            self.corners.get(begin..*start)
        })
    }

    pub fn face_count(&self) -> usize {
        self.face_arities.len()
    }
}

/// Flat per-vertex attribute arrays plus the shapes indexing into them.
///
/// `positions` holds 3 floats per vertex and is always present;
/// `normals` (3 per vertex) and `tex_coords` (2 per vertex) may be
/// empty when the source carries no such attributes.
#[derive(Debug, Clone, Default)]
pub struct RawMesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub tex_coords: Vec<f32>,
    pub shapes: Vec<RawShape>,
}

impl RawMesh {
    pub fn position(&self, index: u32) -> Vec3 {
        let at = 3 * index as usize;
        Vec3::new(
            self.positions[at],
            self.positions[at + 1],
            self.positions[at + 2],
        )
    }

    pub fn normal(&self, index: u32) -> Vec3 {
        let at = 3 * index as usize;
        Vec3::new(self.normals[at], self.normals[at + 1], self.normals[at + 2])
    }

    pub fn tex_coord(&self, index: u32) -> Vec2 {
        let at = 2 * index as usize;
        Vec2::new(self.tex_coords[at], self.tex_coords[at + 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner(position: u32) -> FaceCorner {
        FaceCorner {
            position,
            normal: None,
            tex_coord: None,
        }
    }

    #[test]
    fn test_faces_follow_arity_runs() {
        let shape = RawShape {
            name: String::new(),
            corners: (0..7).map(corner).collect(),
            face_arities: vec![3, 4],
        };

        let faces: Vec<_> = shape.faces().collect();
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].len(), 3);
        assert_eq!(faces[1].len(), 4);
        assert_eq!(faces[1][0], corner(3));
    }

    #[test]
    fn test_attribute_lookup() {
        let mesh = RawMesh {
            positions: vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0],
            normals: vec![0.0, 1.0, 0.0],
            tex_coords: vec![0.25, 0.75],
            shapes: Vec::new(),
        };
        assert_eq!(mesh.position(1), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.normal(0), Vec3::Y);
        assert_eq!(mesh.tex_coord(0), Vec2::new(0.25, 0.75));
    }
}

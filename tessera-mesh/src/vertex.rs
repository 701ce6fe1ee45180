//! The finished vertex type and its deduplication key.

use glam::{Vec2, Vec3};

/// A mesh vertex in the target coordinate convention.
///
/// `#[repr(C)]` with no padding, so a `&[Vertex]` can be handed to a GPU
/// buffer upload as raw bytes via `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, tex_coords: Vec2) -> Self {
        Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Exact-bits identity over all eight float fields.
    ///
    /// Two vertices are duplicates only when every field matches bit for
    /// bit; there is no tolerance for floating-point noise.
    pub(crate) fn dedup_key(&self) -> VertexKey {
        let mut bits = [0u32; 8];
        let fields = self
            .position
            .iter()
            .chain(self.normal.iter())
            .chain(self.tex_coords.iter());
        for (slot, value) in bits.iter_mut().zip(fields) {
            *slot = value.to_bits();
        }
        VertexKey(bits)
    }
}

/// Hashable bit pattern of a [`Vertex`], used as the dedup map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct VertexKey([u32; 8]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn test_equal_fields_share_a_key() {
        let a = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec2::new(0.5, 0.5));
        let b = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec2::new(0.5, 0.5));
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_any_field_difference_changes_the_key() {
        let base = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec2::ZERO);
        let moved = Vertex::new(Vec3::new(1.0, 2.0, 3.5), Vec3::Y, Vec2::ZERO);
        let relit = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Z, Vec2::ZERO);
        let remapped = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec2::X);
        assert_ne!(base.dedup_key(), moved.dedup_key());
        assert_ne!(base.dedup_key(), relit.dedup_key());
        assert_ne!(base.dedup_key(), remapped.dedup_key());
    }

    #[test]
    fn test_no_tolerance_for_float_noise() {
        let x = 0.3f32;
        let next = f32::from_bits(x.to_bits() + 1);
        let a = Vertex::new(Vec3::new(x, 0.0, 0.0), Vec3::ZERO, Vec2::ZERO);
        let b = Vertex::new(Vec3::new(next, 0.0, 0.0), Vec3::ZERO, Vec2::ZERO);
        // Adjacent representable floats must stay distinct vertices.
        assert_ne!(a.dedup_key(), b.dedup_key());
    }
}

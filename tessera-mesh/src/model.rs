//! The finished mesh artifact.

use crate::vertex::Vertex;

/// Deduplicated, indexed triangle mesh in the target coordinate
/// convention, ready for GPU buffer upload.
///
/// A model is always a valid object; load failure and empty filter
/// matches both produce an empty model rather than an absent one, so a
/// renderer never needs a null check before drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    has_index_buffer: bool,
}

impl Model {
    /// Assemble a model from finished buffers. Passing `None` for
    /// `indices` yields a non-indexed model (plain `draw_arrays`
    /// dispatch); `Some` yields an indexed one, even when the index
    /// list is empty.
    pub fn new(vertices: Vec<Vertex>, indices: Option<Vec<u32>>) -> Self {
        let has_index_buffer = indices.is_some();
        Model {
            vertices,
            indices: indices.unwrap_or_default(),
            has_index_buffer,
        }
    }

    /// The empty-but-valid model: zero vertices and an empty index
    /// buffer. Returned when a source cannot be loaded.
    pub fn empty() -> Self {
        Model::new(Vec::new(), Some(Vec::new()))
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangle indices into [`Self::vertices`], stride 3.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex data as raw bytes, for GPU buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes, for GPU buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether draw dispatch should be indexed or non-indexed.
    pub const fn has_index_buffer(&self) -> bool {
        self.has_index_buffer
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

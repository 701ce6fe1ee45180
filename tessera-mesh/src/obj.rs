//! Wavefront OBJ ingestion through the external `tobj` parser.
//!
//! Parsing itself is `tobj`'s job; this module only adapts its output
//! into [`RawMesh`] form and wires it to the [`MeshBuilder`]. Faces are
//! requested untriangulated with separate per-attribute indices so the
//! builder controls triangulation and deduplication.

use crate::builder::MeshBuilder;
use crate::error::LoadError;
use crate::model::Model;
use crate::raw::{FaceCorner, RawMesh, RawShape};
use std::path::Path;
use tracing::{debug, error};

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: false,
        single_index: false,
        ..Default::default()
    }
}

impl MeshBuilder {
    /// Load an OBJ file into a model, absorbing load failure.
    ///
    /// A file that cannot be opened or parsed yields an empty model and
    /// an error-level diagnostic; downstream rendering code never sees a
    /// null or an error for this class of failure.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load_obj(&mut self, path: &Path, shape_filter: Option<&str>) -> Model {
        match self.try_load_obj(path, shape_filter) {
            Ok(model) => model,
            Err(err) => {
                error!("failed to load model {:?}: {err}", path);
                Model::empty()
            }
        }
    }

    /// Load an OBJ file into a model, surfacing load failure.
    pub fn try_load_obj(
        &mut self,
        path: &Path,
        shape_filter: Option<&str>,
    ) -> Result<Model, LoadError> {
        let (models, _materials) = tobj::load_obj(path, &load_options())?;
        debug!(shapes = models.len(), "parsed OBJ source");

        let raw = raw_mesh_from_models(&models);
        Ok(self.build(&raw, shape_filter))
    }
}

/// Flatten parsed OBJ models into one [`RawMesh`].
///
/// `tobj` gives every model its own attribute arrays; they are
/// concatenated here and the per-corner indices rebased accordingly. An
/// attribute array the parser left empty means the attribute is absent
/// for every corner of that model.
pub fn raw_mesh_from_models(models: &[tobj::Model]) -> RawMesh {
    let mut raw = RawMesh::default();

    for model in models {
        let mesh = &model.mesh;
        let position_base = (raw.positions.len() / 3) as u32;
        let normal_base = (raw.normals.len() / 3) as u32;
        let tex_coord_base = (raw.tex_coords.len() / 2) as u32;

        raw.positions.extend_from_slice(&mesh.positions);
        raw.normals.extend_from_slice(&mesh.normals);
        raw.tex_coords.extend_from_slice(&mesh.texcoords);

        let corners = (0..mesh.indices.len())
            .map(|i| FaceCorner {
                position: mesh.indices[i] + position_base,
                normal: mesh.normal_indices.get(i).map(|&n| n + normal_base),
                tex_coord: mesh.texcoord_indices.get(i).map(|&t| t + tex_coord_base),
            })
            .collect();

        // face_arities is only populated for untriangulated loads; an
        // empty one means the mesh is already all triangles.
        let face_arities = if mesh.face_arities.is_empty() {
            vec![3; mesh.indices.len() / 3]
        } else {
            mesh.face_arities.clone()
        };

        raw.shapes.push(RawShape {
            name: model.name.clone(),
            corners,
            face_arities,
        });
    }

    raw
}

//! Load-boundary errors.

/// Failure to obtain raw mesh data from an external source.
///
/// [`MeshBuilder::load_obj`](crate::MeshBuilder::load_obj) absorbs this
/// into the empty-model success path; callers that want the error itself
/// use [`MeshBuilder::try_load_obj`](crate::MeshBuilder::try_load_obj).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open or parse OBJ source: {0}")]
    Obj(#[from] tobj::LoadError),
}

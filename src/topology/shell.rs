use crate::error::Result;
use crate::math::{BoundingBox2, UvTransform};

use super::{MeshId, MeshStore};

/// A connected group of UVs sharing one native shell index.
///
/// Shells are built per operation by the shell query and do not own any
/// geometry; they index into the mesh store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UvShell {
    mesh: MeshId,
    index: usize,
    uvs: Vec<usize>,
    faces: Vec<usize>,
}

impl UvShell {
    #[must_use]
    pub fn new(mesh: MeshId, index: usize, uvs: Vec<usize>, faces: Vec<usize>) -> Self {
        Self {
            mesh,
            index,
            uvs,
            faces,
        }
    }

    /// The mesh this shell belongs to.
    #[must_use]
    pub fn mesh(&self) -> MeshId {
        self.mesh
    }

    /// The native shell index within the mesh.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn uvs(&self) -> &[usize] {
        &self.uvs
    }

    #[must_use]
    pub fn faces(&self) -> &[usize] {
        &self.faces
    }

    /// Current UV bounding box of the shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is missing or the shell is empty.
    pub fn bounding_box(&self, store: &MeshStore) -> Result<BoundingBox2> {
        store.mesh(self.mesh)?.uv_bounding_box(&self.uvs)
    }

    /// Applies `transform` to every UV of the shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is missing or an index is stale.
    pub fn translate(&self, store: &mut MeshStore, transform: &UvTransform) -> Result<()> {
        store
            .mesh_mut(self.mesh)?
            .transform_uvs(&self.uvs, transform)?;
        Ok(())
    }
}

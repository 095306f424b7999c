pub mod mesh;
pub mod selection;
pub mod shell;

pub use mesh::{Face, MeshData, MeshId};
pub use selection::{Component, Selection};
pub use shell::UvShell;

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all meshes of a scene.
///
/// Meshes are referenced by typed IDs (generational indices) so shells and
/// selections can name them without borrowing the store.
#[derive(Debug, Default)]
pub struct MeshStore {
    meshes: SlotMap<MeshId, MeshData>,
}

impl MeshStore {
    /// Creates a new, empty mesh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mesh and returns its ID.
    pub fn add_mesh(&mut self, data: MeshData) -> MeshId {
        self.meshes.insert(data)
    }

    /// Returns a reference to the mesh data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is not in the store.
    pub fn mesh(&self, id: MeshId) -> Result<&MeshData, TopologyError> {
        self.meshes
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("mesh".into()))
    }

    /// Returns a mutable reference to the mesh data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is not in the store.
    pub fn mesh_mut(&mut self, id: MeshId) -> Result<&mut MeshData, TopologyError> {
        self.meshes
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("mesh".into()))
    }

    /// Iterates over all meshes.
    pub fn meshes(&self) -> impl Iterator<Item = (MeshId, &MeshData)> {
        self.meshes.iter()
    }
}

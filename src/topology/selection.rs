use std::collections::BTreeSet;

use crate::error::Result;

use super::{MeshId, MeshStore};

/// One selected component list on a single mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// The whole mesh (object mode).
    Object(MeshId),
    Faces { mesh: MeshId, indices: Vec<usize> },
    Uvs { mesh: MeshId, indices: Vec<usize> },
    Vertices { mesh: MeshId, indices: Vec<usize> },
}

impl Component {
    /// The mesh this component lives on.
    #[must_use]
    pub fn mesh(&self) -> MeshId {
        match self {
            Component::Object(mesh)
            | Component::Faces { mesh, .. }
            | Component::Uvs { mesh, .. }
            | Component::Vertices { mesh, .. } => *mesh,
        }
    }

    /// Returns `true` if the component lists no indices.
    ///
    /// An object component is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Component::Object(_) => false,
            Component::Faces { indices, .. }
            | Component::Uvs { indices, .. }
            | Component::Vertices { indices, .. } => indices.is_empty(),
        }
    }

    /// Converts the component to the UV indices it covers.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is missing or a face index is invalid.
    pub fn to_uvs(&self, store: &MeshStore) -> Result<Vec<usize>> {
        let mesh = store.mesh(self.mesh())?;
        Ok(match self {
            Component::Object(_) => (0..mesh.uvs().len()).collect(),
            Component::Faces { indices, .. } => mesh.uvs_of_faces(indices)?,
            Component::Uvs { indices, .. } => sorted_unique(indices),
            Component::Vertices { indices, .. } => {
                mesh.uvs_of_vertices(&indices.iter().copied().collect())
            }
        })
    }

    /// Converts the component to the faces it covers. UV and vertex
    /// components select every face touching them.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is missing or a face index is invalid.
    pub fn to_faces(&self, store: &MeshStore) -> Result<Vec<usize>> {
        let mesh = store.mesh(self.mesh())?;
        Ok(match self {
            Component::Object(_) => (0..mesh.faces().len()).collect(),
            Component::Faces { indices, .. } => {
                let faces = sorted_unique(indices);
                for &f in &faces {
                    mesh.face(f)?;
                }
                faces
            }
            Component::Uvs { indices, .. } => {
                mesh.faces_using_uvs(&indices.iter().copied().collect())
            }
            Component::Vertices { indices, .. } => {
                mesh.faces_using_vertices(&indices.iter().copied().collect())
            }
        })
    }
}

fn sorted_unique(indices: &[usize]) -> Vec<usize> {
    indices
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// An ordered list of selected components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    components: Vec<Component>,
}

impl Selection {
    #[must_use]
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Returns `true` if nothing with at least one index is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.iter().all(Component::is_empty)
    }

    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Distinct meshes referenced by the selection, in first-seen order.
    #[must_use]
    pub fn meshes(&self) -> Vec<MeshId> {
        let mut meshes = Vec::new();
        for c in &self.components {
            if !meshes.contains(&c.mesh()) {
                meshes.push(c.mesh());
            }
        }
        meshes
    }
}

impl FromIterator<Component> for Selection {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::fixtures::rect_mesh;

    #[test]
    fn object_covers_everything() {
        let mut store = MeshStore::new();
        let mesh = rect_mesh(&mut store, &[(0.0, 0.0, 1.0, 1.0), (2.0, 0.0, 3.0, 1.0)]);
        let c = Component::Object(mesh);
        assert_eq!(c.to_uvs(&store).unwrap().len(), 8);
        assert_eq!(c.to_faces(&store).unwrap(), vec![0, 1]);
    }

    #[test]
    fn uv_component_dedups_and_expands_to_faces() {
        let mut store = MeshStore::new();
        let mesh = rect_mesh(&mut store, &[(0.0, 0.0, 1.0, 1.0), (2.0, 0.0, 3.0, 1.0)]);
        let c = Component::Uvs {
            mesh,
            indices: vec![5, 4, 5],
        };
        assert_eq!(c.to_uvs(&store).unwrap(), vec![4, 5]);
        assert_eq!(c.to_faces(&store).unwrap(), vec![1]);
    }

    #[test]
    fn bad_face_index_is_an_error() {
        let mut store = MeshStore::new();
        let mesh = rect_mesh(&mut store, &[(0.0, 0.0, 1.0, 1.0)]);
        let c = Component::Faces {
            mesh,
            indices: vec![3],
        };
        assert!(c.to_faces(&store).is_err());
        assert!(c.to_uvs(&store).is_err());
    }

    #[test]
    fn empty_selection() {
        let mut store = MeshStore::new();
        let mesh = rect_mesh(&mut store, &[(0.0, 0.0, 1.0, 1.0)]);
        assert!(Selection::default().is_empty());
        let s: Selection = [Component::Faces {
            mesh,
            indices: vec![],
        }]
        .into_iter()
        .collect();
        assert!(s.is_empty());
        let s = Selection::new(vec![Component::Object(mesh)]);
        assert!(!s.is_empty());
        assert_eq!(s.meshes(), vec![mesh]);
    }
}

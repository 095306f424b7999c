use std::collections::HashMap;

use crate::error::Result;
use crate::topology::{MeshId, MeshStore, Selection, UvShell};

/// Collects the UV shells touched by a selection.
///
/// Every component is converted to UVs, and each native shell id those UVs
/// belong to yields one [`UvShell`] holding the complete shell. A shell
/// reached from several components is returned once.
pub struct GetShells<'a> {
    selection: &'a Selection,
}

impl<'a> GetShells<'a> {
    /// Creates a new `GetShells` query.
    #[must_use]
    pub fn new(selection: &'a Selection) -> Self {
        Self { selection }
    }

    /// Executes the query. Shells are ordered by first appearance in the
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns an error if a component references a missing mesh or index.
    pub fn execute(&self, store: &MeshStore) -> Result<Vec<UvShell>> {
        let mut shell_ids: HashMap<MeshId, Vec<usize>> = HashMap::new();
        let mut shells = Vec::new();

        for component in self.selection.components() {
            let mesh_id = component.mesh();
            let mesh = store.mesh(mesh_id)?;
            let uvs = component.to_uvs(store)?;
            let ids = shell_ids
                .entry(mesh_id)
                .or_insert_with(|| mesh.uv_shell_ids().1);

            for uv in uvs {
                let Some(&wanted) = ids.get(uv) else {
                    continue;
                };
                if shells
                    .iter()
                    .any(|s: &UvShell| s.mesh() == mesh_id && s.index() == wanted)
                {
                    continue;
                }
                let shell_uvs: Vec<usize> = ids
                    .iter()
                    .enumerate()
                    .filter(|(_, &id)| id == wanted)
                    .map(|(i, _)| i)
                    .collect();
                let faces: Vec<usize> = mesh
                    .faces()
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| ids[f.uvs()[0]] == wanted)
                    .map(|(i, _)| i)
                    .collect();
                shells.push(UvShell::new(mesh_id, wanted, shell_uvs, faces));
            }
        }

        tracing::debug!(count = shells.len(), "collected uv shells");
        Ok(shells)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::fixtures::rect_mesh;
    use crate::topology::Component;

    #[test]
    fn object_yields_every_shell() {
        let mut store = MeshStore::new();
        let mesh = rect_mesh(
            &mut store,
            &[(0.0, 0.0, 1.0, 1.0), (2.0, 0.0, 3.0, 1.0), (4.0, 0.0, 5.0, 1.0)],
        );
        let selection = Selection::new(vec![Component::Object(mesh)]);
        let shells = GetShells::new(&selection).execute(&store).unwrap();
        assert_eq!(shells.len(), 3);
        assert_eq!(shells[1].uvs(), &[4, 5, 6, 7]);
        assert_eq!(shells[1].faces(), &[1]);
    }

    #[test]
    fn single_uv_expands_to_its_shell() {
        let mut store = MeshStore::new();
        let mesh = rect_mesh(&mut store, &[(0.0, 0.0, 1.0, 1.0), (2.0, 0.0, 3.0, 1.0)]);
        let selection = Selection::new(vec![Component::Uvs {
            mesh,
            indices: vec![6],
        }]);
        let shells = GetShells::new(&selection).execute(&store).unwrap();
        assert_eq!(shells.len(), 1);
        assert_eq!(shells[0].uvs(), &[4, 5, 6, 7]);
        let bbox = shells[0].bounding_box(&store).unwrap();
        assert!((bbox.min().x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn overlapping_components_do_not_duplicate() {
        let mut store = MeshStore::new();
        let mesh = rect_mesh(&mut store, &[(0.0, 0.0, 1.0, 1.0), (2.0, 0.0, 3.0, 1.0)]);
        let selection = Selection::new(vec![
            Component::Faces {
                mesh,
                indices: vec![0],
            },
            Component::Uvs {
                mesh,
                indices: vec![1, 2],
            },
        ]);
        let shells = GetShells::new(&selection).execute(&store).unwrap();
        assert_eq!(shells.len(), 1);
    }

    #[test]
    fn empty_selection_yields_nothing() {
        let store = MeshStore::new();
        let selection = Selection::default();
        assert!(GetShells::new(&selection).execute(&store).unwrap().is_empty());
    }
}

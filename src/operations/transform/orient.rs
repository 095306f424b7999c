use std::f64::consts::FRAC_PI_2;

use crate::error::Result;
use crate::math::{Point2, UvTransform};
use crate::operations::query::GetShells;
use crate::topology::{Component, MeshStore, Selection, UvShell};

/// Rotates shells so a selected UV edge lies on the nearest 90 degree
/// direction.
///
/// Selected UVs are read as consecutive pairs, each pair one edge; any other
/// component must resolve to exactly two UVs. The shell of each edge is
/// rotated about the edge midpoint. A second edge on an already oriented
/// shell is skipped with a warning.
pub struct OrientShells<'a> {
    selection: &'a Selection,
}

impl<'a> OrientShells<'a> {
    /// Creates a new `OrientShells` edit.
    #[must_use]
    pub fn new(selection: &'a Selection) -> Self {
        Self { selection }
    }

    /// Executes the edit, returning the number of shells rotated.
    ///
    /// # Errors
    ///
    /// Returns an error if a component references a missing mesh or index.
    pub fn execute(&self, store: &mut MeshStore) -> Result<usize> {
        let mut plan: Vec<(UvShell, UvTransform)> = Vec::new();

        for component in self.selection.components() {
            for (a, b) in edges(component, store)? {
                let mesh = store.mesh(component.mesh())?;
                let (pa, pb) = (mesh.uv(a)?, mesh.uv(b)?);

                let single = Selection::new(vec![Component::Uvs {
                    mesh: component.mesh(),
                    indices: vec![a],
                }]);
                let Some(shell) = GetShells::new(&single).execute(store)?.into_iter().next()
                else {
                    continue;
                };
                if plan.iter().any(|(s, _)| s == &shell) {
                    tracing::warn!(shell = shell.index(), "shell already oriented, skipping edge");
                    continue;
                }

                let transform =
                    UvTransform::rotation(snap_angle(&pa, &pb), nalgebra::center(&pa, &pb));
                plan.push((shell, transform));
            }
        }

        for (shell, transform) in &plan {
            shell.translate(store, transform)?;
        }
        Ok(plan.len())
    }
}

/// UV pairs of a component. Selected UVs pair up in the order given; any
/// other component must resolve to exactly one pair.
fn edges(component: &Component, store: &MeshStore) -> Result<Vec<(usize, usize)>> {
    if let Component::Uvs { indices, .. } = component {
        if indices.len() % 2 == 1 {
            tracing::warn!(uvs = indices.len(), "odd uv count, ignoring the last uv");
        }
        return Ok(indices.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect());
    }
    let uvs = component.to_uvs(store)?;
    if let [a, b] = uvs[..] {
        Ok(vec![(a, b)])
    } else {
        tracing::warn!(
            uvs = uvs.len(),
            "orient needs exactly one edge per component, skipping"
        );
        Ok(Vec::new())
    }
}

/// Rotation that turns the edge `a -> b` onto the closest multiple of 90
/// degrees.
fn snap_angle(a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let angle = d.y.atan2(d.x);
    (angle / FRAC_PI_2).round() * FRAC_PI_2 - angle
}

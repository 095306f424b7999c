//! Bounding-box driven shell layout.
//!
//! Every solver is pure: it maps the shells' current bounding boxes to one
//! [`UvTransform`] per shell. [`apply_layout`] measures the shells, solves
//! the whole plan and only then edits the mesh store.

mod align;
mod context;
mod distribute;
mod scale_fit;
mod space;

pub use align::{Align, AlignMode};
pub use context::{order_by_center, AlignmentContext};
pub use distribute::Distribute;
pub use scale_fit::{ScaleFit, ScaleFitMode};
pub use space::Space;

use crate::error::Result;
use crate::math::{BoundingBox2, UvTransform};
use crate::topology::{MeshStore, UvShell};

/// Computes per-shell transforms from the shells' bounding boxes.
pub trait LayoutSolver {
    /// Returns one transform per box, in the order of `boxes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the group is too small or degenerate for the
    /// layout.
    fn solve(&self, boxes: &[BoundingBox2]) -> Result<Vec<UvTransform>>;
}

/// Measures `shells`, solves the layout and applies it.
///
/// Returns the number of shells that moved. Nothing is edited unless the
/// solver succeeds for the whole group.
///
/// # Errors
///
/// Returns an error if a shell cannot be measured or the solver fails.
pub fn apply_layout(
    store: &mut MeshStore,
    shells: &[UvShell],
    solver: &dyn LayoutSolver,
) -> Result<usize> {
    let boxes = shells
        .iter()
        .map(|shell| shell.bounding_box(store))
        .collect::<Result<Vec<_>>>()?;
    let plan = solver.solve(&boxes)?;

    let mut moved = 0;
    for (shell, transform) in shells.iter().zip(&plan) {
        if transform.is_identity() {
            continue;
        }
        shell.translate(store, transform)?;
        moved += 1;
    }
    tracing::debug!(shells = shells.len(), moved, "applied layout");
    Ok(moved)
}

use crate::error::Result;
use crate::math::{Axis, BoundingBox2, UvTransform};
use crate::operations::layout::LayoutSolver;

/// Flips every shell on one axis about its own bounding-box center.
#[derive(Debug, Clone, Copy)]
pub struct MirrorShells {
    axis: Axis,
}

impl MirrorShells {
    /// Creates a new `MirrorShells` edit.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl LayoutSolver for MirrorShells {
    fn solve(&self, boxes: &[BoundingBox2]) -> Result<Vec<UvTransform>> {
        Ok(boxes
            .iter()
            .map(|bbox| UvTransform::scaling(self.axis.scale(-1.0), bbox.center()))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::layout::apply_layout;
    use crate::operations::query::GetShells;
    use crate::topology::fixtures::rect_mesh;
    use crate::topology::{Component, MeshStore, Selection};

    #[test]
    fn mirror_u_flips_in_place() {
        let mut store = MeshStore::new();
        let mesh = rect_mesh(&mut store, &[(1.0, 0.0, 3.0, 1.0)]);
        let selection = Selection::new(vec![Component::Object(mesh)]);
        let shells = GetShells::new(&selection).execute(&store).unwrap();

        apply_layout(&mut store, &shells, &MirrorShells::new(Axis::U)).unwrap();
        let uvs = store.mesh(mesh).unwrap().uvs();
        // Corner 0 was the min-u corner and is now on the max-u edge.
        assert_relative_eq!(uvs[0].x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(uvs[0].y, 0.0, epsilon = 1e-12);
        let bbox = shells[0].bounding_box(&store).unwrap();
        assert_relative_eq!(bbox.min().x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bbox.max().x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn mirror_twice_is_identity() {
        let boxes = [BoundingBox2::new(
            crate::math::Point2::new(0.0, 0.0),
            crate::math::Point2::new(2.0, 5.0),
        )];
        let t = MirrorShells::new(Axis::V).solve(&boxes).unwrap()[0];
        let p = crate::math::Point2::new(0.3, 4.1);
        let back = t.apply(&t.apply(&p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
    }
}

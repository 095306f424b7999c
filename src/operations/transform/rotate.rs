use crate::error::Result;
use crate::math::{BoundingBox2, UvTransform};
use crate::operations::layout::LayoutSolver;

/// Rotates every shell about its own bounding-box center.
#[derive(Debug, Clone, Copy)]
pub struct RotateShells {
    angle: f64,
}

impl RotateShells {
    /// Creates a new `RotateShells` edit.
    ///
    /// * `angle` - Counter-clockwise rotation in radians.
    #[must_use]
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }
}

impl LayoutSolver for RotateShells {
    fn solve(&self, boxes: &[BoundingBox2]) -> Result<Vec<UvTransform>> {
        Ok(boxes
            .iter()
            .map(|bbox| UvTransform::rotation(self.angle, bbox.center()))
            .collect())
    }
}

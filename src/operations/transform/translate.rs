use crate::error::Result;
use crate::math::{BoundingBox2, UvTransform, Vector2};
use crate::operations::layout::LayoutSolver;

/// Moves every shell by the same UV offset.
#[derive(Debug, Clone, Copy)]
pub struct TranslateShells {
    offset: Vector2,
}

impl TranslateShells {
    /// Creates a new `TranslateShells` edit.
    #[must_use]
    pub fn new(offset: Vector2) -> Self {
        Self { offset }
    }
}

impl LayoutSolver for TranslateShells {
    fn solve(&self, boxes: &[BoundingBox2]) -> Result<Vec<UvTransform>> {
        Ok(vec![UvTransform::translation(self.offset); boxes.len()])
    }
}

use crate::error::Result;
use crate::math::{Axis, BoundingBox2, UvTransform};

use super::{order_by_center, AlignmentContext, LayoutSolver};

/// Spaces shell centers at equal intervals along an axis.
///
/// Shells are ordered by center. The group's extent is divided into
/// `count - 1` spans and every interior shell is centered on
/// `min + rank * span`. The first and last shells never move; the last one
/// is not corrected even when its center is off the final fence post.
#[derive(Debug, Clone, Copy)]
pub struct Distribute {
    axis: Axis,
}

impl Distribute {
    /// Creates a new `Distribute` layout.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl LayoutSolver for Distribute {
    fn solve(&self, boxes: &[BoundingBox2]) -> Result<Vec<UvTransform>> {
        let ctx = AlignmentContext::new(boxes)?;
        let span = ctx.span(self.axis)?;
        let start = ctx.bbox().min_on(self.axis);

        let order = order_by_center(boxes, self.axis);
        let last = order.len() - 1;
        let mut plan = vec![UvTransform::identity(); boxes.len()];
        for (rank, &i) in order.iter().enumerate() {
            if rank == 0 || rank == last {
                continue;
            }
            #[allow(clippy::cast_precision_loss)]
            let target = start + rank as f64 * span;
            plan[i] =
                UvTransform::translation_on(self.axis, target - boxes[i].center_on(self.axis));
        }
        Ok(plan)
    }
}

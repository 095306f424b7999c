use crate::error::{OperationError, Result};
use crate::math::{Axis, BoundingBox2, UvTransform};

use super::{order_by_center, AlignmentContext, LayoutSolver};

/// Packs shells edge to edge along an axis with a constant gap.
///
/// The packed run is `sum(extents) + gap * (count - 1)` long and is centered
/// on the group's original center. Shells keep their order by center.
#[derive(Debug, Clone, Copy)]
pub struct Space {
    axis: Axis,
    gap: f64,
}

impl Space {
    /// Creates a new `Space` layout. A negative gap overlaps neighbours.
    #[must_use]
    pub fn new(axis: Axis, gap: f64) -> Self {
        Self { axis, gap }
    }
}

impl LayoutSolver for Space {
    fn solve(&self, boxes: &[BoundingBox2]) -> Result<Vec<UvTransform>> {
        if !self.gap.is_finite() {
            return Err(
                OperationError::InvalidInput(format!("space gap must be finite, got {}", self.gap))
                    .into(),
            );
        }
        let ctx = AlignmentContext::new(boxes)?;
        ctx.require(2)?;

        #[allow(clippy::cast_precision_loss)]
        let gaps = self.gap * (ctx.count() - 1) as f64;
        let half_run = (gaps + ctx.extent_sum(self.axis)) / 2.0;
        let mut cursor = ctx.bbox().center_on(self.axis) - half_run;

        let mut plan = vec![UvTransform::identity(); boxes.len()];
        for i in order_by_center(boxes, self.axis) {
            let bbox = &boxes[i];
            plan[i] = UvTransform::translation_on(self.axis, cursor - bbox.min_on(self.axis));
            cursor += self.gap + bbox.extent(self.axis);
        }
        Ok(plan)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::UvError;
    use crate::operations::layout::testing::{apply_all, b};

    fn assert_even(after: &[BoundingBox2], axis: Axis, gap: f64) {
        let order = order_by_center(after, axis);
        for pair in order.windows(2) {
            let (lo, hi) = (&after[pair[0]], &after[pair[1]]);
            assert_relative_eq!(hi.min_on(axis) - lo.max_on(axis), gap, epsilon = 1e-12);
        }
    }

    #[test]
    fn symmetric_run_keeps_center() {
        let boxes = [b(0.0, 0.0, 1.0, 1.0), b(4.0, 0.0, 5.0, 1.0), b(9.0, 0.0, 10.0, 1.0)];
        let plan = Space::new(Axis::U, 0.5).solve(&boxes).unwrap();
        let after = apply_all(&boxes, &plan);
        assert_even(&after, Axis::U, 0.5);
        let union = BoundingBox2::union(&after).unwrap();
        assert_relative_eq!(union.center().x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(union.width(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn asymmetric_extents_keep_center() {
        let boxes = [
            b(0.0, 0.0, 0.25, 1.0),
            b(1.0, 0.0, 4.0, 1.0),
            b(6.0, 0.0, 6.5, 1.0),
            b(11.0, 0.0, 20.0, 1.0),
        ];
        let before = BoundingBox2::union(&boxes).unwrap();
        let plan = Space::new(Axis::U, 0.1).solve(&boxes).unwrap();
        let after = apply_all(&boxes, &plan);
        assert_even(&after, Axis::U, 0.1);
        let union = BoundingBox2::union(&after).unwrap();
        assert_relative_eq!(union.center().x, before.center().x, epsilon = 1e-12);
    }

    #[test]
    fn unsorted_input_keeps_rank_order() {
        let boxes = [b(0.0, 8.0, 1.0, 9.0), b(0.0, 0.0, 1.0, 2.0), b(0.0, 4.0, 1.0, 5.0)];
        let plan = Space::new(Axis::V, 0.0).solve(&boxes).unwrap();
        let after = apply_all(&boxes, &plan);
        assert_even(&after, Axis::V, 0.0);
        assert!(after[1].max().y <= after[2].min().y + 1e-12);
        assert!(after[2].max().y <= after[0].min().y + 1e-12);
        // U is untouched.
        for (a, before) in after.iter().zip(&boxes) {
            assert_relative_eq!(a.min().x, before.min().x);
        }
    }

    #[test]
    fn overlapping_input_is_spread_apart() {
        let boxes = [b(0.0, 0.0, 2.0, 1.0), b(1.0, 0.0, 3.0, 1.0)];
        let plan = Space::new(Axis::U, 1.0).solve(&boxes).unwrap();
        let after = apply_all(&boxes, &plan);
        assert_even(&after, Axis::U, 1.0);
        assert_relative_eq!(after[0].min().x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(after[1].max().x, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn one_shell_is_insufficient() {
        let boxes = [b(0.0, 0.0, 1.0, 1.0)];
        assert!(matches!(
            Space::new(Axis::U, 0.1).solve(&boxes),
            Err(UvError::Operation(OperationError::InsufficientShells { .. }))
        ));
    }

    #[test]
    fn non_finite_gap_is_rejected() {
        let boxes = [b(0.0, 0.0, 1.0, 1.0), b(2.0, 0.0, 3.0, 1.0)];
        assert!(Space::new(Axis::U, f64::NAN).solve(&boxes).is_err());
    }
}

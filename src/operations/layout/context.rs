use crate::error::{OperationError, Result};
use crate::math::{Axis, BoundingBox2};

/// Group measurements shared by every shell of one layout operation.
///
/// Built once from the shells' bounding boxes before any shell moves, so all
/// per-shell parameters are derived from the same snapshot.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentContext {
    bbox: BoundingBox2,
    max_width: f64,
    min_width: f64,
    max_height: f64,
    min_height: f64,
    width_sum: f64,
    height_sum: f64,
    count: usize,
}

impl AlignmentContext {
    /// Measures a group of shell bounding boxes.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptySelection` if `boxes` is empty.
    pub fn new(boxes: &[BoundingBox2]) -> Result<Self> {
        let bbox = BoundingBox2::union(boxes).ok_or(OperationError::EmptySelection)?;
        let widths = boxes.iter().map(BoundingBox2::width);
        let heights = boxes.iter().map(BoundingBox2::height);
        Ok(Self {
            bbox,
            max_width: widths.clone().fold(f64::NEG_INFINITY, f64::max),
            min_width: widths.clone().fold(f64::INFINITY, f64::min),
            max_height: heights.clone().fold(f64::NEG_INFINITY, f64::max),
            min_height: heights.clone().fold(f64::INFINITY, f64::min),
            width_sum: widths.sum(),
            height_sum: heights.sum(),
            count: boxes.len(),
        })
    }

    /// Union bounding box of the group.
    #[must_use]
    pub fn bbox(&self) -> &BoundingBox2 {
        &self.bbox
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Largest shell extent on `axis`.
    #[must_use]
    pub fn max_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::U => self.max_width,
            Axis::V => self.max_height,
        }
    }

    /// Smallest shell extent on `axis`.
    #[must_use]
    pub fn min_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::U => self.min_width,
            Axis::V => self.min_height,
        }
    }

    /// Sum of every shell's extent on `axis`.
    #[must_use]
    pub fn extent_sum(&self, axis: Axis) -> f64 {
        match axis {
            Axis::U => self.width_sum,
            Axis::V => self.height_sum,
        }
    }

    /// Distance between consecutive fence posts when the group's extent on
    /// `axis` is divided into `count - 1` equal intervals.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InsufficientShells` for fewer than 2 shells.
    pub fn span(&self, axis: Axis) -> Result<f64> {
        self.require(2)?;
        #[allow(clippy::cast_precision_loss)]
        let intervals = (self.count - 1) as f64;
        Ok(self.bbox.extent(axis) / intervals)
    }

    /// Fails unless the group holds at least `required` shells.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InsufficientShells` when short.
    pub fn require(&self, required: usize) -> Result<()> {
        if self.count < required {
            return Err(OperationError::InsufficientShells {
                required,
                found: self.count,
            }
            .into());
        }
        Ok(())
    }
}

/// Indices of `boxes` sorted ascending by bounding-box center on `axis`.
///
/// The sort is stable, so shells with equal centers keep their input order.
#[must_use]
pub fn order_by_center(boxes: &[BoundingBox2], axis: Axis) -> Vec<usize> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| {
        boxes[a]
            .center_on(axis)
            .total_cmp(&boxes[b].center_on(axis))
    });
    order
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::UvError;
    use crate::math::Point2;

    fn b(u0: f64, v0: f64, u1: f64, v1: f64) -> BoundingBox2 {
        BoundingBox2::new(Point2::new(u0, v0), Point2::new(u1, v1))
    }

    #[test]
    fn measures_group() {
        let boxes = [b(0.0, 0.0, 1.0, 3.0), b(4.0, 1.0, 6.0, 2.0)];
        let ctx = AlignmentContext::new(&boxes).unwrap();
        assert_relative_eq!(ctx.bbox().width(), 6.0);
        assert_relative_eq!(ctx.max_extent(Axis::U), 2.0);
        assert_relative_eq!(ctx.min_extent(Axis::U), 1.0);
        assert_relative_eq!(ctx.max_extent(Axis::V), 3.0);
        assert_relative_eq!(ctx.min_extent(Axis::V), 1.0);
        assert_relative_eq!(ctx.extent_sum(Axis::U), 3.0);
        assert_relative_eq!(ctx.extent_sum(Axis::V), 4.0);
        assert_relative_eq!(ctx.span(Axis::U).unwrap(), 6.0);
        assert_eq!(ctx.count(), 2);
    }

    #[test]
    fn empty_group_is_rejected() {
        assert!(matches!(
            AlignmentContext::new(&[]),
            Err(UvError::Operation(OperationError::EmptySelection))
        ));
    }

    #[test]
    fn span_needs_two_shells() {
        let ctx = AlignmentContext::new(&[b(0.0, 0.0, 1.0, 1.0)]).unwrap();
        assert!(matches!(
            ctx.span(Axis::U),
            Err(UvError::Operation(OperationError::InsufficientShells {
                required: 2,
                found: 1
            }))
        ));
    }

    #[test]
    fn order_is_by_center_and_stable() {
        let boxes = [
            b(5.0, 0.0, 6.0, 1.0),
            b(0.0, 0.0, 1.0, 1.0),
            b(5.0, 9.0, 6.0, 10.0),
        ];
        assert_eq!(order_by_center(&boxes, Axis::U), vec![1, 0, 2]);
        assert_eq!(order_by_center(&boxes, Axis::V), vec![0, 1, 2]);
    }
}

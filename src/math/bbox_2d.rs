use super::{Axis, Point2};

/// An axis-aligned bounding box in UV space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2 {
    min: Point2,
    max: Point2,
}

impl BoundingBox2 {
    /// Creates a box spanning two corners given in any order.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates the smallest box containing every point.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bbox = Self::new(first, first);
        for p in iter {
            bbox.expand_point(p);
        }
        Some(bbox)
    }

    /// Creates the union of all boxes. Returns `None` for an empty iterator.
    pub fn union<'a, I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a BoundingBox2>,
    {
        let mut iter = boxes.into_iter();
        let mut bbox = *iter.next()?;
        for other in iter {
            bbox.expand(other);
        }
        Some(bbox)
    }

    /// Grows this box so it also contains `other`.
    pub fn expand(&mut self, other: &BoundingBox2) {
        self.min = Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y));
        self.max = Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y));
    }

    /// Grows this box so it also contains `point`.
    pub fn expand_point(&mut self, point: &Point2) {
        self.min = Point2::new(self.min.x.min(point.x), self.min.y.min(point.y));
        self.max = Point2::new(self.max.x.max(point.x), self.max.y.max(point.y));
    }

    #[must_use]
    pub fn min(&self) -> Point2 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        self.max
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Width for [`Axis::U`], height for [`Axis::V`].
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::U => self.width(),
            Axis::V => self.height(),
        }
    }

    #[must_use]
    pub fn min_on(&self, axis: Axis) -> f64 {
        axis.of(&self.min)
    }

    #[must_use]
    pub fn max_on(&self, axis: Axis) -> f64 {
        axis.of(&self.max)
    }

    #[must_use]
    pub fn center_on(&self, axis: Axis) -> f64 {
        axis.of(&self.center())
    }
}

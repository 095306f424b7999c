use nalgebra::Rotation2;

use super::{Axis, Point2, Vector2};

/// A UV edit: scale and rotation about a pivot, followed by an offset.
///
/// A point `p` maps to `pivot + R(angle) * S * (p - pivot) + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvTransform {
    /// Translation applied last.
    pub offset: Vector2,
    /// Per-axis scale factors.
    pub scale: Vector2,
    /// Counter-clockwise rotation in radians.
    pub angle: f64,
    /// Anchor for scale and rotation.
    pub pivot: Point2,
}

impl Default for UvTransform {
    fn default() -> Self {
        Self {
            offset: Vector2::zeros(),
            scale: Vector2::new(1.0, 1.0),
            angle: 0.0,
            pivot: Point2::origin(),
        }
    }
}

impl UvTransform {
    /// The transform that leaves every point in place.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// A pure translation.
    #[must_use]
    pub fn translation(offset: Vector2) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// A pure translation along one axis.
    #[must_use]
    pub fn translation_on(axis: Axis, value: f64) -> Self {
        Self::translation(axis.vector(value))
    }

    /// A scale about `pivot`.
    #[must_use]
    pub fn scaling(scale: Vector2, pivot: Point2) -> Self {
        Self {
            scale,
            pivot,
            ..Self::default()
        }
    }

    /// A rotation about `pivot`.
    #[must_use]
    pub fn rotation(angle: f64, pivot: Point2) -> Self {
        Self {
            angle,
            pivot,
            ..Self::default()
        }
    }

    /// Maps a single UV point.
    #[must_use]
    pub fn apply(&self, point: &Point2) -> Point2 {
        let local = point - self.pivot;
        let scaled = Vector2::new(local.x * self.scale.x, local.y * self.scale.y);
        let rotated = Rotation2::new(self.angle) * scaled;
        self.pivot + rotated + self.offset
    }

    /// Returns `true` if applying this transform moves nothing.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.offset == Vector2::zeros()
            && self.scale == Vector2::new(1.0, 1.0)
            && self.angle == 0.0
    }
}

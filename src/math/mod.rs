pub mod bbox_2d;
pub mod triangle;
pub mod units;
pub mod uv_transform;

use std::fmt;
use std::str::FromStr;

use crate::error::OperationError;

pub use bbox_2d::BoundingBox2;
pub use units::LinearUnit;
pub use uv_transform::UvTransform;

/// 2D point type. `x` is the U coordinate, `y` the V coordinate.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// A parametric axis of UV space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    U,
    V,
}

impl Axis {
    /// Returns the coordinate of `point` along this axis.
    #[must_use]
    pub fn of(self, point: &Point2) -> f64 {
        match self {
            Axis::U => point.x,
            Axis::V => point.y,
        }
    }

    /// Returns a vector of length `value` pointing along this axis.
    #[must_use]
    pub fn vector(self, value: f64) -> Vector2 {
        match self {
            Axis::U => Vector2::new(value, 0.0),
            Axis::V => Vector2::new(0.0, value),
        }
    }

    /// Returns a scale vector that scales by `factor` on this axis only.
    #[must_use]
    pub fn scale(self, factor: f64) -> Vector2 {
        match self {
            Axis::U => Vector2::new(factor, 1.0),
            Axis::V => Vector2::new(1.0, factor),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::U => f.write_str("u"),
            Axis::V => f.write_str("v"),
        }
    }
}

impl FromStr for Axis {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u" => Ok(Axis::U),
            "v" => Ok(Axis::V),
            _ => Err(OperationError::InvalidMode {
                family: "axis",
                mode: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn axis_selects_coordinate() {
        let p = Point2::new(2.0, 3.0);
        assert!((Axis::U.of(&p) - 2.0).abs() < TOLERANCE);
        assert!((Axis::V.of(&p) - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn axis_parse() {
        assert_eq!("u".parse::<Axis>().unwrap(), Axis::U);
        assert_eq!("v".parse::<Axis>().unwrap(), Axis::V);
        assert!("w".parse::<Axis>().is_err());
    }

    #[test]
    fn axis_scale_leaves_other_axis() {
        let s = Axis::V.scale(2.0);
        assert!((s.x - 1.0).abs() < TOLERANCE);
        assert!((s.y - 2.0).abs() < TOLERANCE);
    }
}

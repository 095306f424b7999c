use super::{LinearUnit, Point2, Point3};

/// Area of a UV polygon by fan triangulation from its first corner.
///
/// Each fan triangle contributes the absolute value of its shoelace term, so
/// the result is exact for convex polygons and an approximation for concave
/// ones.
#[must_use]
pub fn uv_fan_area(corners: &[Point2]) -> f64 {
    let Some((a, rest)) = corners.split_first() else {
        return 0.0;
    };
    rest.windows(2)
        .map(|pair| {
            let (b, c) = (pair[0], pair[1]);
            let s = (b.x - a.x) * (c.y - a.y);
            let t = (c.x - a.x) * (b.y - a.y);
            ((s - t) * 0.5).abs()
        })
        .sum()
}

/// Area of a triangle from its side lengths (Heron's formula).
///
/// Rounding on near-degenerate triangles can push the radicand slightly below
/// zero; it is clamped so the result is never NaN.
#[must_use]
pub fn heron_area(la: f64, lb: f64, lc: f64) -> f64 {
    let s = (la + lb + lc) * 0.5;
    (s * (s - la) * (s - lb) * (s - lc)).max(0.0).sqrt()
}

/// World-space area of a polygon by fan triangulation from its first corner,
/// with side lengths converted to `unit` before Heron's formula is applied.
#[must_use]
pub fn surface_fan_area(corners: &[Point3], unit: LinearUnit) -> f64 {
    let Some((a, rest)) = corners.split_first() else {
        return 0.0;
    };
    rest.windows(2)
        .map(|pair| {
            let (b, c) = (&pair[0], &pair[1]);
            let la = unit.internal_to_ui(nalgebra::distance(a, b));
            let lb = unit.internal_to_ui(nalgebra::distance(a, c));
            let lc = unit.internal_to_ui(nalgebra::distance(b, c));
            heron_area(la, lb, lc)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn uv(u: f64, v: f64) -> Point2 {
        Point2::new(u, v)
    }

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn uv_unit_square() {
        let sq = [uv(0.0, 0.0), uv(1.0, 0.0), uv(1.0, 1.0), uv(0.0, 1.0)];
        assert_relative_eq!(uv_fan_area(&sq), 1.0);
    }

    #[test]
    fn uv_area_ignores_winding() {
        let sq = [uv(0.0, 0.0), uv(0.0, 1.0), uv(1.0, 1.0), uv(1.0, 0.0)];
        assert_relative_eq!(uv_fan_area(&sq), 1.0);
    }

    #[test]
    fn uv_area_degenerate_inputs() {
        assert_relative_eq!(uv_fan_area(&[]), 0.0);
        assert_relative_eq!(uv_fan_area(&[uv(0.0, 0.0), uv(1.0, 0.0)]), 0.0);
        let line = [uv(0.0, 0.0), uv(1.0, 0.0), uv(2.0, 0.0)];
        assert_relative_eq!(uv_fan_area(&line), 0.0);
    }

    #[test]
    fn uv_pentagon_fan() {
        // House shape: unit square plus a roof triangle of height 0.5.
        let house = [
            uv(0.0, 0.0),
            uv(1.0, 0.0),
            uv(1.0, 1.0),
            uv(0.5, 1.5),
            uv(0.0, 1.0),
        ];
        assert_relative_eq!(uv_fan_area(&house), 1.25);
    }

    #[test]
    fn heron_right_triangle() {
        assert_relative_eq!(heron_area(3.0, 4.0, 5.0), 6.0);
    }

    #[test]
    fn heron_collinear_is_zero() {
        let area = heron_area(1.0, 2.0, 3.0);
        assert!(area.abs() < 1e-12);
        assert!(!area.is_nan());
    }

    #[test]
    fn surface_unit_square() {
        let sq = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        assert_relative_eq!(
            surface_fan_area(&sq, LinearUnit::Centimeter),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn surface_area_in_display_unit() {
        // 100cm x 100cm square measured in metres.
        let sq = [
            p(0.0, 0.0, 0.0),
            p(100.0, 0.0, 0.0),
            p(100.0, 0.0, 100.0),
            p(0.0, 0.0, 100.0),
        ];
        assert_relative_eq!(surface_fan_area(&sq, LinearUnit::Meter), 1.0, epsilon = 1e-9);
    }
}

use std::f64::consts::TAU;

use super::Vector2;

/// Returns the signed angle from `a` to `b`, in (-π, π].
///
/// A positive angle means `b` lies counter-clockwise of `a` in the plan's
/// winding sense (y axis pointing down the screen). Either vector being
/// zero yields an angle of 0.
#[must_use]
pub fn angle(a: &Vector2, b: &Vector2) -> f64 {
    let dot = a.x * b.x + a.y * b.y;
    let det = a.x * b.y - a.y * b.x;
    -det.atan2(dot)
}

/// Returns the unsigned angle between `a` and `b`, in [0, π].
#[must_use]
pub fn angle_unsigned(a: &Vector2, b: &Vector2) -> f64 {
    angle(a, b).abs()
}

/// Returns the angle from `a` to `b` normalized to [0, 2π).
///
/// Same winding sense as [`angle`].
#[must_use]
pub fn angle_2pi(a: &Vector2, b: &Vector2) -> f64 {
    let mut theta = angle(a, b);
    if theta < 0.0 {
        theta += TAU;
    }
    theta
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const TOL: f64 = 1e-12;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn parallel_vectors() {
        assert!(angle(&v(1.0, 0.0), &v(2.0, 0.0)).abs() < TOL);
        assert!(angle_2pi(&v(1.0, 0.0), &v(3.0, 0.0)).abs() < TOL);
    }

    #[test]
    fn anti_parallel_vectors() {
        let theta = angle(&v(1.0, 0.0), &v(-1.0, 0.0));
        assert!((theta.abs() - PI).abs() < TOL, "theta={theta}");
        let theta = angle_2pi(&v(1.0, 0.0), &v(-2.0, 0.0));
        assert!((theta - PI).abs() < TOL, "theta={theta}");
    }

    #[test]
    fn quarter_turns() {
        // (1,0) → (0,1) is a quarter turn; signed sign follows the plan
        // winding, so the two quarter turns land on opposite signs.
        let t1 = angle(&v(1.0, 0.0), &v(0.0, 1.0));
        let t2 = angle(&v(1.0, 0.0), &v(0.0, -1.0));
        assert!((t1 + t2).abs() < TOL, "t1={t1} t2={t2}");
        assert!((t1.abs() - FRAC_PI_2).abs() < TOL);
        assert!((angle_unsigned(&v(1.0, 0.0), &v(0.0, -1.0)) - FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn full_range_wraps_to_2pi() {
        let t = angle_2pi(&v(1.0, 0.0), &v(0.0, 1.0));
        let u = angle_2pi(&v(1.0, 0.0), &v(0.0, -1.0));
        assert!((t + u - TAU).abs() < TOL, "t={t} u={u}");
    }

    #[test]
    fn magnitude_independent() {
        let t1 = angle(&v(1.0, 1.0), &v(-3.0, 3.0));
        let t2 = angle(&v(10.0, 10.0), &v(-0.5, 0.5));
        assert!((t1 - t2).abs() < TOL);
    }
}

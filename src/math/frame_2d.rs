use crate::error::GeometryError;

use super::angle_2d::angle;
use super::{Matrix4, Point2, Point3, Vector2, Vector3, TOLERANCE};

/// Affine transform pair between world space and a wall segment's local
/// plane.
///
/// World space is y-up; a plan point `(x, y)` embeds as `(x, elevation, y)`
/// (see [`lift`]). The forward transform carries the segment onto the local
/// x axis at `z = 0`, with the segment start at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFrame {
    /// World → local transform.
    pub transform: Matrix4,
    /// Local → world transform (inverse of `transform`).
    pub inverse: Matrix4,
}

impl PlaneFrame {
    /// Maps a world point into the segment's local plane.
    #[must_use]
    pub fn to_local(&self, p: &Point3) -> Point3 {
        transform_point(&self.transform, p)
    }

    /// Maps a local-plane point back into world space.
    #[must_use]
    pub fn to_world(&self, p: &Point3) -> Point3 {
        transform_point(&self.inverse, p)
    }
}

/// Embeds a plan point into world space at the given elevation.
#[must_use]
pub fn lift(p: &Point2, elevation: f64) -> Point3 {
    Point3::new(p.x, elevation, p.y)
}

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

/// Builds the local frame of the plan segment `start → end`.
///
/// Translates `start` to the origin, then rotates about the vertical axis by
/// the negative of the segment's plan angle against the reference direction
/// `(1, 0)`. The inverse is composed analytically from the same pieces.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] for a zero-length segment.
pub fn segment_frame(start: &Point2, end: &Point2) -> Result<PlaneFrame, GeometryError> {
    let dir = end - start;
    if dir.norm() < TOLERANCE {
        return Err(GeometryError::ZeroVector);
    }
    let ang = angle(&Vector2::new(1.0, 0.0), &dir);

    let transform =
        rotation_y(-ang) * Matrix4::new_translation(&Vector3::new(-start.x, 0.0, -start.y));
    let inverse =
        Matrix4::new_translation(&Vector3::new(start.x, 0.0, start.y)) * rotation_y(ang);

    Ok(PlaneFrame { transform, inverse })
}

/// Builds a 4x4 rotation matrix about the world y axis.
fn rotation_y(angle: f64) -> Matrix4 {
    let (s, c) = angle.sin_cos();
    Matrix4::new(
        c,   0.0, s,   0.0,
        0.0, 1.0, 0.0, 0.0,
        -s,  0.0, c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

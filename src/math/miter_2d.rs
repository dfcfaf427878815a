use std::f64::consts::TAU;

use crate::error::GeometryError;

use super::angle_2d::angle_2pi;
use super::{Point2, Vector2, TOLERANCE};

/// An oriented centerline segment in the plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    /// Creates a new oriented segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the (non-normalized) direction vector `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }
}

/// Joint angles closer than this to 0 or 2π are rejected as degenerate.
pub const MIN_JOINT_ANGLE: f64 = 1e-6;

/// Computes the miter-join displacement at the corner shared by two
/// consecutive oriented segments.
///
/// Added to the corner point, the returned vector produces a point lying at
/// perpendicular distance `offset` from both incident centerlines (the
/// interior offset line); subtracted, it produces the exterior counterpart.
///
/// A missing neighbor is handled by extrapolating the present segment
/// straight by one segment length, so chain endpoints still have two
/// incident directions.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateMiter`] when the joint angle is within
/// [`MIN_JOINT_ANGLE`] of 0 or 2π (segments folding back on themselves), and
/// [`GeometryError::ZeroVector`] when the outgoing direction has zero length
/// or both segments are absent.
pub fn half_angle_vector(
    incoming: Option<&Segment2>,
    outgoing: Option<&Segment2>,
    offset: f64,
) -> Result<Vector2, GeometryError> {
    let (a, b) = match (incoming, outgoing) {
        (Some(a), Some(b)) => (*a, *b),
        (None, Some(b)) => (extrapolate_before(b), *b),
        (Some(a), None) => (*a, extrapolate_after(a)),
        (None, None) => return Err(GeometryError::ZeroVector),
    };

    // Joint angle from the reversed incoming direction to the outgoing
    // endpoint, both measured at the incoming segment's end.
    let rev_in = a.start - a.end;
    let toward_out = b.end - a.end;
    let theta = angle_2pi(&rev_in, &toward_out);

    if theta < MIN_JOINT_ANGLE || theta > TAU - MIN_JOINT_ANGLE {
        return Err(GeometryError::DegenerateMiter { theta });
    }

    let (sn, cs) = (theta / 2.0).sin_cos();

    // Rotate the outgoing direction by half the joint angle; the result
    // points along the corner's angle bisector.
    let dir = b.direction();
    let rotated = Vector2::new(dir.x * cs - dir.y * sn, dir.x * sn + dir.y * cs);

    let mag = rotated.norm();
    if mag < TOLERANCE {
        return Err(GeometryError::ZeroVector);
    }

    // offset / sin(theta/2) puts the displaced point at perpendicular
    // distance `offset` from both centerlines, for any joint angle.
    let desired_mag = offset / sn;

    Ok(rotated * (desired_mag / mag))
}

fn extrapolate_before(next: &Segment2) -> Segment2 {
    let d = next.direction();
    Segment2::new(next.start - d, next.start)
}

fn extrapolate_after(prev: &Segment2) -> Segment2 {
    let d = prev.direction();
    Segment2::new(prev.end, prev.end + d)
}

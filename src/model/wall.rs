use crate::math::Point2;

use super::half_edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a wall in the plan store.
    pub struct WallId;
}

/// Texture assignment for one side of a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSpec {
    /// Texture asset location.
    pub url: String,
    /// If `true`, the texture stretches to cover the wall face; otherwise it
    /// tiles at `scale`.
    pub stretch: bool,
    /// Tiling scale in plan units.
    pub scale: f64,
}

impl SurfaceSpec {
    /// Creates a new surface assignment.
    #[must_use]
    pub fn new(url: impl Into<String>, stretch: bool, scale: f64) -> Self {
        Self {
            url: url.into(),
            stretch,
            scale,
        }
    }
}

/// Data associated with a wall segment.
///
/// A wall owns at most one front and one back boundary edge; the
/// back-references are installed when an edge is constructed for that side
/// (last write wins). Geometric validity is checked at edge construction,
/// not here, so a plan under edit may hold degenerate walls.
#[derive(Debug, Clone)]
pub struct WallData {
    /// Centerline start point.
    pub start: Point2,
    /// Centerline end point.
    pub end: Point2,
    /// Wall thickness; the boundary offset is half of this.
    pub thickness: f64,
    /// Wall height.
    pub height: f64,
    /// Texture on the front side.
    pub front_surface: Option<SurfaceSpec>,
    /// Texture on the back side.
    pub back_surface: Option<SurfaceSpec>,
    /// Boundary edge bordering the front side, if materialized.
    pub front_edge: Option<EdgeId>,
    /// Boundary edge bordering the back side, if materialized.
    pub back_edge: Option<EdgeId>,
}

impl WallData {
    /// Creates a wall with no surface assignments and no boundary edges.
    #[must_use]
    pub fn new(start: Point2, end: Point2, thickness: f64, height: f64) -> Self {
        Self {
            start,
            end,
            thickness,
            height,
            front_surface: None,
            back_surface: None,
            front_edge: None,
            back_edge: None,
        }
    }
}

use crate::error::Result;
use crate::math::distance_2d::{distance, point_to_segment_dist};
use crate::math::frame_2d::segment_frame;
use crate::math::miter_2d::{half_angle_vector, Segment2};
use crate::math::{Point2, Vector2};
use crate::model::{EdgeFrames, EdgeId, PlanStore};

/// Boundary queries for one boundary edge.
///
/// The interior line is the offset boundary on the room-facing side of the
/// wall, the exterior line its outward-facing counterpart. Every query
/// recomputes from the store's current wall and loop state; a missing
/// `prev`/`next` link is treated as a chain end and extrapolated straight.
#[derive(Debug, Clone, Copy)]
pub struct EdgeOutline {
    edge: EdgeId,
}

impl EdgeOutline {
    /// Creates boundary queries for the given edge.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Interior boundary point at the edge's start corner.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge, a linked neighbor, or an involved wall
    /// is missing from the store, or if the start corner's miter is
    /// degenerate.
    pub fn interior_start(&self, store: &PlanStore) -> Result<Point2> {
        Ok(store.edge_start(self.edge)? + self.start_vec(store)?)
    }

    /// Interior boundary point at the edge's end corner.
    ///
    /// # Errors
    ///
    /// Same conditions as [`EdgeOutline::interior_start`], for the end corner.
    pub fn interior_end(&self, store: &PlanStore) -> Result<Point2> {
        Ok(store.edge_end(self.edge)? + self.end_vec(store)?)
    }

    /// Exterior boundary point at the edge's start corner.
    ///
    /// # Errors
    ///
    /// Same conditions as [`EdgeOutline::interior_start`].
    pub fn exterior_start(&self, store: &PlanStore) -> Result<Point2> {
        Ok(store.edge_start(self.edge)? - self.start_vec(store)?)
    }

    /// Exterior boundary point at the edge's end corner.
    ///
    /// # Errors
    ///
    /// Same conditions as [`EdgeOutline::interior_start`], for the end corner.
    pub fn exterior_end(&self, store: &PlanStore) -> Result<Point2> {
        Ok(store.edge_end(self.edge)? - self.end_vec(store)?)
    }

    /// Midpoint of the interior boundary line.
    ///
    /// # Errors
    ///
    /// Same conditions as the interior corner queries.
    pub fn interior_center(&self, store: &PlanStore) -> Result<Point2> {
        let s = self.interior_start(store)?;
        let e = self.interior_end(store)?;
        Ok(Point2::new((s.x + e.x) / 2.0, (s.y + e.y) / 2.0))
    }

    /// Length of the interior boundary line — the visible length of this
    /// wall side after mitering.
    ///
    /// # Errors
    ///
    /// Same conditions as the interior corner queries.
    pub fn interior_distance(&self, store: &PlanStore) -> Result<f64> {
        Ok(distance(
            &self.interior_start(store)?,
            &self.interior_end(store)?,
        ))
    }

    /// Distance from a plan point to the interior boundary line.
    ///
    /// # Errors
    ///
    /// Same conditions as the interior corner queries.
    pub fn distance_to(&self, store: &PlanStore, p: &Point2) -> Result<f64> {
        Ok(point_to_segment_dist(
            p,
            &self.interior_start(store)?,
            &self.interior_end(store)?,
        ))
    }

    /// The wall-face footprint quadrilateral, as
    /// `[interior_start, interior_end, exterior_end, exterior_start]`.
    ///
    /// # Errors
    ///
    /// Same conditions as the corner queries.
    pub fn corners(&self, store: &PlanStore) -> Result<[Point2; 4]> {
        Ok([
            self.interior_start(store)?,
            self.interior_end(store)?,
            self.exterior_end(store)?,
            self.exterior_start(store)?,
        ])
    }

    /// Computes the wall-plane frame pairs for the interior and exterior
    /// offset lines.
    ///
    /// This is a pure computation; [`crate::tessellation::BuildPickSurface`]
    /// caches its result on the edge.
    ///
    /// # Errors
    ///
    /// Same conditions as the corner queries, plus a zero-length offset line.
    pub fn frames(&self, store: &PlanStore) -> Result<EdgeFrames> {
        let interior = segment_frame(&self.interior_start(store)?, &self.interior_end(store)?)?;
        let exterior = segment_frame(&self.exterior_start(store)?, &self.exterior_end(store)?)?;
        Ok(EdgeFrames { interior, exterior })
    }

    fn segment(store: &PlanStore, id: EdgeId) -> Result<Segment2> {
        Ok(Segment2::new(store.edge_start(id)?, store.edge_end(id)?))
    }

    fn start_vec(&self, store: &PlanStore) -> Result<Vector2> {
        let e = store.edge(self.edge)?;
        let this = Self::segment(store, self.edge)?;
        let prev = e.prev.map(|id| Self::segment(store, id)).transpose()?;
        Ok(half_angle_vector(prev.as_ref(), Some(&this), e.offset)?)
    }

    fn end_vec(&self, store: &PlanStore) -> Result<Vector2> {
        let e = store.edge(self.edge)?;
        let this = Self::segment(store, self.edge)?;
        let next = e.next.map(|id| Self::segment(store, id)).transpose()?;
        Ok(half_angle_vector(Some(&this), next.as_ref(), e.offset)?)
    }
}

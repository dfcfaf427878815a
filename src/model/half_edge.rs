use crate::math::frame_2d::PlaneFrame;
use crate::tessellation::PickSurface;

use super::room::RoomId;
use super::signal::RedrawSignal;
use super::wall::WallId;

slotmap::new_key_type! {
    /// Unique identifier for a boundary edge in the plan store.
    pub struct EdgeId;
}

/// Wall-plane transform pairs for the two offset lines of a boundary edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFrames {
    /// Frame of the interior offset line.
    pub interior: PlaneFrame,
    /// Frame of the exterior offset line.
    pub exterior: PlaneFrame,
}

/// Data associated with one oriented side of a wall's boundary.
///
/// Boundary edges are created once per (wall, side) when a room's loop is
/// materialized, and live as long as the room. The loop builder wires
/// `next`/`prev` after all edges in the loop exist; an unset link is treated
/// as a chain end and extrapolated during offset computation.
#[derive(Debug)]
pub struct EdgeData {
    /// Room whose loop this edge belongs to.
    pub room: RoomId,
    /// Wall this edge borders.
    pub wall: WallId,
    /// `true` for the front side of the wall, `false` for the back.
    pub front: bool,
    /// Half the wall thickness, captured at edge construction. A later
    /// change to the wall's thickness does not update this value.
    pub offset: f64,
    /// Wall height, captured at edge construction like `offset`.
    pub height: f64,
    /// Next edge walking the room loop.
    pub next: Option<EdgeId>,
    /// Previous edge walking the room loop.
    pub prev: Option<EdgeId>,
    /// Cached wall-plane frames, built together with the pick surface.
    /// Reused until explicitly rebuilt or invalidated; topology and wall
    /// mutations do not clear this.
    pub frames: Option<EdgeFrames>,
    /// Cached intersection-test surface; same caching contract as `frames`.
    pub pick: Option<PickSurface>,
    /// Fired after every surface assignment through this edge.
    pub signal: RedrawSignal,
}

impl EdgeData {
    /// Creates an unlinked edge with the given captured wall metrics.
    #[must_use]
    pub fn new(room: RoomId, wall: WallId, front: bool, offset: f64, height: f64) -> Self {
        Self {
            room,
            wall,
            front,
            offset,
            height,
            next: None,
            prev: None,
            frames: None,
            pick: None,
            signal: RedrawSignal::new(),
        }
    }
}

use super::half_edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a room in the plan store.
    pub struct RoomId;
}

/// Data associated with an enclosed room.
///
/// Holds the boundary edges materialized for this room's loop, in the order
/// they were constructed. The loop itself is expressed through each edge's
/// `next`/`prev` links.
#[derive(Debug, Clone, Default)]
pub struct RoomData {
    /// Boundary edges belonging to this room.
    pub edges: Vec<EdgeId>,
}

impl RoomData {
    /// Creates an empty room.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

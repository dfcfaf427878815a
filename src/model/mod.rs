pub mod half_edge;
pub mod room;
pub mod signal;
pub mod wall;

pub use half_edge::{EdgeData, EdgeFrames, EdgeId};
pub use room::{RoomData, RoomId};
pub use signal::{RedrawSignal, SubscriberId};
pub use wall::{SurfaceSpec, WallData, WallId};

use slotmap::SlotMap;
use tracing::debug;

use crate::error::ModelError;
use crate::math::distance_2d::distance;
use crate::math::{Point2, TOLERANCE};

/// Central arena that owns all plan entities.
///
/// Entities reference each other via typed IDs (generational indices), so a
/// room loop is a ring of `EdgeId` links rather than mutually-owning edge
/// objects.
#[derive(Debug, Default)]
pub struct PlanStore {
    walls: SlotMap<WallId, WallData>,
    rooms: SlotMap<RoomId, RoomData>,
    edges: SlotMap<EdgeId, EdgeData>,
}

impl PlanStore {
    /// Creates a new, empty plan store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Wall operations ---

    /// Inserts a wall and returns its ID.
    pub fn add_wall(&mut self, data: WallData) -> WallId {
        self.walls.insert(data)
    }

    /// Returns a reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall(&self, id: WallId) -> Result<&WallData, ModelError> {
        self.walls
            .get(id)
            .ok_or(ModelError::EntityNotFound("wall"))
    }

    /// Returns a mutable reference to the wall data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn wall_mut(&mut self, id: WallId) -> Result<&mut WallData, ModelError> {
        self.walls
            .get_mut(id)
            .ok_or(ModelError::EntityNotFound("wall"))
    }

    // --- Room operations ---

    /// Inserts a room and returns its ID.
    pub fn add_room(&mut self, data: RoomData) -> RoomId {
        self.rooms.insert(data)
    }

    /// Returns a reference to the room data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn room(&self, id: RoomId) -> Result<&RoomData, ModelError> {
        self.rooms
            .get(id)
            .ok_or(ModelError::EntityNotFound("room"))
    }

    /// Returns a mutable reference to the room data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut RoomData, ModelError> {
        self.rooms
            .get_mut(id)
            .ok_or(ModelError::EntityNotFound("room"))
    }

    // --- Edge operations ---

    /// Materializes a boundary edge for one side of a wall.
    ///
    /// Validates the wall's geometry, captures its half-thickness and height
    /// on the edge, installs the wall's side back-reference (last write
    /// wins), and appends the edge to the room's edge list. The edge starts
    /// unlinked; wire the loop with [`PlanStore::wire_loop`] or by setting
    /// `next`/`prev` through [`PlanStore::edge_mut`].
    ///
    /// # Errors
    ///
    /// Returns an error if the room or wall is not found, or if the wall has
    /// non-positive thickness, non-positive height, or a zero-length
    /// centerline.
    pub fn add_boundary_edge(
        &mut self,
        room: RoomId,
        wall: WallId,
        front: bool,
    ) -> Result<EdgeId, ModelError> {
        let (offset, height) = {
            let w = self.wall(wall)?;
            if w.thickness <= 0.0 {
                return Err(ModelError::NonPositiveThickness(w.thickness));
            }
            if w.height <= 0.0 {
                return Err(ModelError::NonPositiveHeight(w.height));
            }
            if distance(&w.start, &w.end) < TOLERANCE {
                return Err(ModelError::ZeroLengthCenterline);
            }
            (w.thickness / 2.0, w.height)
        };
        self.room(room)?;

        let edge = self.edges.insert(EdgeData::new(room, wall, front, offset, height));

        let w = self.wall_mut(wall)?;
        if front {
            w.front_edge = Some(edge);
        } else {
            w.back_edge = Some(edge);
        }
        self.room_mut(room)?.edges.push(edge);

        debug!(?edge, ?wall, front, "materialized boundary edge");
        Ok(edge)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, ModelError> {
        self.edges
            .get(id)
            .ok_or(ModelError::EntityNotFound("edge"))
    }

    /// Returns a mutable reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, ModelError> {
        self.edges
            .get_mut(id)
            .ok_or(ModelError::EntityNotFound("edge"))
    }

    /// Wires `next`/`prev` links cyclically through the given edges.
    ///
    /// After this call, `next.prev == self` and `prev.next == self` holds for
    /// every edge in the loop.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 edges are given or any edge is not
    /// found. No links are modified in the error cases.
    pub fn wire_loop(&mut self, edges: &[EdgeId]) -> Result<(), ModelError> {
        if edges.len() < 2 {
            return Err(ModelError::InvalidLoop(edges.len()));
        }
        for &id in edges {
            self.edge(id)?;
        }

        let n = edges.len();
        for (i, &id) in edges.iter().enumerate() {
            let e = self.edge_mut(id)?;
            e.next = Some(edges[(i + 1) % n]);
            e.prev = Some(edges[(i + n - 1) % n]);
        }
        debug!(len = n, "wired boundary loop");
        Ok(())
    }

    /// Returns the edge's start point on the wall centerline.
    ///
    /// Front edges run with the wall (`start → end`); back edges run against
    /// it, so that walking `next` links traces every room loop in the same
    /// rotational sense.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or its wall is not found.
    pub fn edge_start(&self, id: EdgeId) -> Result<Point2, ModelError> {
        let e = self.edge(id)?;
        let w = self.wall(e.wall)?;
        Ok(if e.front { w.start } else { w.end })
    }

    /// Returns the edge's end point on the wall centerline.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or its wall is not found.
    pub fn edge_end(&self, id: EdgeId) -> Result<Point2, ModelError> {
        let e = self.edge(id)?;
        let w = self.wall(e.wall)?;
        Ok(if e.front { w.end } else { w.start })
    }

    /// Returns the sibling edge on the other side of the same wall, or
    /// `None` if that side was never materialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or its wall is not found.
    pub fn opposite_edge(&self, id: EdgeId) -> Result<Option<EdgeId>, ModelError> {
        let e = self.edge(id)?;
        let w = self.wall(e.wall)?;
        Ok(if e.front { w.back_edge } else { w.front_edge })
    }

    /// Returns the surface assigned to this edge's side of the wall.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or its wall is not found.
    pub fn surface(&self, id: EdgeId) -> Result<Option<&SurfaceSpec>, ModelError> {
        let e = self.edge(id)?;
        let w = self.wall(e.wall)?;
        Ok(if e.front {
            w.front_surface.as_ref()
        } else {
            w.back_surface.as_ref()
        })
    }

    /// Assigns a surface to this edge's side of the wall and fires the
    /// edge's redraw signal.
    ///
    /// The signal fires on every call, even when the new value equals the
    /// old one, and every subscriber runs before this method returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or its wall is not found.
    pub fn set_surface(&mut self, id: EdgeId, spec: SurfaceSpec) -> Result<(), ModelError> {
        let (wall, front) = {
            let e = self.edge(id)?;
            (e.wall, e.front)
        };
        let w = self.wall_mut(wall)?;
        if front {
            w.front_surface = Some(spec);
        } else {
            w.back_surface = Some(spec);
        }

        debug!(edge = ?id, front, "surface assigned, firing redraw");
        self.edge_mut(id)?.signal.fire();
        Ok(())
    }

    /// Registers a redraw callback on an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn subscribe_redraw<F: FnMut() + 'static>(
        &mut self,
        id: EdgeId,
        callback: F,
    ) -> Result<SubscriberId, ModelError> {
        Ok(self.edge_mut(id)?.signal.subscribe(callback))
    }

    /// Removes a redraw callback. Returns `false` if it was already removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn unsubscribe_redraw(
        &mut self,
        id: EdgeId,
        subscriber: SubscriberId,
    ) -> Result<bool, ModelError> {
        Ok(self.edge_mut(id)?.signal.unsubscribe(subscriber))
    }

    /// Drops an edge's cached frames and pick surface.
    ///
    /// Cached derived state is never cleared automatically; call this after
    /// mutating the wall's geometry or the loop topology, then rebuild.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn invalidate_derived(&mut self, id: EdgeId) -> Result<(), ModelError> {
        let e = self.edge_mut(id)?;
        e.frames = None;
        e.pick = None;
        Ok(())
    }
}

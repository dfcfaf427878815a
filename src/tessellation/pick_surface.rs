use slotmap::SlotMap;
use tracing::debug;

use crate::error::Result;
use crate::math::frame_2d::lift;
use crate::math::{Point2, Vector3};
use crate::model::{EdgeId, PlanStore};
use crate::operations::EdgeOutline;

use super::{PickSurface, TriangleMesh};

slotmap::new_key_type! {
    /// Unique identifier for a registered pick surface.
    pub struct PickSurfaceId;
}

/// Builds the intersection-test surface for a boundary edge.
///
/// The surface is a vertical quad spanning the edge's interior boundary
/// line from the floor to the wall height, tessellated as two triangles and
/// flagged non-visible. Executing also computes both wall-plane frame pairs;
/// surface and frames are cached on the edge and reused until a caller
/// rebuilds or invalidates them.
#[derive(Debug)]
pub struct BuildPickSurface {
    edge: EdgeId,
}

impl BuildPickSurface {
    /// Creates a new `BuildPickSurface` operation.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Executes the build, caching the surface and frames on the edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or an involved wall is missing, if a
    /// corner miter is degenerate, or if an offset line has zero length.
    pub fn execute(&self, store: &mut PlanStore) -> Result<()> {
        let outline = EdgeOutline::new(self.edge);
        let start = outline.interior_start(store)?;
        let end = outline.interior_end(store)?;
        let frames = outline.frames(store)?;
        let height = store.edge(self.edge)?.height;

        let mesh = wall_quad(&start, &end, height);
        let data = store.edge_mut(self.edge)?;
        data.frames = Some(frames);
        data.pick = Some(PickSurface {
            mesh,
            visible: false,
        });

        debug!(edge = ?self.edge, "built pick surface");
        Ok(())
    }
}

/// Tessellates the vertical wall-face quad over a plan segment.
fn wall_quad(start: &Point2, end: &Point2, height: f64) -> TriangleMesh {
    let v1 = lift(start, 0.0);
    let v2 = lift(end, 0.0);
    let v3 = lift(end, height);
    let v4 = lift(start, height);

    let d = end - start;
    let len = d.norm();
    let normal = Vector3::new(-d.y / len, 0.0, d.x / len);

    TriangleMesh {
        vertices: vec![v1, v2, v3, v4],
        normals: vec![normal; 4],
        uvs: vec![
            Point2::new(0.0, 0.0),
            Point2::new(len, 0.0),
            Point2::new(len, height),
            Point2::new(0.0, height),
        ],
        indices: vec![[0, 1, 2], [0, 2, 3]],
    }
}

/// Side table mapping pick surfaces to their owning boundary edge.
///
/// Owned by the picking layer: register a surface when its mesh enters the
/// scene, then resolve "which wall side was hit" from the intersection
/// result's surface ID.
#[derive(Debug, Default)]
pub struct PickRegistry {
    surfaces: SlotMap<PickSurfaceId, EdgeId>,
}

impl PickRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface and returns its ID.
    pub fn register(&mut self, edge: EdgeId) -> PickSurfaceId {
        self.surfaces.insert(edge)
    }

    /// Returns the edge owning the given surface, if still registered.
    #[must_use]
    pub fn owner(&self, id: PickSurfaceId) -> Option<EdgeId> {
        self.surfaces.get(id).copied()
    }

    /// Unregisters a surface, returning its owning edge.
    pub fn remove(&mut self, id: PickSurfaceId) -> Option<EdgeId> {
        self.surfaces.remove(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::model::{RoomData, WallData};

    use super::*;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn isolated_edge(store: &mut PlanStore) -> EdgeId {
        let room = store.add_room(RoomData::new());
        let wall = store.add_wall(WallData::new(p(0.0, 0.0), p(4.0, 0.0), 1.0, 2.5));
        store.add_boundary_edge(room, wall, true).unwrap()
    }

    #[test]
    fn quad_spans_floor_to_wall_height() {
        let mut store = PlanStore::new();
        let edge = isolated_edge(&mut store);
        BuildPickSurface::new(edge).execute(&mut store).unwrap();

        let pick = store.edge(edge).unwrap().pick.as_ref().unwrap();
        assert!(!pick.visible);
        assert_eq!(pick.mesh.indices, vec![[0, 1, 2], [0, 2, 3]]);

        // Interior line of the isolated wall runs (0, 0.5) → (4, 0.5).
        let v = &pick.mesh.vertices;
        assert_eq!(v.len(), 4);
        for (i, (x, h, z)) in [
            (0.0, 0.0, 0.5),
            (4.0, 0.0, 0.5),
            (4.0, 2.5, 0.5),
            (0.0, 2.5, 0.5),
        ]
        .iter()
        .enumerate()
        {
            assert!(
                (v[i].x - x).abs() < TOL && (v[i].y - h).abs() < TOL && (v[i].z - z).abs() < TOL,
                "vertex {i} = {:?}",
                v[i]
            );
        }

        // Horizontal unit normal, perpendicular to the interior line.
        for n in &pick.mesh.normals {
            assert!((n.norm() - 1.0).abs() < TOL && n.y.abs() < TOL && n.x.abs() < TOL);
        }

        // UVs run distance-along × elevation.
        assert!((pick.mesh.uvs[1].x - 4.0).abs() < TOL);
        assert!((pick.mesh.uvs[2].y - 2.5).abs() < TOL);
    }

    #[test]
    fn build_caches_both_frame_pairs() {
        let mut store = PlanStore::new();
        let edge = isolated_edge(&mut store);
        assert!(store.edge(edge).unwrap().frames.is_none());

        BuildPickSurface::new(edge).execute(&mut store).unwrap();
        let frames = store.edge(edge).unwrap().frames.unwrap();

        // Interior and exterior lines sit on opposite sides, so the frames
        // differ.
        assert_ne!(frames.interior.transform, frames.exterior.transform);
    }

    #[test]
    fn caches_persist_until_invalidated() {
        let mut store = PlanStore::new();
        let edge = isolated_edge(&mut store);
        BuildPickSurface::new(edge).execute(&mut store).unwrap();

        // Moving the wall does not touch the cached bundle.
        let wall = store.edge(edge).unwrap().wall;
        store.wall_mut(wall).unwrap().end = p(8.0, 0.0);
        let stale = store.edge(edge).unwrap().pick.as_ref().unwrap();
        assert!((stale.mesh.vertices[1].x - 4.0).abs() < TOL);

        store.invalidate_derived(edge).unwrap();
        let e = store.edge(edge).unwrap();
        assert!(e.pick.is_none() && e.frames.is_none());

        BuildPickSurface::new(edge).execute(&mut store).unwrap();
        let rebuilt = store.edge(edge).unwrap().pick.as_ref().unwrap();
        assert!((rebuilt.mesh.vertices[1].x - 8.0).abs() < TOL);
    }

    #[test]
    fn registry_resolves_the_owning_edge() {
        let mut store = PlanStore::new();
        let edge = isolated_edge(&mut store);

        let mut registry = PickRegistry::new();
        let id = registry.register(edge);
        assert_eq!(registry.owner(id), Some(edge));
        assert_eq!(registry.remove(id), Some(edge));
        assert_eq!(registry.owner(id), None);
    }
}

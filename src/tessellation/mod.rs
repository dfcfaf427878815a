mod pick_surface;

pub use pick_surface::{BuildPickSurface, PickRegistry, PickSurfaceId};

use crate::math::{Point2, Point3, Vector3};

/// A triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

/// Intersection-test surface for one side of a wall.
///
/// A vertical quad over the interior boundary line, used purely for
/// ray/pick intersection. Resolve the owning edge through a
/// [`PickRegistry`] rather than through the mesh itself.
#[derive(Debug, Clone)]
pub struct PickSurface {
    /// The two-triangle quad geometry.
    pub mesh: TriangleMesh,
    /// Always `false`; the surface participates in picking, not rendering.
    pub visible: bool,
}

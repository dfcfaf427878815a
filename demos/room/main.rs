//! Muralis demo — builds a square room and prints each wall side's
//! mitered boundary.
//!
//! Usage:
//! ```text
//! cargo run --example room
//! ```

use muralis::math::Point2;
use muralis::model::{PlanStore, RoomData, SurfaceSpec, WallData};
use muralis::operations::EdgeOutline;
use muralis::tessellation::{BuildPickSurface, PickRegistry};

fn main() -> muralis::Result<()> {
    // Default: WARN for everything, INFO for muralis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=muralis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("room=info".parse().unwrap_or_default())
        .add_directive("muralis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = PlanStore::new();
    let room = store.add_room(RoomData::new());

    // 10×8 room, 0.3-thick walls, listed so the interior lands on the
    // offset side.
    let corners = [
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 8.0),
        Point2::new(0.0, 8.0),
    ];
    let edges: Vec<_> = (0..corners.len())
        .map(|i| {
            let wall = store.add_wall(WallData::new(
                corners[i],
                corners[(i + 1) % corners.len()],
                0.3,
                2.7,
            ));
            store.add_boundary_edge(room, wall, true)
        })
        .collect::<Result<_, _>>()?;
    store.wire_loop(&edges)?;

    let mut registry = PickRegistry::new();
    for (i, &edge) in edges.iter().enumerate() {
        store.set_surface(edge, SurfaceSpec::new("plaster.png", false, 1.0))?;
        BuildPickSurface::new(edge).execute(&mut store)?;
        let pick_id = registry.register(edge);

        let outline = EdgeOutline::new(edge);
        let quad = outline.corners(&store)?;
        println!("wall side {i} (pick {pick_id:?})");
        for (label, p) in ["int start", "int end", "ext end", "ext start"]
            .iter()
            .zip(quad.iter())
        {
            println!("  {label}: ({:.3}, {:.3})", p.x, p.y);
        }
        println!(
            "  visible length {:.3}, center ({:.3}, {:.3})",
            outline.interior_distance(&store)?,
            outline.interior_center(&store)?.x,
            outline.interior_center(&store)?.y,
        );
    }

    Ok(())
}

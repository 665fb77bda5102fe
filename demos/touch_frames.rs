//! Simulates a few seconds of jittery touch input and shows how the movement
//! threshold keeps the engine from rebuilding every frame
//!
//! Run with `RUST_LOG=planar_voronoi=debug` to see each rebuild.

use planar_voronoi::generation::jitter_points;
use planar_voronoi::*;
use tracing_subscriber::EnvFilter;

const WIDTH: f64 = 1280.0;
const HEIGHT: f64 = 720.0;
const FRAMES: u64 = 90;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EngineConfigBuilder::new().movement_threshold(15.0)?.build()?;
    let mut engine = VoronoiEngine::with_config(config);

    let touches = vec![
        Point::new(300.0, 200.0),
        Point::new(900.0, 260.0),
        Point::new(620.0, 540.0),
    ];

    let mut rebuilds = 0;
    for frame in 0..FRAMES {
        // Fingers wobble by up to a pixel; from frame 30 the first one slides right
        let mut current = jitter_points(&touches, 1.0, frame);
        if frame >= 30 {
            current[0].x += (frame - 30) as f64 * 4.0;
        }

        if engine.set_points(&with_corner_anchors(&current, WIDTH, HEIGHT)) {
            rebuilds += 1;
        }

        // Only the first cells belong to real touches, the rest are anchors
        let areas: Vec<f64> = engine
            .voronoi_polygons()
            .iter()
            .take(touches.len())
            .map(|cell| cell.area())
            .collect();

        if frame % 15 == 0 {
            println!("frame {:>3}: revision {:>3}, cell areas {:.0?}", frame, engine.revision(), areas);
        }
    }

    println!("\n{} frames, {} rebuilds", FRAMES, rebuilds);

    #[cfg(feature = "spatial-index")]
    {
        let probe = Point::new(WIDTH / 2.0, HEIGHT / 2.0);
        if let Some(owner) = engine.find_cell_at(probe) {
            println!("Screen center belongs to touch {}", owner);
        }
    }

    Ok(())
}

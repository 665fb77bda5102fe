//! Picks a starting player from the fingers on the screen: every finger gets
//! its cell, then one cell is drawn at random

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use planar_voronoi::*;

const WIDTH: f64 = 1080.0;
const HEIGHT: f64 = 1920.0;

fn main() -> Result<()> {
    let screen = Rect::new(Point::ZERO, Point::new(WIDTH, HEIGHT));
    let fingers = random_points(5, screen, 2024);

    let mut engine = VoronoiEngine::new();
    engine.set_points(&with_corner_anchors(&fingers, WIDTH, HEIGHT));

    println!("Triangulation: {} faces", engine.triangulation().len());
    for circle in engine.circumcircles() {
        println!("  circumcircle at ({:.1}, {:.1}) r={:.1}", circle.center.x, circle.center.y, circle.radius);
    }

    println!("\nCells:");
    for cell in engine.voronoi_polygons().iter().take(fingers.len()) {
        println!(
            "  finger {} at ({:.0}, {:.0}): {} corners, area {:.0}, neighbors {:?}",
            cell.id,
            cell.site.x,
            cell.site.y,
            cell.vertex_count(),
            cell.area(),
            cell.neighbors
        );
    }

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let winner = rng.gen_range(0..fingers.len());
    let cell = engine.polygon(winner)?;
    println!("\nStarting player: finger {} (centroid {:.0?})", winner, cell.centroid());

    Ok(())
}

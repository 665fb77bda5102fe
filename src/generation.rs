//! Point sets for feeding the engine
//!
//! Seeded random layouts for demos and tests, and the far-off corner anchors
//! the touch picker appends to its live points so that every real cell is
//! closed and lies well inside the bounding quad.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::geometry::{Point, Rect};

/// Four points one screen away from each side of a `width` x `height` screen
///
/// Order: top-left, bottom-left, bottom-right, top-right (y-down screen
/// coordinates), i.e. `(-w, -h)`, `(-w, 2h)`, `(2w, 2h)`, `(2w, -h)`.
///
/// # Example
///
/// ```rust
/// use planar_voronoi::generation::corner_anchors;
/// use planar_voronoi::geometry::Point;
///
/// let anchors = corner_anchors(800.0, 600.0);
/// assert_eq!(anchors[0], Point::new(-800.0, -600.0));
/// assert_eq!(anchors[2], Point::new(1600.0, 1200.0));
/// ```
pub fn corner_anchors(width: f64, height: f64) -> [Point; 4] {
    [
        Point::new(-width, -height),
        Point::new(-width, 2.0 * height),
        Point::new(2.0 * width, 2.0 * height),
        Point::new(2.0 * width, -height),
    ]
}

/// `points` followed by the four [`corner_anchors`]
///
/// The anchors come last so that cell `i` of the result still belongs to
/// `points[i]`.
pub fn with_corner_anchors(points: &[Point], width: f64, height: f64) -> Vec<Point> {
    let mut all = Vec::with_capacity(points.len() + 4);
    all.extend_from_slice(points);
    all.extend(corner_anchors(width, height));
    all
}

/// Uniformly distributed points inside `bounds`
///
/// The same seed always produces the same points.
pub fn random_points(count: usize, bounds: Rect, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let size = Point::new(bounds.width(), bounds.height());

    (0..count)
        .map(|_| {
            let t = Point::new(rng.gen::<f64>(), rng.gen::<f64>());
            bounds.min + t * size
        })
        .collect()
}

/// Move every point by a random offset of at most `max_offset` per axis
///
/// Simulates the small frame-to-frame wobble of tracked touch positions.
pub fn jitter_points(points: &[Point], max_offset: f64, seed: u64) -> Vec<Point> {
    if max_offset <= 0.0 {
        return points.to_vec();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    points
        .iter()
        .map(|&p| {
            let dx = rng.gen_range(-max_offset..=max_offset);
            let dy = rng.gen_range(-max_offset..=max_offset);
            p + Point::new(dx, dy)
        })
        .collect()
}

//! Bowyer–Watson incremental insertion
//!
//! # Algorithm
//!
//! 1. Pad the bounding box of the input and put a vertex on each corner
//! 2. Split the padded quad into two faces along one diagonal
//! 3. For each input point, in order:
//!    - mark every face whose circumcircle strictly contains the point as bad
//!    - collect the distinct corners of the bad faces and sort them by angle
//!      around the point; the cavity is star-shaped around the point, so this
//!      order walks its boundary
//!    - drop the bad faces and fan the cavity boundary to the new point
//!
//! The bounding faces are split off afterwards by [`Triangulation::new`].

use std::time::Instant;

use super::{Face, Triangulation, Vertex};
use crate::config::BoundsPadding;
use crate::geometry::{sort_by_angle_around, Point, Rect};

/// Triangulate `points` inside a quad padded according to `padding`
///
/// Vertex `i + 4` of the result is `points[i]`. Returns an empty
/// triangulation when fewer than three points are given, when any coordinate
/// is not finite, or when every point lies on one line.
///
/// # Example
///
/// ```rust
/// use planar_voronoi::config::BoundsPadding;
/// use planar_voronoi::geometry::Point;
/// use planar_voronoi::triangulation::triangulate;
///
/// let points = [Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(50.0, 100.0)];
/// let tri = triangulate(&points, BoundsPadding::Legacy);
/// assert_eq!(tri.faces().len(), 1);
/// ```
pub fn triangulate(points: &[Point], padding: BoundsPadding) -> Triangulation {
    if points.len() < 3 {
        return Triangulation::empty();
    }

    if points.iter().any(|p| !p.is_finite()) {
        tracing::warn!("[Voronoi] skipping triangulation: input contains non-finite coordinates");
        return Triangulation::empty();
    }

    if is_collinear(points) {
        tracing::warn!(
            "[Voronoi] skipping triangulation: all {} points are collinear",
            points.len()
        );
        return Triangulation::empty();
    }

    let Some(bounds) = Rect::from_points(points) else {
        return Triangulation::empty();
    };
    let bounds = bounds.extended(padding);

    let start = Instant::now();

    let mut vertices: Vec<Vertex> = bounds
        .corners()
        .iter()
        .enumerate()
        .map(|(id, &corner)| Vertex::new(id, corner))
        .collect();
    vertices.reserve(points.len());

    // [/] : the quad split along its bottom-left to top-right diagonal
    let mut faces = vec![
        Face::new(vertices[0], vertices[1], vertices[3]),
        Face::new(vertices[1], vertices[2], vertices[3]),
    ];

    for &point in points {
        let vertex = Vertex::new(vertices.len(), point);
        vertices.push(vertex);
        faces = insert_vertex(faces, vertex, &vertices);
    }

    let triangulation = Triangulation::new(vertices, faces, bounds);

    tracing::debug!(
        "[Voronoi] triangulated {} points: {} faces ({} touching bounds) in {:?}",
        points.len(),
        triangulation.faces().len(),
        triangulation.bounding_faces().len(),
        start.elapsed()
    );

    triangulation
}

/// Insert one vertex, returning the re-triangulated face list
fn insert_vertex(faces: Vec<Face>, vertex: Vertex, vertices: &[Vertex]) -> Vec<Face> {
    if vertices[..vertex.id].iter().any(|v| v.position == vertex.position) {
        tracing::warn!(
            "[Voronoi] point {} at {:?} duplicates an earlier point and is left out",
            vertex.input_index().unwrap_or(vertex.id),
            vertex.position
        );
        return faces;
    }

    let (bad_faces, mut faces): (Vec<Face>, Vec<Face>) = faces
        .into_iter()
        .partition(|f| f.circumcircle().contains(vertex.position));

    if bad_faces.is_empty() {
        tracing::warn!(
            "[Voronoi] point {} at {:?} is inside no circumcircle and is left out",
            vertex.input_index().unwrap_or(vertex.id),
            vertex.position
        );
        return faces;
    }

    let mut hole_ids: Vec<usize> = bad_faces.iter().flat_map(Face::vertex_ids).collect();
    hole_ids.sort_unstable();
    hole_ids.dedup();

    let hole: Vec<Vertex> = sort_by_angle_around(
        hole_ids.into_iter().map(|id| vertices[id]).collect(),
        vertex.position,
        |v| v.position,
    );

    faces.reserve(hole.len());
    for (i, &from) in hole.iter().enumerate() {
        let to = hole[(i + 1) % hole.len()];
        faces.push(Face::new(from, to, vertex));
    }

    faces
}

/// Whether every point lies on a single line (coincident points included)
fn is_collinear(points: &[Point]) -> bool {
    let Some(&origin) = points.first() else {
        return true;
    };
    let Some(&pivot) = points.iter().find(|&&p| p != origin) else {
        return true;
    };

    let axis = pivot - origin;
    let axis_len = axis.length();

    points.iter().all(|&p| {
        let d = p - origin;
        axis.perp_dot(d).abs() <= 4.0 * f64::EPSILON * axis_len * d.length()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::random_points;
    use crate::triangulation::BOUNDING_VERTEX_COUNT;
    use std::collections::HashMap;

    #[test]
    fn test_three_points_single_face() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 100.0),
        ];
        let tri = triangulate(&points, BoundsPadding::Legacy);

        assert_eq!(tri.faces().len(), 1);
        let mut ids = tri.faces()[0].vertex_ids();
        ids.sort_unstable();
        assert_eq!(ids, [4, 5, 6]);
        assert!(tri.validate().is_ok());
    }

    #[test]
    fn test_too_few_points() {
        assert!(triangulate(&[], BoundsPadding::Legacy).is_empty());
        assert!(triangulate(&[Point::ZERO], BoundsPadding::Legacy).is_empty());

        let two = [Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        let tri = triangulate(&two, BoundsPadding::Legacy);
        assert!(tri.is_empty());
        assert!(tri.vertices().is_empty());
    }

    #[test]
    fn test_collinear_input_is_skipped() {
        let diagonal: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();
        assert!(triangulate(&diagonal, BoundsPadding::Legacy).is_empty());

        let horizontal: Vec<Point> = (0..4).map(|i| Point::new(i as f64 * 10.0, 3.0)).collect();
        assert!(triangulate(&horizontal, BoundsPadding::Legacy).is_empty());

        let same = [Point::new(1.0, 1.0); 5];
        assert!(triangulate(&same, BoundsPadding::Legacy).is_empty());
    }

    #[test]
    fn test_non_finite_input_is_skipped() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 1.0),
            Point::new(3.0, 7.0),
        ];
        assert!(triangulate(&points, BoundsPadding::Legacy).is_empty());
    }

    #[test]
    fn test_is_collinear() {
        assert!(is_collinear(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(-3.0, -3.0)]));
        assert!(!is_collinear(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(1.0, 0.0)]));
        assert!(!is_collinear(&[
            Point::new(2.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(4.0, 2.0),
            Point::new(3.0, 9.0),
        ]));
    }

    #[test]
    fn test_square_with_center() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(5.0, 5.0),
        ];
        let tri = triangulate(&points, BoundsPadding::Legacy);

        // The center splits the square into four faces
        assert_eq!(tri.faces().len(), 4);
        for face in tri.faces() {
            assert!(face.contains_vertex(BOUNDING_VERTEX_COUNT + 4));
        }
        assert!(tri.validate().is_ok());
    }

    #[test]
    fn test_random_points_are_delaunay() {
        for seed in 0..10 {
            let bounds = Rect::new(Point::new(0.0, 0.0), Point::new(800.0, 600.0));
            let points = random_points(40, bounds, seed);
            let tri = triangulate(&points, BoundsPadding::Legacy);

            assert!(tri.validate().is_ok(), "seed {} produced a non-Delaunay triangulation", seed);
        }
    }

    #[test]
    fn test_extended_triangulation_is_manifold() {
        let bounds = Rect::new(Point::new(-50.0, -50.0), Point::new(50.0, 50.0));
        let points = random_points(30, bounds, 7);
        let tri = triangulate(&points, BoundsPadding::Symmetric { margin: 0.1 });

        // Every edge is shared by at most two faces
        let mut edge_use: HashMap<(usize, usize), usize> = HashMap::new();
        for face in tri.all_faces() {
            let [a, b, c] = face.vertex_ids();
            for (u, v) in [(a, b), (b, c), (c, a)] {
                *edge_use.entry((u.min(v), u.max(v))).or_insert(0) += 1;
            }
        }
        assert!(edge_use.values().all(|&n| n <= 2));

        // Euler: a triangulated quad with n interior points has 2n + 2 faces
        assert_eq!(tri.all_faces().count(), 2 * points.len() + 2);

        // The faces tile the padded quad exactly
        let quad = tri.bounds().unwrap();
        let covered: f64 = tri.all_faces().map(|f| f.triangle().area()).sum();
        approx::assert_relative_eq!(covered, quad.width() * quad.height(), max_relative = 1e-9);
    }

    #[test]
    fn test_duplicate_point_is_left_out() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
            Point::new(10.0, 0.0),
        ];
        let tri = triangulate(&points, BoundsPadding::Legacy);

        // The duplicate keeps its ID but belongs to no face
        assert_eq!(tri.sites().len(), 4);
        assert!(tri.all_faces().all(|f| !f.contains_vertex(BOUNDING_VERTEX_COUNT + 3)));
        assert_eq!(tri.faces().len(), 1);
    }
}

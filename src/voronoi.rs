//! Voronoi cell construction from Delaunay triangulation
//!
//! Each cell is made of the circumcenters of the faces around its site,
//! ordered by angle around the site.

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use crate::cell::VoronoiPolygon;
use crate::config::CellClosure;
use crate::geometry::{sort_by_angle_around, Point};
use crate::triangulation::{Face, Triangulation, Vertex};

/// Type alias for vertex-face adjacency map
type VertexFaceMap<'a> = HashMap<usize, Vec<&'a Face>>;

/// Derive one polygon per site of `triangulation`, in input order
///
/// With [`CellClosure::Bounded`] every face takes part, so cells on the hull
/// are closed by the circumcenters of faces touching the bounding quad. With
/// [`CellClosure::Interior`] those faces are skipped.
///
/// Neighbors always come from the full triangulation. A site that is not
/// part of any face (a duplicated point) gets an empty polygon.
pub fn extract_polygons(triangulation: &Triangulation, closure: CellClosure) -> Vec<VoronoiPolygon> {
    let start = Instant::now();
    let vertex_face_map = build_vertex_face_map(triangulation.all_faces());

    let polygons: Vec<VoronoiPolygon> = triangulation
        .sites()
        .iter()
        .filter_map(|site| {
            let id = site.input_index()?;
            let adjacent = vertex_face_map.get(&site.id).map(Vec::as_slice).unwrap_or(&[]);

            let circumcenters: Vec<Point> = adjacent
                .iter()
                .filter(|f| closure == CellClosure::Bounded || !f.touches_bounds())
                .map(|f| f.circumcenter())
                .collect();
            let vertices = sort_by_angle_around(circumcenters, site.position, |p| *p);

            Some(VoronoiPolygon::new(id, site.position, find_neighbors(site, adjacent), vertices))
        })
        .collect();

    tracing::debug!(
        "[Voronoi] derived {} cells ({:?}) in {:?}",
        polygons.len(),
        closure,
        start.elapsed()
    );

    polygons
}

/// Build map from vertex ID to every face that has it as a corner
fn build_vertex_face_map<'a>(faces: impl Iterator<Item = &'a Face>) -> VertexFaceMap<'a> {
    let mut map: VertexFaceMap<'a> = HashMap::new();

    for face in faces {
        for id in face.vertex_ids() {
            map.entry(id).or_default().push(face);
        }
    }

    map
}

/// Input indices of the sites sharing a face with `site`, ascending
fn find_neighbors(site: &Vertex, adjacent: &[&Face]) -> Vec<usize> {
    let neighbors: BTreeSet<usize> = adjacent
        .iter()
        .flat_map(|f| f.vertices().iter())
        .filter(|v| v.id != site.id)
        .filter_map(Vertex::input_index)
        .collect();

    neighbors.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundsPadding;
    use crate::generation::random_points;
    use crate::geometry::Rect;
    use crate::triangulation::triangulate;

    fn triangle_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 100.0),
        ]
    }

    #[test]
    fn test_one_polygon_per_site() {
        let tri = triangulate(&triangle_points(), BoundsPadding::Legacy);
        let polygons = extract_polygons(&tri, CellClosure::Bounded);

        assert_eq!(polygons.len(), 3);
        for (i, polygon) in polygons.iter().enumerate() {
            assert_eq!(polygon.id, i);
            assert_eq!(polygon.site, triangle_points()[i]);
            assert!(polygon.is_closed());
            assert!(polygon.is_convex());
            assert!(polygon.contains(polygon.site));
        }
    }

    #[test]
    fn test_interior_closure_uses_only_input_faces() {
        let tri = triangulate(&triangle_points(), BoundsPadding::Legacy);
        let polygons = extract_polygons(&tri, CellClosure::Interior);

        // One interior face, so every cell is that face's circumcenter alone
        let center = tri.faces()[0].circumcenter();
        assert_eq!(polygons.len(), 3);
        for polygon in &polygons {
            assert_eq!(polygon.vertices, vec![center]);
        }
    }

    #[test]
    fn test_neighbors() {
        let tri = triangulate(&triangle_points(), BoundsPadding::Legacy);
        let polygons = extract_polygons(&tri, CellClosure::Bounded);

        assert_eq!(polygons[0].neighbors, vec![1, 2]);
        assert_eq!(polygons[1].neighbors, vec![0, 2]);
        assert_eq!(polygons[2].neighbors, vec![0, 1]);
    }

    #[test]
    fn test_neighbor_symmetry() {
        let bounds = Rect::new(Point::new(0.0, 0.0), Point::new(1000.0, 700.0));
        let points = random_points(50, bounds, 12345);
        let tri = triangulate(&points, BoundsPadding::Legacy);
        let polygons = extract_polygons(&tri, CellClosure::Bounded);

        for polygon in &polygons {
            assert!(!polygon.neighbors.is_empty());
            for &neighbor_id in &polygon.neighbors {
                assert!(
                    polygons[neighbor_id].is_neighbor_of(polygon.id),
                    "Neighbor relationship should be symmetric"
                );
            }
        }
    }

    #[test]
    fn test_cells_vertex_count_matches_degree() {
        let bounds = Rect::new(Point::new(-20.0, -20.0), Point::new(20.0, 20.0));
        let points = random_points(25, bounds, 3);
        let tri = triangulate(&points, BoundsPadding::Legacy);
        let polygons = extract_polygons(&tri, CellClosure::Bounded);

        for (polygon, site) in polygons.iter().zip(tri.sites()) {
            let degree = tri.all_faces().filter(|f| f.contains_vertex(site.id)).count();
            assert_eq!(polygon.vertex_count(), degree);
            assert!(degree >= 3);
        }
    }

    #[test]
    fn test_empty_triangulation_has_no_cells() {
        let polygons = extract_polygons(&Triangulation::empty(), CellClosure::Bounded);
        assert!(polygons.is_empty());
    }
}

//! Voronoi Cell Structure
//!
//! One convex polygon per input point, with its neighbors in the Delaunay graph.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Relative tolerance for the turn tests in [`VoronoiPolygon::is_convex`] and
/// [`VoronoiPolygon::contains`]
const TURN_TOLERANCE: f64 = 1e-9;

/// The Voronoi cell of one input point
///
/// Each cell holds:
/// - the index of the input point it belongs to
/// - the input point itself (the site)
/// - the indices of adjacent cells
/// - the boundary polygon, ordered by angle around the site
///
/// Vertices are the circumcenters of the Delaunay faces around the site, so
/// two consecutive vertices may coincide when four or more points are
/// co-circular.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiPolygon {
    /// Index of the owning point in the last accepted point list
    pub id: usize,

    /// The owning point
    pub site: Point,

    /// Indices of cells sharing a Delaunay edge with this one, ascending
    pub neighbors: Vec<usize>,

    /// Boundary polygon, counter-clockwise in y-up coordinates
    /// (clockwise on a y-down screen)
    pub vertices: Vec<Point>,
}

impl VoronoiPolygon {
    pub fn new(id: usize, site: Point, neighbors: Vec<usize>, vertices: Vec<Point>) -> Self {
        Self {
            id,
            site,
            neighbors,
            vertices,
        }
    }

    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn is_neighbor_of(&self, other_id: usize) -> bool {
        self.neighbors.binary_search(&other_id).is_ok()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the boundary encloses an area (at least three vertices)
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Consecutive vertex pairs, wrapping from the last vertex to the first
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Area enclosed by the boundary (shoelace formula)
    pub fn area(&self) -> f64 {
        if !self.is_closed() {
            return 0.0;
        }
        self.doubled_signed_area().abs() * 0.5
    }

    /// Area-weighted centroid, or the site for open or zero-area cells
    pub fn centroid(&self) -> Point {
        let doubled = self.doubled_signed_area();
        if !self.is_closed() || doubled == 0.0 {
            return self.site;
        }

        let sum: Point = self
            .edges()
            .map(|(a, b)| (a + b) * a.perp_dot(b))
            .sum();
        sum / (3.0 * doubled)
    }

    /// Whether walking the boundary never turns both left and right
    ///
    /// Collinear and repeated vertices are ignored.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }

        let mut left = false;
        let mut right = false;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let (ab, bc) = (b - a, c - b);
            let cross = ab.perp_dot(bc);
            if cross.abs() <= TURN_TOLERANCE * ab.length() * bc.length() {
                continue;
            }
            if cross > 0.0 {
                left = true;
            } else {
                right = true;
            }
        }

        !(left && right)
    }

    /// Whether `point` lies inside or on the boundary of a closed convex cell
    pub fn contains(&self, point: Point) -> bool {
        if !self.is_closed() {
            return false;
        }

        let mut left = false;
        let mut right = false;
        for (a, b) in self.edges() {
            let (ab, ap) = (b - a, point - a);
            let cross = ab.perp_dot(ap);
            if cross.abs() <= TURN_TOLERANCE * ab.length() * ap.length() {
                continue;
            }
            if cross > 0.0 {
                left = true;
            } else {
                right = true;
            }
        }

        !(left && right)
    }

    fn doubled_signed_area(&self) -> f64 {
        self.edges().map(|(a, b)| a.perp_dot(b)).sum()
    }
}

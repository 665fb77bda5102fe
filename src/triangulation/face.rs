use super::Vertex;
use crate::geometry::{Circumcircle, Point, Triangle};

/// A triangulation facet: three vertices and their circumcircle
///
/// The circumcircle is computed once on construction. A face whose corners
/// are collinear gets an unbounded circle centered on its centroid, so the
/// next inserted point always treats it as bad and removes it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    vertices: [Vertex; 3],
    circumcircle: Circumcircle,
}

impl Face {
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        let triangle = Triangle::new(a.position, b.position, c.position);
        let circumcircle = triangle.circumcircle().unwrap_or_else(|| {
            let centroid = (a.position + b.position + c.position) / 3.0;
            Circumcircle::unbounded(centroid)
        });

        Self {
            vertices: [a, b, c],
            circumcircle,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_ids(&self) -> [usize; 3] {
        [self.vertices[0].id, self.vertices[1].id, self.vertices[2].id]
    }

    #[inline]
    pub fn contains_vertex(&self, id: usize) -> bool {
        self.vertices.iter().any(|v| v.id == id)
    }

    /// Whether any corner is a bounding-quad vertex
    #[inline]
    pub fn touches_bounds(&self) -> bool {
        self.vertices.iter().any(Vertex::is_bounding)
    }

    pub fn triangle(&self) -> Triangle {
        Triangle::new(
            self.vertices[0].position,
            self.vertices[1].position,
            self.vertices[2].position,
        )
    }

    #[inline]
    pub fn circumcircle(&self) -> &Circumcircle {
        &self.circumcircle
    }

    #[inline]
    pub fn circumcenter(&self) -> Point {
        self.circumcircle.center
    }
}

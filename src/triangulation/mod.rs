//! Delaunay triangulation of a planar point set
//!
//! Built with Bowyer–Watson insertion inside a padded bounding quad. The
//! quad's four corners are real vertices of the triangulation (IDs 0–3); the
//! faces that touch them are kept apart from the faces over the caller's
//! points so the dual extractor can still use them to close hull cells.

mod bowyer_watson;
mod face;
mod vertex;

pub use bowyer_watson::triangulate;
pub use face::Face;
pub use vertex::{Vertex, BOUNDING_VERTEX_COUNT};

use crate::error::{Result, VoronoiError};
use crate::geometry::{Circumcircle, Rect};

/// Relative slack used by [`Triangulation::validate`] before a vertex counts
/// as inside a circumcircle
const VALIDATION_TOLERANCE: f64 = 1e-9;

/// The result of one triangulation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    /// Every vertex by ID: the bounding corners first, then the input points
    vertices: Vec<Vertex>,
    /// Faces whose corners are all input points
    faces: Vec<Face>,
    /// Faces with at least one bounding corner
    bounding_faces: Vec<Face>,
    /// The padded quad, `None` for an empty triangulation
    bounds: Option<Rect>,
}

impl Triangulation {
    /// A triangulation with no vertices and no faces
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(vertices: Vec<Vertex>, faces: Vec<Face>, bounds: Rect) -> Self {
        let (bounding_faces, faces): (Vec<Face>, Vec<Face>) =
            faces.into_iter().partition(Face::touches_bounds);

        Self {
            vertices,
            faces,
            bounding_faces,
            bounds: Some(bounds),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty() && self.bounding_faces.is_empty()
    }

    /// Faces over the input points only; bounding-quad faces are excluded
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Faces that touch at least one bounding vertex
    #[inline]
    pub fn bounding_faces(&self) -> &[Face] {
        &self.bounding_faces
    }

    /// Every face of the extended triangulation
    pub fn all_faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter().chain(self.bounding_faces.iter())
    }

    /// Every vertex, bounding corners included, indexed by ID
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertices created from input points, in input order
    pub fn sites(&self) -> &[Vertex] {
        self.vertices.get(BOUNDING_VERTEX_COUNT..).unwrap_or(&[])
    }

    /// The padded quad the triangulation was seeded with
    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Circumcircles of the non-bounding faces, for overlays
    pub fn circumcircles(&self) -> impl Iterator<Item = &Circumcircle> {
        self.faces.iter().map(Face::circumcircle)
    }

    /// Check the empty-circumcircle property over the extended triangulation
    ///
    /// Every vertex (bounding corners included) is tested against every face
    /// it is not a corner of. A vertex only counts as inside when it is closer
    /// to the center than `radius * (1 - 1e-9)`, so rounding on co-circular
    /// input is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `DelaunayViolation` for the first offending face/vertex pair,
    /// where `face` indexes [`Triangulation::all_faces`].
    pub fn validate(&self) -> Result<()> {
        for (face_idx, face) in self.all_faces().enumerate() {
            let circle = face.circumcircle();
            if !circle.is_bounded() {
                continue;
            }

            let limit = circle.radius * (1.0 - VALIDATION_TOLERANCE);
            let limit_sq = limit * limit;

            let offender = self.vertices.iter().find(|v| {
                !face.contains_vertex(v.id) && v.position.distance_squared(circle.center) < limit_sq
            });

            if let Some(vertex) = offender {
                return Err(VoronoiError::DelaunayViolation {
                    face: face_idx,
                    vertex: vertex.id,
                });
            }
        }

        Ok(())
    }
}

//! Error types for the Voronoi engine

use thiserror::Error;

/// Errors raised by configuration, cell queries and triangulation validation
///
/// Geometric degeneracies (too few points, collinear input, duplicates) are
/// not errors: the engine answers them with empty results instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VoronoiError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Movement threshold must be a finite, non-negative number
    #[error("movement threshold must be finite and >= 0 (got {0})")]
    InvalidThreshold(f64),
    /// Requested cell index does not exist
    #[error("cell not found: {0}")]
    CellNotFound(usize),
    /// A vertex lies strictly inside the circumcircle of a face
    #[error("face {face} violates the Delaunay property: vertex {vertex} lies inside its circumcircle")]
    DelaunayViolation {
        /// Index of the offending face in the triangulation's face list
        face: usize,
        /// ID of the vertex found inside the circumcircle
        vertex: usize,
    },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, VoronoiError>;

//! Voronoi cells for moving 2D point sets
//!
//! Given a list of points each frame (finger positions, dragged balls, ...),
//! the engine builds a Delaunay triangulation by Bowyer–Watson insertion
//! inside a padded bounding quad and derives one convex Voronoi cell per
//! point. Results are cached until the points move by more than a
//! configurable threshold.
//!
//! The crate does no rendering and no input handling: it takes coordinates
//! and hands back polygons.
//!
//! # Quick Start
//!
//! ```rust
//! use planar_voronoi::*;
//!
//! let config = EngineConfigBuilder::new()
//!     .movement_threshold(15.0)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! let mut engine = VoronoiEngine::with_config(config);
//!
//! // Live points plus far-off anchors so every real cell is closed
//! let touches = [Point::new(120.0, 300.0), Point::new(400.0, 180.0), Point::new(260.0, 520.0)];
//! engine.set_points(&with_corner_anchors(&touches, 800.0, 600.0));
//!
//! for cell in engine.voronoi_polygons().iter().take(touches.len()) {
//!     println!("cell {} has {} corners", cell.id, cell.vertex_count());
//! }
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-cell lookups using KD-tree
//! - `serde`: Enables serialization support for configuration, cells and faces

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod triangulation;
pub mod voronoi;
pub mod cell;
pub mod engine;
pub mod generation;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{VoronoiError, Result};
pub use config::{EngineConfig, EngineConfigBuilder, BoundsPadding, CellClosure};
pub use geometry::{Point, Rect, Triangle, Circumcircle};
pub use triangulation::{Face, Triangulation, Vertex, BOUNDING_VERTEX_COUNT};
pub use cell::VoronoiPolygon;
pub use engine::{VoronoiEngine, squared_displacement};
pub use generation::{corner_anchors, with_corner_anchors, random_points};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

//! Planar geometry primitives
//!
//! Points are `glam::DVec2`. Everything here is free of triangulation state
//! and can be used on its own.

mod angular;
mod bounds;
mod circle;

pub use angular::{angle_around, compare_by_angle, sort_by_angle_around};
pub use bounds::Rect;
pub use circle::{Circumcircle, Triangle};

/// A 2D coordinate
pub type Point = glam::DVec2;

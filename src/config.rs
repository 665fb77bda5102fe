//! Engine configuration and builder
//!
//! Controls the movement threshold used to gate rebuilds, how the bounding
//! quad is padded around the input, and how cells next to the bounding quad
//! are closed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoronoiError};

/// How the bounding quad is placed around the input points
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsPadding {
    /// Scale the bounding box by 1.1 keeping its top-left corner fixed, then
    /// move it back by 5% of the scaled size.
    ///
    /// The result is slightly off-center: 5.5% margin on the left/top sides and
    /// 4.5% on the right/bottom sides. This reproduces the historic layout
    /// exactly and is the default.
    Legacy,
    /// Grow the bounding box by `margin` (a fraction of its size) on every side
    Symmetric {
        /// Fraction of width/height added on each side, must be > 0
        margin: f64,
    },
}

impl Default for BoundsPadding {
    fn default() -> Self {
        BoundsPadding::Legacy
    }
}

/// Which faces take part in assembling each Voronoi cell
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellClosure {
    /// Use every face, including those touching the bounding vertices.
    ///
    /// Every cell is a closed convex polygon; cells on the hull of the input
    /// are cut off by the bounding quad.
    #[default]
    Bounded,
    /// Use only the faces that remain after the bounding vertices are culled.
    ///
    /// Interior cells are unchanged, but cells of hull points degrade to open
    /// chains of circumcenters. Callers that surround their points with far
    /// anchors (see [`crate::generation::corner_anchors`]) never see the
    /// difference.
    Interior,
}

/// Configuration for a [`crate::VoronoiEngine`]
///
/// # Example
///
/// ```rust
/// use planar_voronoi::*;
///
/// let config = EngineConfigBuilder::new()
///     .movement_threshold(15.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.movement_threshold, 15.0);
/// assert_eq!(config.bounds_padding, BoundsPadding::Legacy);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Default movement threshold for [`crate::VoronoiEngine::set_points`]
    ///
    /// A new point list with the same length as the stored one is ignored
    /// when the sum of squared per-index displacements is below this value.
    /// - 0.0: every call replaces the point set (default)
    /// - 15.0: what the touch picker uses to ignore finger jitter
    pub movement_threshold: f64,

    /// Placement of the four bounding vertices
    pub bounds_padding: BoundsPadding,

    /// Face selection used when assembling cells
    pub cell_closure: CellClosure,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            movement_threshold: 0.0,
            bounds_padding: BoundsPadding::default(),
            cell_closure: CellClosure::default(),
        }
    }
}

/// Builder for creating [`EngineConfig`] with validation
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    movement_threshold: f64,
    bounds_padding: BoundsPadding,
    cell_closure: CellClosure,
}

impl EngineConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - movement_threshold: 0.0
    /// - bounds_padding: Legacy
    /// - cell_closure: Bounded
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default movement threshold
    ///
    /// # Errors
    ///
    /// Returns `InvalidThreshold` if the threshold is negative or not finite
    pub fn movement_threshold(mut self, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(VoronoiError::InvalidThreshold(threshold));
        }
        self.movement_threshold = threshold;
        Ok(self)
    }

    /// Set the bounding quad padding
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a symmetric margin is not a positive finite number
    pub fn bounds_padding(mut self, padding: BoundsPadding) -> Result<Self> {
        if let BoundsPadding::Symmetric { margin } = padding {
            if !margin.is_finite() || margin <= 0.0 {
                return Err(VoronoiError::InvalidConfig(format!(
                    "symmetric bounds margin must be > 0 (got {})",
                    margin
                )));
            }
        }
        self.bounds_padding = padding;
        Ok(self)
    }

    /// Set how cells next to the bounding quad are closed
    pub fn cell_closure(mut self, closure: CellClosure) -> Self {
        self.cell_closure = closure;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        Ok(EngineConfig {
            movement_threshold: self.movement_threshold,
            bounds_padding: self.bounds_padding,
            cell_closure: self.cell_closure,
        })
    }
}

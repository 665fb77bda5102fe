//! VoronoiEngine main structure

use crate::cell::VoronoiPolygon;
use crate::config::EngineConfig;
use crate::error::{Result, VoronoiError};
use crate::geometry::{Circumcircle, Point};
use crate::triangulation::{triangulate, Face, Triangulation};
use crate::voronoi::extract_polygons;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// Voronoi cells for a moving point set
///
/// The engine keeps the last accepted point list and lazily derives the
/// triangulation and the cells from it. Both are cached until the point list
/// is replaced or [`clear`](Self::clear) is called.
///
/// Points are matched to the previous list by index when deciding whether
/// they moved enough to rebuild. Callers must keep each tracked entity at the
/// same index from frame to frame, otherwise the movement test compares
/// unrelated points.
///
/// An engine serves one point set. Keep one engine per independent set.
///
/// # Examples
///
/// ```
/// use planar_voronoi::*;
///
/// let mut engine = VoronoiEngine::new();
/// engine.set_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(100.0, 0.0),
///     Point::new(50.0, 100.0),
/// ]);
///
/// assert_eq!(engine.triangulation().len(), 1);
///
/// let cells = engine.voronoi_polygons();
/// assert_eq!(cells.len(), 3);
/// assert!(cells.iter().all(|c| c.contains(c.site)));
/// ```
#[derive(Clone, Default)]
pub struct VoronoiEngine {
    /// Configuration this engine was created with
    config: EngineConfig,

    /// Last accepted point list
    points: Vec<Point>,

    /// Number of accepted point lists so far
    revision: u64,

    /// Cached triangulation, `None` until requested
    triangulation: Option<Triangulation>,

    /// Cached cells, `None` until requested
    polygons: Option<Vec<VoronoiPolygon>>,

    /// Nearest-site index over `points`, built on first lookup
    #[cfg(feature = "spatial-index")]
    spatial_index: Option<SpatialIndex>,
}

impl VoronoiEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use planar_voronoi::*;
    ///
    /// let config = EngineConfigBuilder::new()
    ///     .movement_threshold(15.0)
    ///     .unwrap()
    ///     .build()
    ///     .unwrap();
    /// let engine = VoronoiEngine::with_config(config);
    /// assert_eq!(engine.config().movement_threshold, 15.0);
    /// ```
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The last accepted point list
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// How many point lists have been accepted
    ///
    /// Stays the same when a call to [`set_points`](Self::set_points) is
    /// rejected by the movement threshold.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the point set, gated by the configured movement threshold
    ///
    /// Returns `true` when the points were accepted.
    pub fn set_points(&mut self, points: &[Point]) -> bool {
        self.set_points_with_threshold(points, self.config.movement_threshold)
    }

    /// Replace the point set unless it barely moved
    ///
    /// When `points` has as many entries as the stored list and the sum of
    /// squared per-index displacements is below `threshold`, the call does
    /// nothing and returns `false`. Otherwise the points are stored, the cached
    /// triangulation and cells are dropped, and `true` is returned.
    ///
    /// With a threshold of 0 every call is accepted. A negative or NaN
    /// threshold is treated as 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use planar_voronoi::*;
    /// let mut engine = VoronoiEngine::new();
    /// let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 9.0)];
    /// assert!(engine.set_points_with_threshold(&points, 15.0));
    ///
    /// // One point moves by 2 units: 4 < 15, ignored
    /// let nudged = [Point::new(2.0, 0.0), points[1], points[2]];
    /// assert!(!engine.set_points_with_threshold(&nudged, 15.0));
    /// assert_eq!(engine.points(), &points);
    /// ```
    pub fn set_points_with_threshold(&mut self, points: &[Point], threshold: f64) -> bool {
        let threshold = if threshold >= 0.0 {
            threshold
        } else {
            tracing::warn!("[Voronoi] movement threshold {} is invalid, using 0", threshold);
            0.0
        };

        if points.len() == self.points.len() {
            let displacement = squared_displacement(&self.points, points);
            if displacement < threshold {
                tracing::trace!(
                    "[Voronoi] keeping {} points: displacement {:.4} < threshold {:.4}",
                    points.len(),
                    displacement,
                    threshold
                );
                return false;
            }
        }

        self.points = points.to_vec();
        self.revision += 1;
        self.clear();
        #[cfg(feature = "spatial-index")]
        {
            self.spatial_index = None;
        }

        tracing::debug!(
            "[Voronoi] accepted {} points (revision {})",
            self.points.len(),
            self.revision
        );

        true
    }

    /// Drop the cached triangulation and cells, keeping the points
    ///
    /// The next read rebuilds everything from the stored points.
    pub fn clear(&mut self) {
        self.triangulation = None;
        self.polygons = None;
    }

    /// Rebuild the triangulation now, even if a cached one exists
    ///
    /// Cached cells are dropped and derived again on the next read.
    pub fn rebuild(&mut self) -> &Triangulation {
        self.clear();
        self.ensure_triangulation()
    }

    /// Faces of the triangulation over the stored points
    ///
    /// Faces touching the bounding quad are excluded. Empty when fewer than
    /// three usable points are stored.
    pub fn triangulation(&mut self) -> &[Face] {
        self.ensure_triangulation().faces()
    }

    /// The whole triangulation, bounding faces and vertices included
    pub fn full_triangulation(&mut self) -> &Triangulation {
        self.ensure_triangulation()
    }

    /// Circumcircles of the faces returned by [`triangulation`](Self::triangulation)
    pub fn circumcircles(&mut self) -> impl Iterator<Item = &Circumcircle> + '_ {
        self.ensure_triangulation().circumcircles()
    }

    /// One cell per stored point, in the order the points were given
    ///
    /// Empty when fewer than three usable points are stored.
    pub fn voronoi_polygons(&mut self) -> &[VoronoiPolygon] {
        if self.polygons.is_none() {
            let closure = self.config.cell_closure;
            let polygons = extract_polygons(self.ensure_triangulation(), closure);
            self.polygons = Some(polygons);
        }

        self.polygons.as_deref().unwrap_or(&[])
    }

    /// The cell of the point at `index`
    ///
    /// # Errors
    ///
    /// Returns `CellNotFound` if no cell exists for `index`
    pub fn polygon(&mut self, index: usize) -> Result<&VoronoiPolygon> {
        self.voronoi_polygons()
            .get(index)
            .ok_or(VoronoiError::CellNotFound(index))
    }

    /// Index of the stored point whose cell contains `position`
    ///
    /// Answers with the nearest stored point, which is the owner of the cell
    /// containing `position`. `None` when no points are stored. Between exact
    /// duplicates either index may come back.
    #[cfg(feature = "spatial-index")]
    pub fn find_cell_at(&mut self, position: Point) -> Option<usize> {
        if self.spatial_index.is_none() {
            self.spatial_index = SpatialIndex::new(&self.points);
        }

        self.spatial_index
            .as_ref()
            .map(|index| index.find_nearest(position))
    }

    fn ensure_triangulation(&mut self) -> &Triangulation {
        let Self {
            triangulation,
            points,
            config,
            ..
        } = self;

        triangulation.get_or_insert_with(|| triangulate(points, config.bounds_padding))
    }
}

/// Sum of squared distances between points at equal indices
///
/// Extra points in the longer slice are ignored.
pub fn squared_displacement(previous: &[Point], next: &[Point]) -> f64 {
    previous
        .iter()
        .zip(next)
        .map(|(a, b)| a.distance_squared(*b))
        .sum()
}

//! Spatial indexing for fast position-to-cell lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

#[cfg(feature = "spatial-index")]
use crate::geometry::Point;

/// Wrapper around KD-tree for nearest-site queries
///
/// The Voronoi cell containing a position is the cell of the nearest site, so
/// a nearest-neighbor query answers "which cell is this pointer in".
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build an index over `sites`, `None` when there are no sites
    ///
    /// # Example
    ///
    /// ```
    /// use planar_voronoi::geometry::Point;
    /// use planar_voronoi::SpatialIndex;
    ///
    /// let sites = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 8.0)];
    /// let index = SpatialIndex::new(&sites).unwrap();
    /// assert_eq!(index.find_nearest(Point::new(9.0, 1.0)), 1);
    /// ```
    pub fn new(sites: &[Point]) -> Option<Self> {
        if sites.is_empty() {
            return None;
        }

        let points: Vec<[f64; 2]> = sites.iter().map(|p| [p.x, p.y]).collect();

        Some(Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        })
    }

    /// Index of the site nearest to `position`
    pub fn find_nearest(&self, position: Point) -> usize {
        let query = [position.x, position.y];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}

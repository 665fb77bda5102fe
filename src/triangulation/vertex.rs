use crate::geometry::Point;

/// Number of synthetic vertices placed on the bounding quad
///
/// They always take IDs `0..BOUNDING_VERTEX_COUNT`; input point `i` becomes
/// vertex `i + BOUNDING_VERTEX_COUNT`.
pub const BOUNDING_VERTEX_COUNT: usize = 4;

/// A point tagged with its insertion ID
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub id: usize,
    pub position: Point,
}

impl Vertex {
    #[inline]
    pub fn new(id: usize, position: Point) -> Self {
        Self { id, position }
    }

    /// Whether this is one of the four bounding-quad vertices
    #[inline]
    pub fn is_bounding(&self) -> bool {
        self.id < BOUNDING_VERTEX_COUNT
    }

    /// Index of the caller point this vertex came from, `None` for bounding vertices
    #[inline]
    pub fn input_index(&self) -> Option<usize> {
        self.id.checked_sub(BOUNDING_VERTEX_COUNT)
    }
}

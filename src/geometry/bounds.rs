//! Axis-aligned rectangles and the padded bounding quad

use super::Point;
use crate::config::BoundsPadding;

/// Scale applied to the bounding box by [`BoundsPadding::Legacy`]
const LEGACY_SCALE: f64 = 1.1;

/// Offset, as a fraction of the scaled size, applied by [`BoundsPadding::Legacy`]
const LEGACY_OFFSET: f64 = 0.05;

/// An axis-aligned rectangle
///
/// `min` is the left/top corner and `max` the right/bottom corner in screen
/// coordinates (y grows downward), or the lower-left/upper-right corners in
/// the usual mathematical orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Smallest x and y
    pub min: Point,
    /// Largest x and y
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from two corners
    pub fn new(min: Point, max: Point) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Smallest rectangle containing every point, `None` for an empty slice
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether `point` lies strictly inside the rectangle
    pub fn contains_strictly(&self, point: Point) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }

    /// Pad the rectangle so every point it bounded lies strictly inside
    pub fn extended(&self, padding: BoundsPadding) -> Self {
        match padding {
            BoundsPadding::Legacy => {
                let size = Point::new(self.width(), self.height()) * LEGACY_SCALE;
                let min = self.min - size * LEGACY_OFFSET;
                Self { min, max: min + size }
            }
            BoundsPadding::Symmetric { margin } => {
                let pad = Point::new(self.width(), self.height()) * margin;
                Self {
                    min: self.min - pad,
                    max: self.max + pad,
                }
            }
        }
    }

    /// The four corners: left/top, left/bottom, right/bottom, right/top
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.min.x, self.max.y),
            Point::new(self.max.x, self.max.y),
            Point::new(self.max.x, self.min.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points() {
        let points = [
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.5, 0.5),
        ];
        let rect = Rect::from_points(&points).unwrap();

        assert_eq!(rect.min, Point::new(-2.0, -1.0));
        assert_eq!(rect.max, Point::new(3.0, 4.0));
        assert_eq!(rect.width(), 5.0);
        assert_eq!(rect.height(), 5.0);

        assert!(Rect::from_points(&[]).is_none());
    }

    #[test]
    fn test_legacy_padding_is_asymmetric() {
        let rect = Rect::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let extended = rect.extended(BoundsPadding::Legacy);

        assert_relative_eq!(extended.min.x, -5.5, epsilon = 1e-9);
        assert_relative_eq!(extended.min.y, -5.5, epsilon = 1e-9);
        assert_relative_eq!(extended.max.x, 104.5, epsilon = 1e-9);
        assert_relative_eq!(extended.max.y, 104.5, epsilon = 1e-9);
        assert_relative_eq!(extended.width(), 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetric_padding() {
        let rect = Rect::new(Point::new(10.0, 20.0), Point::new(30.0, 60.0));
        let extended = rect.extended(BoundsPadding::Symmetric { margin: 0.1 });

        assert_relative_eq!(extended.min.x, 8.0);
        assert_relative_eq!(extended.min.y, 16.0);
        assert_relative_eq!(extended.max.x, 32.0);
        assert_relative_eq!(extended.max.y, 64.0);
    }

    #[test]
    fn test_extended_contains_original_points() {
        let points = [
            Point::new(12.0, 7.0),
            Point::new(-3.0, 40.0),
            Point::new(25.0, 18.0),
        ];
        let rect = Rect::from_points(&points).unwrap();

        for padding in [BoundsPadding::Legacy, BoundsPadding::Symmetric { margin: 0.05 }] {
            let extended = rect.extended(padding);
            for p in &points {
                assert!(extended.contains_strictly(*p), "{:?} outside {:?}", p, extended);
            }
        }
    }

    #[test]
    fn test_corner_order() {
        let rect = Rect::new(Point::new(0.0, 0.0), Point::new(2.0, 1.0));
        assert_eq!(
            rect.corners(),
            [
                Point::new(0.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(2.0, 1.0),
                Point::new(2.0, 0.0),
            ]
        );
    }
}

//! Triangles and circumcircles

use super::Point;

/// A triangle given by its three corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Twice the signed area; positive when `a, b, c` turn counter-clockwise
    #[inline]
    pub fn doubled_signed_area(&self) -> f64 {
        (self.b - self.a).perp_dot(self.c - self.a)
    }

    pub fn area(&self) -> f64 {
        self.doubled_signed_area().abs() * 0.5
    }

    /// The circle through all three corners
    ///
    /// Returns `None` when the corners are collinear (or coincide), since no
    /// finite circle passes through them.
    pub fn circumcircle(&self) -> Option<Circumcircle> {
        // Work relative to `a` to keep the magnitudes small
        let b = self.b - self.a;
        let c = self.c - self.a;
        let d = 2.0 * b.perp_dot(c);
        if d == 0.0 || !d.is_finite() {
            return None;
        }

        let b2 = b.length_squared();
        let c2 = c.length_squared();
        let offset = Point::new(c.y * b2 - b.y * c2, b.x * c2 - c.x * b2) / d;
        if !offset.is_finite() {
            return None;
        }

        Some(Circumcircle {
            center: self.a + offset,
            radius: offset.length(),
        })
    }
}

/// A circle given by center and radius
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle {
    pub center: Point,
    pub radius: f64,
}

impl Circumcircle {
    /// A circle that contains every finite point
    ///
    /// Stands in for the circumcircle of a degenerate triangle.
    pub fn unbounded(center: Point) -> Self {
        Self {
            center,
            radius: f64::INFINITY,
        }
    }

    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.radius.is_finite()
    }

    /// Whether `point` lies strictly inside the circle
    ///
    /// Points exactly on the boundary are outside. No exact arithmetic is
    /// used, so points within rounding distance of the boundary may land on
    /// either side.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.distance_squared(self.center) < self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circumcircle_right_triangle() {
        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0));
        let circle = tri.circumcircle().unwrap();

        // Hypotenuse is a diameter
        assert_relative_eq!(circle.center.x, 2.0);
        assert_relative_eq!(circle.center.y, 1.5);
        assert_relative_eq!(circle.radius, 2.5);
    }

    #[test]
    fn test_circumcircle_equidistant() {
        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(50.0, 100.0));
        let circle = tri.circumcircle().unwrap();

        assert_relative_eq!(circle.center.x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(circle.center.y, 37.5, epsilon = 1e-9);
        for p in [tri.a, tri.b, tri.c] {
            assert_relative_eq!(p.distance(circle.center), circle.radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_collinear_has_no_circumcircle() {
        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        assert!(tri.circumcircle().is_none());
        assert_eq!(tri.area(), 0.0);

        let point = Point::new(5.0, 5.0);
        assert!(Triangle::new(point, point, point).circumcircle().is_none());
    }

    #[test]
    fn test_contains_is_strict() {
        let circle = Circumcircle {
            center: Point::ZERO,
            radius: 1.0,
        };

        assert!(circle.contains(Point::new(0.5, 0.5)));
        assert!(!circle.contains(Point::new(1.0, 0.0)));
        assert!(!circle.contains(Point::new(0.0, -1.0)));
        assert!(!circle.contains(Point::new(2.0, 0.0)));
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let circle = Circumcircle::unbounded(Point::new(1.0, 1.0));
        assert!(!circle.is_bounded());
        assert!(circle.contains(Point::new(1e12, -1e12)));
    }

    #[test]
    fn test_signed_area_orientation() {
        let ccw = Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0));
        let cw = Triangle::new(ccw.a, ccw.c, ccw.b);

        assert!(ccw.doubled_signed_area() > 0.0);
        assert!(cw.doubled_signed_area() < 0.0);
        assert_relative_eq!(ccw.area(), 0.5);
    }
}

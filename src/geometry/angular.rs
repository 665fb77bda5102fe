//! Polar-angle ordering around a center
//!
//! Used twice by the engine: to close the cavity boundary during insertion,
//! and to order circumcenters into a cell polygon.

use std::cmp::Ordering;

use super::Point;

/// Angle of `point` as seen from `center`, in `(-π, π]`
#[inline]
pub fn angle_around(center: Point, point: Point) -> f64 {
    let d = point - center;
    d.y.atan2(d.x)
}

/// Comparator ordering points by ascending angle around `center`
///
/// # Example
///
/// ```rust
/// use planar_voronoi::geometry::{compare_by_angle, Point};
///
/// let mut points = vec![Point::new(0.0, 1.0), Point::new(-1.0, 0.0), Point::new(1.0, 0.0)];
/// points.sort_by(compare_by_angle(Point::ZERO));
/// assert_eq!(points[0], Point::new(1.0, 0.0));
/// ```
pub fn compare_by_angle(center: Point) -> impl Fn(&Point, &Point) -> Ordering {
    move |a, b| angle_around(center, *a).total_cmp(&angle_around(center, *b))
}

/// Sort items by ascending angle of their position around `center`
///
/// Angles are computed once per item. The sort is stable, so items at equal
/// angles keep their relative order.
pub fn sort_by_angle_around<T, F>(items: Vec<T>, center: Point, position: F) -> Vec<T>
where
    F: Fn(&T) -> Point,
{
    let mut with_angles: Vec<(T, f64)> = items
        .into_iter()
        .map(|item| {
            let angle = angle_around(center, position(&item));
            (item, angle)
        })
        .collect();

    with_angles.sort_by(|a, b| a.1.total_cmp(&b.1));

    with_angles.into_iter().map(|(item, _)| item).collect()
}

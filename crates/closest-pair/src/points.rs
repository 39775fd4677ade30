//! Planar points with stable identifiers and the Euclidean distance.
//!
//! Points are plain `Copy` values owned by the caller; solvers only read them.
//! Coordinates are assumed finite. Nothing here validates that.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::fmt;

/// Stable identifier of a point, unique within a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub i64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point `(x, y)` in the plane tagged with its identifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub pos: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(id: PointId, x: f64, y: f64) -> Self {
        Self {
            id,
            pos: Vector2::new(x, y),
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(self, other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point {} ({}, {})", self.id, self.pos.x, self.pos.y)
    }
}

/// Euclidean distance `sqrt((x1-x2)^2 + (y1-y2)^2)`.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a.pos - b.pos).norm()
}

/// Ascending by x, then y, then id: a total order on distinct-id points.
/// Incomparable (NaN) coordinates compare as equal.
#[inline]
pub(crate) fn by_x(a: &Point, b: &Point) -> Ordering {
    cmp_f64(a.pos.x, b.pos.x)
        .then_with(|| cmp_f64(a.pos.y, b.pos.y))
        .then_with(|| a.id.cmp(&b.id))
}

/// Ascending by y, then x, then id.
#[inline]
pub(crate) fn by_y(a: &Point, b: &Point) -> Ordering {
    cmp_f64(a.pos.y, b.pos.y)
        .then_with(|| cmp_f64(a.pos.x, b.pos.x))
        .then_with(|| a.id.cmp(&b.id))
}

#[inline]
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_pythagorean() {
        let a = Point::new(PointId(0), 0.0, 0.0);
        let b = Point::new(PointId(1), 3.0, 4.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
        assert_eq!(distance(&a, &b), b.distance_to(&a));
    }

    #[test]
    fn distance_zero_for_coincident() {
        let a = Point::new(PointId(0), 1.5, -2.25);
        let b = Point::new(PointId(7), 1.5, -2.25);
        assert_eq!(distance(&a, &b), 0.0);
    }

    #[test]
    fn sort_helpers_are_ascending() {
        let mut pts = vec![
            Point::new(PointId(0), 2.0, -1.0),
            Point::new(PointId(1), -3.0, 5.0),
            Point::new(PointId(2), 0.5, 0.0),
        ];
        pts.sort_by(by_x);
        let ids: Vec<i64> = pts.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 0]);
        pts.sort_by(by_y);
        let ids: Vec<i64> = pts.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![0, 2, 1]);
    }

    #[test]
    fn sort_by_x_breaks_ties_on_y_then_id() {
        let mut pts = vec![
            Point::new(PointId(5), 1.0, 2.0),
            Point::new(PointId(4), 1.0, 2.0),
            Point::new(PointId(3), 1.0, -1.0),
        ];
        pts.sort_by(by_x);
        let ids: Vec<i64> = pts.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn display_matches_log_format() {
        let p = Point::new(PointId(3), 1.0, 2.5);
        assert_eq!(p.to_string(), "Point 3 (1, 2.5)");
    }
}

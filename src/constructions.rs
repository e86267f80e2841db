// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classical straightedge-and-compass constructions.

use crate::{Line, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The perpendicular bisector of the segment from `a` to `b`.
///
/// The result is anchored at the midpoint of the segment. `a` and `b` must
/// be distinct.
///
/// ```
/// use straightedge::{symmetral, Point, Vec2};
///
/// let bisector = symmetral(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
/// assert_eq!(bisector.anchor(), Point::new(2.0, 0.0));
/// assert_eq!(bisector.direction(), Vec2::new(0.0, -1.0));
/// ```
pub fn symmetral(a: Point, b: Point) -> Line {
    let segment = a.line_to(b);
    segment.perpendicular(segment.eval(0.5 * a.distance(b)))
}

/// The two points that complete an equilateral triangle on the side `a`–`b`.
///
/// The first point lies on the counter-clockwise side of `a → b`, the
/// second on the clockwise side.
///
/// ```
/// use straightedge::{equilateral_triangle, Point};
///
/// let [above, below] = equilateral_triangle(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
/// assert!(above.y > 0.0 && below.y < 0.0);
/// ```
pub fn equilateral_triangle(a: Point, b: Point) -> [Point; 2] {
    let bisector = symmetral(a, b);
    let height = a.distance(b) * 3.0_f64.sqrt() / 2.0;
    [bisector.eval(-height), bisector.eval(height)]
}

#[cfg(test)]
mod tests {
    use crate::{equilateral_triangle, symmetral, Circle, Point};

    fn assert_near(p0: Point, p1: Point) {
        assert!(p0.is_near(p1, 1e-9), "{p0:?} != {p1:?}");
    }

    #[test]
    fn symmetral_is_vertical_bisector() {
        let line = symmetral(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
        assert_eq!(line.anchor(), Point::new(2.0, 0.0));
        assert_eq!(line.direction().x, 0.0);
        assert_eq!(line.direction().y.abs(), 1.0);
    }

    #[test]
    fn symmetral_points_are_equidistant() {
        let a = Point::new(-1.0, 2.0);
        let b = Point::new(3.0, 5.0);
        let line = symmetral(a, b);
        assert_near(line.anchor(), a.midpoint(b));
        for t in [-3.0, 0.5, 7.25] {
            let p = line.eval(t);
            assert!((p.distance(a) - p.distance(b)).abs() < 1e-9);
        }
    }

    #[test]
    fn equilateral() {
        let [p, q] = equilateral_triangle(Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        let h = 3.0_f64.sqrt();
        assert_near(p, Point::new(1.0, h));
        assert_near(q, Point::new(1.0, -h));
    }

    #[test]
    fn equilateral_matches_circle_construction() {
        // Euclid I.1: the apexes are where the circles around each end meet.
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 2.0);
        let apexes = equilateral_triangle(a, b);
        let meets = Circle::through(a, b).intersect(&Circle::through(b, a));
        assert_eq!(meets.len(), 2);
        for apex in apexes {
            assert!(meets.iter().any(|m| m.is_near(apex, 1e-9)), "{apex:?} not in {meets:?}");
            assert!((apex.distance(a) - a.distance(b)).abs() < 1e-9);
        }
    }
}

// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::log::trace;
use crate::{Line, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// The circle around `center` passing through `point`.
    #[inline]
    pub fn through(center: impl Into<Point>, point: Point) -> Circle {
        let center = center.into();
        Circle {
            center,
            radius: center.distance(point),
        }
    }

    /// The diameter of the circle.
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// The point on the circle in the direction of `v` from the center.
    ///
    /// `v` must not be zero.
    #[inline]
    pub fn find(&self, v: Vec2) -> Point {
        self.center + v * (self.radius / v.hypot())
    }

    /// The point on the circle at angle `th` (radians, counter-clockwise
    /// from the positive x axis).
    #[inline]
    pub fn point_at_angle(&self, th: f64) -> Point {
        self.center + Vec2::from_polar(self.radius, th)
    }

    /// The same circle, displaced by `v`.
    #[inline]
    pub fn translate(&self, v: Vec2) -> Circle {
        *self + v
    }

    /// Find the intersections of this circle with a line.
    ///
    /// See [`Line::intersect_circle`].
    #[inline]
    pub fn intersect_line(&self, line: &Line) -> ArrayVec<Point, 2> {
        line.intersect_circle(self)
    }

    /// Find the intersections of two circles.
    ///
    /// Tangent circles meet in one point. Disjoint circles, circles nested
    /// without touching, and concentric circles (including identical ones)
    /// yield no points.
    ///
    /// The result does not depend on argument order: `a.intersect(&b)` and
    /// `b.intersect(&a)` return the same points in the same order.
    pub fn intersect(&self, other: &Circle) -> ArrayVec<Point, 2> {
        let mut result = ArrayVec::new();
        let d = other.center - self.center;
        let dist = d.hypot();
        if dist == 0.0 {
            trace!("concentric circles");
            return result;
        }
        if dist == self.radius + other.radius {
            trace!("externally tangent circles");
            result.push(self.find(d));
            return result;
        }
        if dist == (self.radius - other.radius).abs() {
            trace!("internally tangent circles");
            let towards = if self.radius > other.radius { d } else { -d };
            result.push(self.find(towards));
            return result;
        }
        if dist > self.radius + other.radius || dist < (self.radius - other.radius).abs() {
            trace!(dist, "circles do not meet");
            return result;
        }
        // The law of cosines and the rotation below are not symmetric in the
        // two circles, so always measure from the one on the left.
        let (left, right, d) = if d.x > 0.0 || (d.x == 0.0 && d.y > 0.0) {
            (self, other, d)
        } else {
            (other, self, -d)
        };
        let cos = (dist * dist + left.radius * left.radius - right.radius * right.radius)
            / (2.0 * left.radius * dist);
        let angle = cos.clamp(-1.0, 1.0).acos();
        let base = d.atan2();
        result.push(left.point_at_angle(base + angle));
        result.push(left.point_at_angle(base - angle));
        result
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }
}

impl Add<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn add(self, v: Vec2) -> Circle {
        Circle {
            center: self.center + v,
            radius: self.radius,
        }
    }
}

impl Sub<Vec2> for Circle {
    type Output = Circle;

    #[inline]
    fn sub(self, v: Vec2) -> Circle {
        Circle {
            center: self.center - v,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{Circle, Line, Point, Vec2};

    fn assert_near(p0: Point, p1: Point) {
        assert!(p0.is_near(p1, 1e-9), "{p0:?} != {p1:?}");
    }

    #[test]
    fn through_and_find() {
        let c = Circle::through((1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(c.radius, 5.0);
        assert_eq!(c.diameter(), 10.0);
        assert_eq!(c.find(Vec2::new(0.0, -2.0)), Point::new(1.0, -4.0));
        assert_near(c.point_at_angle(core::f64::consts::PI), Point::new(-4.0, 1.0));
    }

    #[test]
    fn translate() {
        let c = Circle::new((1.0, 2.0), 3.0).translate(Vec2::new(-1.0, 1.0));
        assert_eq!(c, Circle::new((0.0, 3.0), 3.0));
    }

    #[test]
    fn two_points() {
        let c1 = Circle::new((0.0, 0.0), 5.0);
        let c2 = Circle::new((8.0, 0.0), 5.0);
        let pts = c1.intersect(&c2);
        assert_eq!(pts.len(), 2);
        assert_near(pts[0], Point::new(4.0, 3.0));
        assert_near(pts[1], Point::new(4.0, -3.0));
    }

    #[test]
    fn disjoint() {
        let c1 = Circle::new((0.0, 0.0), 1.0);
        let c2 = Circle::new((3.0, 0.0), 1.0);
        assert!(c1.intersect(&c2).is_empty());
        // Nested without touching.
        let c3 = Circle::new((0.5, 0.0), 5.0);
        assert!(c1.intersect(&c3).is_empty());
        // Concentric and identical.
        assert!(c1.intersect(&Circle::new((0.0, 0.0), 2.0)).is_empty());
        assert!(c1.intersect(&c1).is_empty());
    }

    #[test]
    fn tangent() {
        let c1 = Circle::new((0.0, 0.0), 2.0);
        let outer = Circle::new((5.0, 0.0), 3.0);
        assert_eq!(c1.intersect(&outer).as_slice(), &[Point::new(2.0, 0.0)]);

        let big = Circle::new((3.0, 0.0), 5.0);
        assert_eq!(c1.intersect(&big).as_slice(), &[Point::new(-2.0, 0.0)]);
        assert_eq!(big.intersect(&c1).as_slice(), &[Point::new(-2.0, 0.0)]);
    }

    #[test]
    fn argument_order_does_not_matter() {
        let c1 = Circle::new((1.0, -2.0), 4.0);
        let c2 = Circle::new((-1.5, 0.5), 3.0);
        assert_eq!(c1.intersect(&c2), c2.intersect(&c1));

        let above = Circle::new((0.0, 3.0), 4.0);
        let below = Circle::new((0.0, -1.0), 2.5);
        assert_eq!(above.intersect(&below), below.intersect(&above));
    }

    #[test]
    fn random_intersections() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let mut random_circle = || {
                Circle::new(
                    (rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)),
                    rng.random_range(0.5..5.0),
                )
            };
            let c1 = random_circle();
            let c2 = random_circle();
            let pts = c1.intersect(&c2);
            assert_eq!(pts, c2.intersect(&c1));
            for p in pts {
                assert!((p.distance(c1.center) - c1.radius).abs() < 1e-6, "{p:?} off {c1:?}");
                assert!((p.distance(c2.center) - c2.radius).abs() < 1e-6, "{p:?} off {c2:?}");
            }
        }
    }

    #[test]
    fn line_delegates() {
        let c = Circle::new((0.0, 0.0), 5.0);
        let line = Line::new((3.0, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(c.intersect_line(&line), line.intersect_circle(&c));
        assert_eq!(c.intersect_line(&line).len(), 2);
    }
}

// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::common::{quadratic, square};
use crate::log::{debug, trace};
use crate::{Axis, Circle, Matrix2, Point, Vec2};

/// An infinite line, parametrized from an anchor point at unit speed.
///
/// Every point of the line is `anchor + t * direction` for some real `t`,
/// and `direction` always has magnitude 1.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    anchor: Point,
    direction: Vec2,
}

impl Line {
    /// The line through `anchor` running along `vector`.
    ///
    /// `vector` is normalized, so it must not be zero; a zero vector
    /// produces a line with NaN direction.
    #[inline]
    pub fn new(anchor: impl Into<Point>, vector: Vec2) -> Line {
        if vector == Vec2::ZERO {
            debug!("line built from the zero vector has no direction");
        }
        Line {
            anchor: anchor.into(),
            direction: vector.normalize(),
        }
    }

    /// The line through `a` and `b`, anchored at `a` and heading towards `b`.
    #[inline]
    pub fn through(a: Point, b: Point) -> Line {
        a.line_to(b)
    }

    /// The anchor point; `eval(0.0)`.
    #[inline]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// The unit direction vector.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// The line perpendicular to this one, anchored at `through`.
    ///
    /// Its direction is this line's direction turned a quarter clockwise.
    #[inline]
    pub fn perpendicular(&self, through: Point) -> Line {
        Line {
            anchor: through,
            direction: self.direction.perpendicular(),
        }
    }

    /// The point at parameter `t`, which is also its signed distance from
    /// the anchor.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        self.anchor + t * self.direction
    }

    /// The same line, displaced by `v`.
    #[inline]
    pub fn translate(&self, v: Vec2) -> Line {
        *self + v
    }

    /// The axis this line runs exactly parallel to, if any.
    #[inline]
    pub fn axis_aligned(&self) -> Option<Axis> {
        Axis::of(self.direction)
    }

    /// Find the intersection of two lines.
    ///
    /// Solves `a1 + s v1 = a2 + t v2` for `(s, t)`. Parallel lines have no
    /// solution and return `None`; so do coincident lines, even though they
    /// share every point.
    pub fn intersect(&self, other: &Line) -> Option<Point> {
        let m = Matrix2::from_columns(self.direction, -other.direction);
        let Some(inv) = m.inverse() else {
            trace!("parallel lines, no unique intersection");
            return None;
        };
        let st = inv * (other.anchor - self.anchor);
        Some(self.eval(st.x))
    }

    /// Find the intersections of this line with a circle.
    ///
    /// Returns no points when the line misses the circle, one when it is
    /// tangent and two when it crosses. Two points come in the order the
    /// quadratic solver yields its roots, which is not a geometric order.
    pub fn intersect_circle(&self, circle: &Circle) -> ArrayVec<Point, 2> {
        let z = circle.center - self.anchor;
        let r2 = square(circle.radius);
        if let Some(axis) = self.axis_aligned() {
            // Along `axis` the line is free; across it the offset from the
            // center is fixed, so the chord half-length solves s² = r² - d².
            trace!(?axis, "axis-aligned line meets circle");
            let offset = axis.cross().value(z);
            let along = axis.value(circle.center.to_vec2());
            let across = axis.cross().value(self.anchor.to_vec2());
            return quadratic(1.0, 0.0, square(offset) - r2)
                .into_iter()
                .map(|s| axis.pack_point(along + s, across))
                .collect();
        }
        // Points on the line are anchor + (u, u m); substituting into
        // |p - center|² = r² gives a quadratic in u.
        let m = self.direction.slope();
        let a = square(m) + 1.0;
        let b = -2.0 * (z.x + m * z.y);
        let c = z.hypot2() - r2;
        quadratic(a, b, c)
            .into_iter()
            .map(|u| self.anchor + Vec2::new(u, m * u))
            .collect()
    }
}

impl Add<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn add(self, v: Vec2) -> Line {
        Line {
            anchor: self.anchor + v,
            direction: self.direction,
        }
    }
}

impl Sub<Vec2> for Line {
    type Output = Line;

    #[inline]
    fn sub(self, v: Vec2) -> Line {
        Line {
            anchor: self.anchor - v,
            direction: self.direction,
        }
    }
}

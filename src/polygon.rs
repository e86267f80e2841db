// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygons.

use core::ops::{Add, Sub};

use smallvec::SmallVec;

use crate::{Point, Vec2};

/// A closed polygon, given by its vertices in order.
///
/// The closing edge from the last vertex back to the first is implicit;
/// the first vertex is not repeated.
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: SmallVec<[Point; 4]>,
}

impl Polygon {
    /// A polygon through the given vertices.
    pub fn new(vertices: impl IntoIterator<Item = Point>) -> Polygon {
        Polygon {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// The vertices, in order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The edges as pairs of consecutive vertices, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let next = self.vertices.iter().cycle().skip(1);
        self.vertices.iter().copied().zip(next.copied())
    }

    /// The same polygon, displaced by `v`.
    pub fn translate(&self, v: Vec2) -> Polygon {
        Polygon::new(self.vertices.iter().map(|&p| p + v))
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Polygon::new(iter)
    }
}

impl Add<Vec2> for Polygon {
    type Output = Polygon;

    #[inline]
    fn add(self, v: Vec2) -> Polygon {
        self.translate(v)
    }
}

impl Sub<Vec2> for Polygon {
    type Output = Polygon;

    #[inline]
    fn sub(self, v: Vec2) -> Polygon {
        self.translate(-v)
    }
}

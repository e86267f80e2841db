// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use arrayvec::{ArrayString, CapacityError};

use crate::{Line, Vec2};

/// A 2D point, optionally carrying a display [`Label`].
///
/// Points are plain values. Geometric operations never propagate the label:
/// translating or intersecting produces unlabeled points.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The label shown next to the point when it is rendered.
    pub label: Option<Label>,
}

impl Point {
    /// The point at the origin; (0, 0).
    pub const ORIGIN: Point = Point::new(0., 0.);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y, label: None }
    }

    /// The same point, labeled.
    #[inline]
    #[must_use]
    pub const fn with_label(self, label: Label) -> Self {
        Point {
            label: Some(label),
            ..self
        }
    }

    /// The label of this point, if any.
    #[inline]
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Convert this point into a `Vec2`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The point displaced by `v`, without a label.
    #[inline]
    pub fn translate(self, v: Vec2) -> Point {
        self + v
    }

    /// The vector from this point to `other`.
    #[inline]
    pub fn vector_to(self, other: Point) -> Vec2 {
        other - self
    }

    /// Determine the midpoint of two points.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).hypot()
    }

    /// Squared Euclidean distance.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        (self - other).hypot2()
    }

    /// The line anchored at this point, heading towards `other`.
    ///
    /// The two points must be distinct.
    #[inline]
    pub fn line_to(self, other: Point) -> Line {
        Line::new(self, self.vector_to(other))
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Is this point NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Compare if two points are within `accuracy` of each other.
    pub fn is_near(self, other: Point, accuracy: f64) -> bool {
        self.distance(other) <= accuracy
    }
}

const LABEL_CAPACITY: usize = 32;

/// The text attached to a rendered point, and where it sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    text: ArrayString<LABEL_CAPACITY>,
    anchor: Option<Anchor>,
}

impl Label {
    /// Maximum length of label text, in bytes.
    pub const CAPACITY: usize = LABEL_CAPACITY;

    /// A label with the given text and no anchor.
    ///
    /// # Errors
    ///
    /// Fails if `text` is longer than [`Label::CAPACITY`] bytes.
    pub fn new(text: &str) -> Result<Label, CapacityError<&str>> {
        Ok(Label {
            text: ArrayString::from(text)?,
            anchor: None,
        })
    }

    /// The same label, placed at `anchor`.
    #[inline]
    #[must_use]
    pub const fn with_anchor(self, anchor: Anchor) -> Label {
        Label {
            anchor: Some(anchor),
            ..self
        }
    }

    /// The label text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The anchor of the label node, if any.
    #[inline]
    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }
}

/// Which side of a label node is pinned to its point.
///
/// These are the TikZ node anchor names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    /// `center`
    Center,
    /// `north`
    North,
    /// `north east`
    NorthEast,
    /// `east`
    East,
    /// `south east`
    SouthEast,
    /// `south`
    South,
    /// `south west`
    SouthWest,
    /// `west`
    West,
    /// `north west`
    NorthWest,
    /// `base`
    Base,
}

impl Anchor {
    /// The TikZ name of this anchor.
    pub const fn name(self) -> &'static str {
        match self {
            Anchor::Center => "center",
            Anchor::North => "north",
            Anchor::NorthEast => "north east",
            Anchor::East => "east",
            Anchor::SouthEast => "south east",
            Anchor::South => "south",
            Anchor::SouthWest => "south west",
            Anchor::West => "west",
            Anchor::NorthWest => "north west",
            Anchor::Base => "base",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Point {
        Point::new(v.0, v.1)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(v: Point) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Vec2) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign<Vec2> for Point {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        *self = *self + other;
    }
}

impl Sub<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Vec2) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign<Vec2> for Point {
    #[inline]
    fn sub_assign(&mut self, other: Vec2) {
        *self = *self - other;
    }
}

impl Sub<Point> for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Point) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)?;
        if let Some(label) = &self.label {
            write!(f, " {:?}", label.text())?;
        }
        Ok(())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline]
    fn from(p: mint::Point2<f64>) -> Point {
        Point::new(p.x, p.y)
    }
}

// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Point, Vec2};

/// An axis in the plane.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Get the axis perpendicular to this one.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// The axis a direction vector runs exactly parallel to, if any.
    ///
    /// The zero vector has no axis.
    #[inline]
    pub fn of(v: Vec2) -> Option<Self> {
        match (v.x == 0.0, v.y == 0.0) {
            (true, false) => Some(Self::Vertical),
            (false, true) => Some(Self::Horizontal),
            _ => None,
        }
    }

    /// The component of `v` along this axis.
    #[inline]
    pub const fn value(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Create a new [`Point`] by arranging the given magnitudes.
    ///
    /// The axis value is the one matching the axis (e.g. `y` for [`Self::Vertical`]).
    /// The cross value is the other one.
    #[inline]
    pub const fn pack_point(self, axis_value: f64, cross_value: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(axis_value, cross_value),
            Self::Vertical => Point::new(cross_value, axis_value),
        }
    }

    /// Create a new [`Vec2`] by arranging the given magnitudes.
    ///
    /// The axis value is the one matching the axis (e.g. `y` for [`Self::Vertical`]).
    /// The cross value is the other one.
    #[inline]
    pub const fn pack_vec2(self, axis_value: f64, cross_value: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(axis_value, cross_value),
            Self::Vertical => Vec2::new(cross_value, axis_value),
        }
    }
}

// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straightedge-and-compass geometry in the plane.
//!
//! The straightedge library provides points, vectors, lines, circles and
//! polygons, the exact analytic intersections between lines and circles,
//! and classical constructions built from them. Results can be rendered as
//! TikZ drawing commands.
//!
//! Intersections never fail loudly: a pair of lines that does not meet in a
//! single point gives `None`, and a line or circle that misses a circle
//! gives an empty [`ArrayVec`].
//!
//! # Examples
//!
//! Intersecting two circles:
//! ```
//! use straightedge::{Circle, Point};
//!
//! let a = Circle::new((0.0, 0.0), 5.0);
//! let b = Circle::new((8.0, 0.0), 5.0);
//! let meets = a.intersect(&b);
//! assert_eq!(meets.len(), 2);
//! assert!(meets[0].is_near(Point::new(4.0, 3.0), 1e-9));
//! assert!(meets[1].is_near(Point::new(4.0, -3.0), 1e-9));
//! ```
//!
//! Euclid's first proposition, drawn:
//! ```
//! use straightedge::{equilateral_triangle, Circle, Label, Point, Polygon, Tikz};
//!
//! let a = Point::new(0.0, 0.0).with_label(Label::new("A").unwrap());
//! let b = Point::new(2.0, 0.0).with_label(Label::new("B").unwrap());
//! let [c, _] = equilateral_triangle(a, b);
//!
//! let mut tikz = Tikz::new(String::new());
//! tikz.draw_circle(&Circle::through(a, b)).unwrap();
//! tikz.draw_polygon(&Polygon::new([a, b, c])).unwrap();
//! assert!(tikz.into_inner().ends_with("-- cycle;\n"));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate still uses the `alloc` crate
//! regardless.
//!
//! The `tracing` feature logs which case each intersection routine took,
//! at `trace` level.
//!
//! [`libm`]: https://docs.rs/libm
//! [`ArrayVec`]: arrayvec::ArrayVec

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::float_cmp)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("straightedge requires either the `std` or `libm` feature");

extern crate alloc;

mod axis;
mod circle;
pub mod common;
mod constructions;
mod line;
mod log;
mod matrix;
mod point;
mod polygon;
mod tikz;
mod vec2;

pub use crate::axis::*;
pub use crate::circle::*;
pub use crate::constructions::*;
pub use crate::line::*;
pub use crate::matrix::*;
pub use crate::point::*;
pub use crate::polygon::*;
pub use crate::tikz::*;
pub use crate::vec2::*;

// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print a few classical constructions as TikZ.
//!
//! The output is the body of a `tikzpicture` environment.

use straightedge::{
    equilateral_triangle, symmetral, Anchor, Circle, Label, Point, Polygon, Tikz, Vec2,
};

fn label(text: &str, anchor: Anchor) -> Label {
    Label::new(text).unwrap().with_anchor(anchor)
}

fn main() -> std::fmt::Result {
    let a = Point::new(0.0, 0.0).with_label(label("$A$", Anchor::East));
    let b = Point::new(3.0, 0.0).with_label(label("$B$", Anchor::West));
    let mut tikz = Tikz::stdout();

    // Euclid I.1: an equilateral triangle on a given segment.
    let around_a = Circle::through(a, b);
    let around_b = Circle::through(b, a);
    tikz.draw_circle(&around_a)?;
    tikz.draw_circle(&around_b)?;
    let [above, below] = equilateral_triangle(a, b);
    let c = above.with_label(label("$C$", Anchor::South));
    tikz.draw_polygon(&Polygon::new([a, b, c]))?;
    tikz.draw_dot(&below)?;

    // The perpendicular bisector passes through both circle intersections.
    let bisector = symmetral(a, b);
    let meets = around_a.intersect(&around_b);
    tikz.draw_line(&bisector, -3.0, 3.0)?;
    for p in &meets {
        tikz.draw_dot(p)?;
    }

    // Where the bisector crosses the segment, and a copy of the figure
    // shifted to the right.
    if let Some(m) = bisector.intersect(&a.line_to(b)) {
        tikz.draw_point(&m.with_label(label("$M$", Anchor::NorthWest)))?;
    }
    let shifted = Polygon::new([a, b, c]).translate(Vec2::new(4.0, 0.0));
    tikz.draw_polygon(&shifted)?;
    for p in around_b.intersect_line(&bisector) {
        tikz.draw_dot(&p)?;
    }
    Ok(())
}

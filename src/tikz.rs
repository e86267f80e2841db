// Copyright 2026 the Straightedge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering as TikZ drawing commands.
//!
//! A [`Tikz`] session writes one command per line to any [`fmt::Write`]
//! sink. Labeled points are annotated the first time the session emits
//! them and drawn bare afterwards; that bookkeeping lives in the session's
//! [`EmittedLabels`], so the same [`Point`] value can be drawn by several
//! sessions independently.

use alloc::collections::BTreeSet;
use alloc::string::String;
use core::fmt::{self, Write};

use crate::{Circle, Label, Line, Point, Polygon};

/// The set of labeled points whose label has already been written.
///
/// Points are keyed by their exact coordinates and label, so two equal
/// labeled points count as the same point.
#[derive(Clone, Debug, Default)]
pub struct EmittedLabels {
    seen: BTreeSet<(u64, u64, Label)>,
}

impl EmittedLabels {
    /// An empty set.
    pub fn new() -> EmittedLabels {
        EmittedLabels::default()
    }

    /// Record that `p` is being emitted.
    ///
    /// Returns `true` if `p` carries a label that has not been emitted for
    /// this point before, in which case the caller should write the label.
    pub fn first_emission(&mut self, p: &Point) -> bool {
        match p.label {
            Some(label) => self.seen.insert((p.x.to_bits(), p.y.to_bits(), label)),
            None => false,
        }
    }

    /// Whether the label of `p` has already been emitted.
    pub fn contains(&self, p: &Point) -> bool {
        match p.label {
            Some(label) => self.seen.contains(&(p.x.to_bits(), p.y.to_bits(), label)),
            None => false,
        }
    }

    /// The number of labels emitted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no label has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forget all emitted labels.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

/// Write a point as a TikZ coordinate, with its label node on first emission.
fn write_point<W: Write>(out: &mut W, emitted: &mut EmittedLabels, p: &Point) -> fmt::Result {
    write!(out, "({:?},{:?})", p.x, p.y)?;
    if !emitted.first_emission(p) {
        return Ok(());
    }
    let Some(label) = p.label() else {
        return Ok(());
    };
    write!(out, " node ")?;
    if let Some(anchor) = label.anchor() {
        write!(out, "[anchor={anchor}] ")?;
    }
    write!(out, "{{ {} }}", label.text())
}

/// A TikZ rendering session.
///
/// ```
/// use straightedge::{Label, Point, Tikz};
///
/// let a = Point::new(0.0, 0.0).with_label(Label::new("A").unwrap());
/// let b = Point::new(2.0, 0.0);
/// let mut tikz = Tikz::new(String::new());
/// tikz.draw_lines(&[a, b]).unwrap();
/// tikz.draw_lines(&[b, a]).unwrap();
/// assert_eq!(
///     tikz.into_inner(),
///     "\\draw (0.0,0.0) node { A } -- (2.0,0.0);\n\\draw (2.0,0.0) -- (0.0,0.0);\n"
/// );
/// ```
#[derive(Debug)]
pub struct Tikz<W> {
    out: W,
    emitted: EmittedLabels,
    dot_radius: f64,
}

impl<W: Write> Tikz<W> {
    /// Radius of dots drawn by [`Tikz::draw_dot`], unless changed.
    pub const DEFAULT_DOT_RADIUS: f64 = 0.05;

    /// A session writing to `out`.
    pub fn new(out: W) -> Tikz<W> {
        Tikz {
            out,
            emitted: EmittedLabels::new(),
            dot_radius: Self::DEFAULT_DOT_RADIUS,
        }
    }

    /// The same session, drawing dots of radius `r`.
    #[must_use]
    pub fn with_dot_radius(self, r: f64) -> Tikz<W> {
        Tikz {
            dot_radius: r,
            ..self
        }
    }

    /// The sink this session writes to.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the session, returning its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The labels emitted so far.
    pub fn emitted(&self) -> &EmittedLabels {
        &self.emitted
    }

    /// Format a point as this session would emit it, and record its label as
    /// emitted.
    pub fn display(&mut self, p: &Point) -> String {
        let mut s = String::new();
        write_point(&mut s, &mut self.emitted, p).unwrap();
        s
    }

    /// `\draw p;`
    pub fn draw_point(&mut self, p: &Point) -> fmt::Result {
        write!(self.out, "\\draw ")?;
        write_point(&mut self.out, &mut self.emitted, p)?;
        writeln!(self.out, ";")
    }

    /// A filled dot at `p`: `\fill p circle (r);`
    pub fn draw_dot(&mut self, p: &Point) -> fmt::Result {
        write!(self.out, "\\fill ")?;
        write_point(&mut self.out, &mut self.emitted, p)?;
        writeln!(self.out, " circle ({:?});", self.dot_radius)
    }

    /// An open path through `points`: `\draw p1 -- p2 -- ... -- pn;`
    pub fn draw_lines(&mut self, points: &[Point]) -> fmt::Result {
        self.draw_path(points, false)
    }

    /// The closed outline of `polygon`: `\draw p1 -- ... -- pn -- cycle;`
    pub fn draw_polygon(&mut self, polygon: &Polygon) -> fmt::Result {
        self.draw_path(polygon.vertices(), true)
    }

    /// The segment of `line` between parameters `t0` and `t1`.
    pub fn draw_line(&mut self, line: &Line, t0: f64, t1: f64) -> fmt::Result {
        self.draw_lines(&[line.eval(t0), line.eval(t1)])
    }

    /// The whole circle, as an arc from 0 to 360 degrees.
    pub fn draw_circle(&mut self, circle: &Circle) -> fmt::Result {
        self.draw_arc(circle, 0.0, 360.0)
    }

    /// An arc of `circle` from `start` to `end`, in degrees:
    /// `\draw p arc (start:end:radius);` where `p` is the point of the circle
    /// at angle `start`.
    pub fn draw_arc(&mut self, circle: &Circle, start: f64, end: f64) -> fmt::Result {
        let from = circle.point_at_angle(start.to_radians());
        write!(self.out, "\\draw ")?;
        write_point(&mut self.out, &mut self.emitted, &from)?;
        writeln!(self.out, " arc ({start}:{end}:{:?});", circle.radius)
    }

    fn draw_path(&mut self, points: &[Point], closed: bool) -> fmt::Result {
        write!(self.out, "\\draw ")?;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                write!(self.out, " -- ")?;
            }
            write_point(&mut self.out, &mut self.emitted, p)?;
        }
        if closed {
            write!(self.out, " -- cycle")?;
        }
        writeln!(self.out, ";")
    }
}

/// A [`fmt::Write`] sink that forwards to standard output.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

#[cfg(feature = "std")]
impl Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        use std::io::Write as _;
        std::io::stdout()
            .lock()
            .write_all(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

#[cfg(feature = "std")]
impl Tikz<Stdout> {
    /// A session printing to standard output.
    pub fn stdout() -> Tikz<Stdout> {
        Tikz::new(Stdout)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Anchor, Circle, EmittedLabels, Label, Line, Point, Polygon, Tikz, Vec2};

    fn labeled(x: f64, y: f64, text: &str) -> Point {
        Point::new(x, y).with_label(Label::new(text).unwrap())
    }

    #[test]
    fn label_is_displayed_once() {
        let a = labeled(1.0, 2.0, "A");
        let mut tikz = Tikz::new(String::new());
        assert_eq!(tikz.display(&a), "(1.0,2.0) node { A }");
        assert_eq!(tikz.display(&a), "(1.0,2.0)");
        assert!(tikz.emitted().contains(&a));
    }

    #[test]
    fn anchor_is_written() {
        let b = Point::new(0.5, -3.0)
            .with_label(Label::new("$B$").unwrap().with_anchor(Anchor::SouthWest));
        let mut tikz = Tikz::new(String::new());
        tikz.draw_point(&b).unwrap();
        tikz.draw_point(&b).unwrap();
        assert_eq!(
            tikz.into_inner(),
            "\\draw (0.5,-3.0) node [anchor=south west] { $B$ };\n\\draw (0.5,-3.0);\n"
        );
    }

    #[test]
    fn sessions_are_independent() {
        let a = labeled(0.0, 0.0, "A");
        let mut first = Tikz::new(String::new());
        let mut second = Tikz::new(String::new());
        assert_eq!(first.display(&a), "(0.0,0.0) node { A }");
        assert_eq!(second.display(&a), "(0.0,0.0) node { A }");
        assert!(a.label().is_some());
    }

    #[test]
    fn unlabeled_points_are_not_tracked() {
        let mut emitted = EmittedLabels::new();
        assert!(!emitted.first_emission(&Point::new(1.0, 1.0)));
        assert!(emitted.is_empty());
        // Different labels at the same spot are separate points.
        assert!(emitted.first_emission(&labeled(1.0, 1.0, "P")));
        assert!(emitted.first_emission(&labeled(1.0, 1.0, "Q")));
        assert!(!emitted.first_emission(&labeled(1.0, 1.0, "P")));
        assert_eq!(emitted.len(), 2);
        emitted.clear();
        assert!(emitted.first_emission(&labeled(1.0, 1.0, "P")));
    }

    #[test]
    fn paths() {
        let a = labeled(0.0, 0.0, "A");
        let b = labeled(2.0, 0.0, "B");
        let c = Point::new(1.0, 1.5);
        let mut tikz = Tikz::new(String::new());
        tikz.draw_lines(&[a, c]).unwrap();
        tikz.draw_polygon(&Polygon::new([a, b, c])).unwrap();
        assert_eq!(
            tikz.into_inner(),
            "\\draw (0.0,0.0) node { A } -- (1.0,1.5);\n\
             \\draw (0.0,0.0) -- (2.0,0.0) node { B } -- (1.0,1.5) -- cycle;\n"
        );
    }

    #[test]
    fn circles_and_arcs() {
        let circle = Circle::new((1.0, 2.0), 5.0);
        let mut tikz = Tikz::new(String::new());
        tikz.draw_circle(&circle).unwrap();
        tikz.draw_arc(&circle, 0.0, 90.5).unwrap();
        assert_eq!(
            tikz.into_inner(),
            "\\draw (6.0,2.0) arc (0:360:5.0);\n\\draw (6.0,2.0) arc (0:90.5:5.0);\n"
        );
    }

    #[test]
    fn dots_and_lines() {
        let line = Line::new((0.0, 1.0), Vec2::new(2.0, 0.0));
        let mut tikz = Tikz::new(String::new()).with_dot_radius(0.1);
        tikz.draw_line(&line, -1.0, 3.0).unwrap();
        tikz.draw_dot(&labeled(3.0, 1.0, "C")).unwrap();
        assert_eq!(
            tikz.into_inner(),
            "\\draw (-1.0,1.0) -- (3.0,1.0);\n\\fill (3.0,1.0) node { C } circle (0.1);\n"
        );
    }
}

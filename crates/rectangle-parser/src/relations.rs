//! Pairwise relationships: overlap, intersection, containment, adjacency.
//!
//! Everything here is a pure function over two `&Rectangle`s. The scalar
//! tests (`overlaps`, `does_intersect`, `does_contain`) only look at the
//! bottom-left and top-right corners; adjacency and intersection coordinates
//! compare sides as spans and only walk the runs the two boundaries share.
//!
//! ## Rust Lesson #3: Strict vs. Inclusive Comparisons
//!
//! Touching is not intersecting. `does_intersect` and `does_contain` use `>`
//! and `<` on every axis, so two rectangles that merely share a boundary
//! fall through to adjacency classification instead.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::edges::{lattice_segment, Span};
use crate::geometry::{Point, Rectangle, Side};

/// How two rectangles' edges relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Adjacency {
    /// An entire edge is shared and both edges have the same length.
    Proper,
    /// One edge lies entirely within the other, which is longer.
    SubLine,
    /// Edges touch without either containing the other; no interior overlap.
    Partial,
    #[default]
    None,
}

impl Adjacency {
    /// `true` for every variant except `None`.
    #[inline]
    pub fn is_adjacent(self) -> bool {
        self != Adjacency::None
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Adjacency::Proper => "Proper",
            Adjacency::SubLine => "Sub-Line",
            Adjacency::Partial => "Partial",
            Adjacency::None => "None",
        };
        f.write_str(name)
    }
}

/// Outcome of asking for intersection coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "points", rename_all = "lowercase")]
pub enum Intersection {
    /// The rectangles do not intersect.
    Disjoint,
    /// Points on both boundaries.
    Boundary(Vec<Point>),
    /// One rectangle sits strictly inside the other, so the boundaries never meet.
    Nested,
}

impl Intersection {
    #[inline]
    pub fn is_intersecting(&self) -> bool {
        !matches!(self, Intersection::Disjoint)
    }

    /// The shared points, empty unless this is `Boundary`.
    pub fn points(&self) -> &[Point] {
        match self {
            Intersection::Boundary(points) => points,
            _ => &[],
        }
    }
}

/// Internal-consistency failures while relating two rectangles.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelationError {
    #[error("rectangles {first} and {second} intersect but share no boundary point and neither contains the other")]
    MissingIntersectionData { first: i64, second: i64 },
}

/// Identical height, width and origin.
pub fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    a.height() == b.height() && a.width() == b.width() && a.x() == b.x() && a.y() == b.y()
}

/// Interiors overlap on both axes, or the rectangles overlap perfectly.
pub fn does_intersect(a: &Rectangle, b: &Rectangle) -> bool {
    if overlaps(a, b) {
        return true;
    }

    let (a_lo, a_hi) = (a.bottom_left(), a.top_right());
    let (b_lo, b_hi) = (b.bottom_left(), b.top_right());

    (b_hi.x > a_lo.x && b_hi.y > a_lo.y) && (a_hi.x > b_lo.x && a_hi.y > b_lo.y)
}

/// `outer` strictly contains `inner`. Shared edges disqualify.
pub fn does_contain(outer: &Rectangle, inner: &Rectangle) -> bool {
    let (o_lo, o_hi) = (outer.bottom_left(), outer.top_right());
    let (i_lo, i_hi) = (inner.bottom_left(), inner.top_right());

    o_lo.x < i_lo.x && o_lo.y < i_lo.y && o_hi.x > i_hi.x && o_hi.y > i_hi.y
}

/// Every lattice point on both boundaries.
///
/// Order is first appearance while walking `a`'s edges top, right, bottom,
/// left; each point is reported once.
pub fn intersection_points(a: &Rectangle, b: &Rectangle) -> Result<Intersection, RelationError> {
    if !does_intersect(a, b) {
        return Ok(Intersection::Disjoint);
    }

    let theirs = b.edge_spans();
    let mut seen = HashSet::new();
    let mut shared = Vec::new();

    for side in Side::ALL {
        let (from, to) = side.corners();
        let start = a.corner(from);
        let ours = Span::between(start, a.corner(to));

        // Each run is walked from its end nearest `start`, so sorting by that
        // distance reproduces the order of a point-by-point walk of the side.
        let mut runs: Vec<(Point, Point)> = theirs
            .iter()
            .filter_map(|span| ours.meet(span))
            .map(|run| {
                if manhattan(start, run.lo) <= manhattan(start, run.hi) {
                    (run.lo, run.hi)
                } else {
                    (run.hi, run.lo)
                }
            })
            .collect();
        runs.sort_by_key(|&(near, _)| manhattan(start, near));

        for (near, far) in runs {
            shared.extend(lattice_segment(near, far).into_iter().filter(|p| seen.insert(*p)));
        }
    }

    classify_shared(a, b, shared)
}

/// Only the vertices of the overlap region that sit on both boundaries.
///
/// For two rectangles crossing at their corners these are the two points
/// where the outlines cut each other; for coincident outlines they are the
/// ends of each shared run. Order is TL, TR, BL, BR of the overlap region.
pub fn intersection_vertices(a: &Rectangle, b: &Rectangle) -> Result<Intersection, RelationError> {
    if !does_intersect(a, b) {
        return Ok(Intersection::Disjoint);
    }

    let left = a.bottom_left().x.max(b.bottom_left().x);
    let right = a.top_right().x.min(b.top_right().x);
    let bottom = a.bottom_left().y.max(b.bottom_left().y);
    let top = a.top_right().y.min(b.top_right().y);

    let region = [
        Point::new(left, top),
        Point::new(right, top),
        Point::new(left, bottom),
        Point::new(right, bottom),
    ];

    let mut vertices = Vec::with_capacity(region.len());
    for p in region {
        if a.is_on_boundary(p) && b.is_on_boundary(p) && !vertices.contains(&p) {
            vertices.push(p);
        }
    }

    classify_shared(a, b, vertices)
}

/// An intersecting pair with nothing in common on the boundary has to be nested.
fn classify_shared(
    a: &Rectangle,
    b: &Rectangle,
    shared: Vec<Point>,
) -> Result<Intersection, RelationError> {
    if !shared.is_empty() {
        Ok(Intersection::Boundary(shared))
    } else if does_contain(a, b) || does_contain(b, a) {
        Ok(Intersection::Nested)
    } else {
        Err(RelationError::MissingIntersectionData {
            first: a.id(),
            second: b.id(),
        })
    }
}

/// Classify how the edges of `a` and `b` meet.
///
/// Rules, first match wins:
/// 1. perfect overlap is never adjacency
/// 2. an edge whose points are a superset of another edge's: `Proper` if the
///    two are the same length, otherwise `SubLine`
/// 3. non-intersecting rectangles with any edge point in common: `Partial`
///
/// Within rule 2 an equal-length match anywhere among the 16 edge pairs wins,
/// which keeps the result symmetric in its arguments.
pub fn is_adjacent(a: &Rectangle, b: &Rectangle) -> Adjacency {
    if overlaps(a, b) {
        return Adjacency::None;
    }

    let ours = a.edge_spans();
    let theirs = b.edge_spans();

    let mut sub_line = false;
    for ea in &ours {
        for eb in &theirs {
            if ea.covers(eb) || eb.covers(ea) {
                if ea.len() == eb.len() {
                    return Adjacency::Proper;
                }
                sub_line = true;
            }
        }
    }
    if sub_line {
        return Adjacency::SubLine;
    }

    if !does_intersect(a, b)
        && ours
            .iter()
            .any(|ea| theirs.iter().any(|eb| ea.meet(eb).is_some()))
    {
        return Adjacency::Partial;
    }

    Adjacency::None
}

#[inline]
fn manhattan(a: Point, b: Point) -> i64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

// ============================================================================
// TESTS
// ============================================================================

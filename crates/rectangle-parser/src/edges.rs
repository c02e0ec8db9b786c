//! Edge-point enumeration.
//!
//! Every side of a rectangle is a straight run between two corners that
//! share either their `x` or their `y`. Walking that run one unit at a time
//! gives the full set of lattice points on the side, endpoints included.
//!
//! Comparing sides never needs that walk. A side is a closed run, so the
//! point set of one contains another's exactly when its [`Span`] does, and
//! two sides share a point exactly when their spans meet. Relationship
//! checks stay constant-time however large the rectangle is; enumeration is
//! only paid for when points are reported.

use crate::geometry::{Point, Rectangle, Side};

impl Rectangle {
    /// Lattice points along one side, from the side's first corner to its
    /// second (see [`Side::corners`]).
    pub fn edge(&self, side: Side) -> Vec<Point> {
        let (from, to) = side.corners();
        lattice_segment(self.corner(from), self.corner(to))
    }

    /// All four edges as `[top, right, bottom, left]`.
    pub fn all_edge_points(&self) -> [Vec<Point>; 4] {
        Side::ALL.map(|side| self.edge(side))
    }

    /// The four edges flattened in top, right, bottom, left order.
    ///
    /// Corners appear twice since each one closes one edge and opens the next.
    pub fn boundary_points(&self) -> Vec<Point> {
        Side::ALL.into_iter().flat_map(|side| self.edge(side)).collect()
    }

    /// All four sides as spans, `[top, right, bottom, left]`.
    pub(crate) fn edge_spans(&self) -> [Span; 4] {
        Side::ALL.map(|side| {
            let (from, to) = side.corners();
            Span::between(self.corner(from), self.corner(to))
        })
    }

    /// Whether `p` lies on one of the four sides, without enumerating them.
    pub fn is_on_boundary(&self, p: Point) -> bool {
        let (min_x, max_x) = ordered(self.bottom_left().x, self.top_right().x);
        let (min_y, max_y) = ordered(self.bottom_left().y, self.top_right().y);

        let inside = (min_x..=max_x).contains(&p.x) && (min_y..=max_y).contains(&p.y);
        inside && (p.x == min_x || p.x == max_x || p.y == min_y || p.y == max_y)
    }
}

/// A closed axis-aligned side, kept as the bounding box of its endpoints.
///
/// At least one dimension of the box is zero, so the lattice points inside
/// the box are exactly the lattice points on the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) lo: Point,
    pub(crate) hi: Point,
}

impl Span {
    pub(crate) fn between(a: Point, b: Point) -> Self {
        let (min_x, max_x) = ordered(a.x, b.x);
        let (min_y, max_y) = ordered(a.y, b.y);
        Self {
            lo: Point::new(min_x, min_y),
            hi: Point::new(max_x, max_y),
        }
    }

    /// Number of lattice points on the span.
    pub(crate) fn len(&self) -> i64 {
        (self.hi.x - self.lo.x) + (self.hi.y - self.lo.y) + 1
    }

    /// Every point of `other` is also a point of `self`.
    pub(crate) fn covers(&self, other: &Span) -> bool {
        self.lo.x <= other.lo.x
            && self.lo.y <= other.lo.y
            && self.hi.x >= other.hi.x
            && self.hi.y >= other.hi.y
    }

    /// The points both spans share, if any.
    pub(crate) fn meet(&self, other: &Span) -> Option<Span> {
        let lo = Point::new(self.lo.x.max(other.lo.x), self.lo.y.max(other.lo.y));
        let hi = Point::new(self.hi.x.min(other.hi.x), self.hi.y.min(other.hi.y));
        (lo.x <= hi.x && lo.y <= hi.y).then_some(Span { lo, hi })
    }
}

/// Every integer point on the axis-aligned segment `from -> to`, inclusive.
///
/// The walk follows the direction of the segment, so a descending pair gives
/// a descending sequence. Equal endpoints collapse to a single point. Corners
/// of an axis-aligned rectangle always share one coordinate; a pair sharing
/// neither is walked along `x` at `from.y`.
pub(crate) fn lattice_segment(from: Point, to: Point) -> Vec<Point> {
    if from.x == to.x {
        inclusive_steps(from.y, to.y)
            .map(|y| Point::new(from.x, y))
            .collect()
    } else {
        inclusive_steps(from.x, to.x)
            .map(|x| Point::new(x, from.y))
            .collect()
    }
}

/// `from..=to` that also counts down when `to < from`.
fn inclusive_steps(from: i64, to: i64) -> impl Iterator<Item = i64> {
    let step = if to >= from { 1 } else { -1 };
    let len = (to - from).abs() + 1;
    (0..len).map(move |i| from + i * step)
}

#[inline]
fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn top_edge_walks_left_to_right() {
        let rect = Rectangle::new(2, 3, 0, 0);
        assert_eq!(rect.edge(Side::Top), pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]));
    }

    #[test]
    fn right_edge_walks_bottom_to_top() {
        let rect = Rectangle::new(2, 3, 0, 0);
        assert_eq!(rect.edge(Side::Right), pts(&[(3, -2), (3, -1), (3, 0)]));
    }

    #[test]
    fn bottom_and_left_edges() {
        let rect = Rectangle::new(2, 3, 0, 0);
        assert_eq!(
            rect.edge(Side::Bottom),
            pts(&[(0, -2), (1, -2), (2, -2), (3, -2)])
        );
        assert_eq!(rect.edge(Side::Left), pts(&[(0, -2), (0, -1), (0, 0)]));
    }

    #[test]
    fn all_edges_in_side_order() {
        let rect = Rectangle::new(10, 10, 0, 0);
        let [top, right, bottom, left] = rect.all_edge_points();
        assert_eq!(top.len(), 11);
        assert_eq!(right.len(), 11);
        assert_eq!(bottom.len(), 11);
        assert_eq!(left.len(), 11);
        assert_eq!(top[0], rect.top_left());
        assert_eq!(*right.last().unwrap(), rect.top_right());
    }

    #[test]
    fn descending_segment_counts_down() {
        let seq = lattice_segment(Point::new(4, 2), Point::new(4, -1));
        assert_eq!(seq, pts(&[(4, 2), (4, 1), (4, 0), (4, -1)]));

        let seq = lattice_segment(Point::new(1, 7), Point::new(-1, 7));
        assert_eq!(seq, pts(&[(1, 7), (0, 7), (-1, 7)]));
    }

    #[test]
    fn zero_width_collapses_horizontal_edges() {
        let rect = Rectangle::new(3, 0, 5, 5);
        assert_eq!(rect.edge(Side::Top), pts(&[(5, 5)]));
        assert_eq!(rect.edge(Side::Bottom), pts(&[(5, 2)]));
        assert_eq!(rect.edge(Side::Left).len(), 4);
    }

    #[test]
    fn boundary_points_repeat_corners() {
        let rect = Rectangle::new(1, 1, 0, 0);
        // 2 points per side, 4 sides
        assert_eq!(rect.boundary_points().len(), 8);
    }

    #[test]
    fn boundary_membership() {
        let rect = Rectangle::new(10, 10, 0, 0);
        assert!(rect.is_on_boundary(Point::new(0, 0)));
        assert!(rect.is_on_boundary(Point::new(10, -4)));
        assert!(rect.is_on_boundary(Point::new(3, -10)));
        assert!(!rect.is_on_boundary(Point::new(5, -5)));
        assert!(!rect.is_on_boundary(Point::new(11, 0)));
        assert!(!rect.is_on_boundary(Point::new(0, 1)));
    }

    #[test]
    fn spans_match_enumerated_edges() {
        let rect = Rectangle::new(4, 6, -2, 3);
        for (span, points) in rect.edge_spans().iter().zip(rect.all_edge_points()) {
            assert_eq!(span.len(), points.len() as i64);
            assert!(points.contains(&span.lo));
            assert!(points.contains(&span.hi));
        }
    }

    #[test]
    fn span_cover_and_meet() {
        let long = Span::between(Point::new(0, 0), Point::new(10, 0));
        let short = Span::between(Point::new(7, 0), Point::new(3, 0));
        let crossing = Span::between(Point::new(5, 4), Point::new(5, -4));
        let apart = Span::between(Point::new(11, 0), Point::new(20, 0));

        assert!(long.covers(&short));
        assert!(!short.covers(&long));
        assert!(!long.covers(&crossing));
        assert_eq!(long.meet(&crossing), Some(Span::between(Point::new(5, 0), Point::new(5, 0))));
        assert_eq!(long.meet(&short), Some(short));
        assert_eq!(long.meet(&apart), None);
    }

    #[test]
    fn huge_sides_are_measured_without_walking() {
        let rect = Rectangle::new(i32::MAX as i64, i32::MAX as i64, i32::MIN as i64, i32::MAX as i64);
        let [top, right, ..] = rect.edge_spans();
        assert_eq!(top.len(), i32::MAX as i64 + 1);
        assert!(top.meet(&right).is_some());
    }

    #[test]
    fn boundary_membership_agrees_with_enumeration() {
        let rect = Rectangle::new(4, 6, -2, 3);
        for p in rect.boundary_points() {
            assert!(rect.is_on_boundary(p), "{} should be on the boundary", p);
        }
    }
}

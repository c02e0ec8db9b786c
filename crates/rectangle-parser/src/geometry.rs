//! Core geometry types for rectangle-parser.
//!
//! Coordinates live on the integer lattice. Increasing `y` is "up", so a
//! rectangle anchored at its top-left `(x, y)` has its bottom edge at
//! `y - height`.
//!
//! ## Rust Lesson #1: Private Fields as Immutability
//!
//! Rust has no `final` keyword. A struct whose fields are private and which
//! exposes no `&mut self` methods simply *cannot* be changed from outside
//! the module. The corners are computed once in the constructor and the
//! compiler guarantees nobody recomputes them behind our back.

use std::fmt;

use serde::Serialize;

/// A point on the integer grid.
///
/// `i64` keeps `x + width` and `y - height` from overflowing for any
/// 32-bit input a record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four defining vertices of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Index into [`Rectangle::corners`].
    #[inline]
    fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }
}

/// One of the four sides of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides, in the order edges are reported.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Human-readable heading used by verbose output.
    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Right => "Right",
            Side::Bottom => "Bottom",
            Side::Left => "Left",
        }
    }

    /// The two corners joined by this side, in enumeration order.
    pub fn corners(self) -> (Corner, Corner) {
        match self {
            Side::Top => (Corner::TopLeft, Corner::TopRight),
            Side::Right => (Corner::BottomRight, Corner::TopRight),
            Side::Bottom => (Corner::BottomLeft, Corner::BottomRight),
            Side::Left => (Corner::BottomLeft, Corner::TopLeft),
        }
    }
}

/// An axis-aligned rectangle.
///
/// ## Rust Lesson #2: Derived Data in Constructors
///
/// `corners` is filled in `with_id` and never touched again. There are no
/// setters, so every relationship function can take `&Rectangle` and be
/// sure it sees exactly what the loader built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    id: i64,
    height: i64,
    width: i64,
    x: i64,
    y: i64,
    /// TL, TR, BL, BR
    corners: [Point; 4],
}

impl Rectangle {
    /// Create a rectangle without an id (id = 0).
    ///
    /// Positivity of `height` and `width` is the caller's business; the
    /// loader rejects non-positive values before it gets here.
    pub fn new(height: i64, width: i64, x: i64, y: i64) -> Self {
        Self::with_id(0, height, width, x, y)
    }

    /// Create a rectangle carrying a caller-assigned id.
    pub fn with_id(id: i64, height: i64, width: i64, x: i64, y: i64) -> Self {
        let right = x + width;
        let bottom = y - height;
        Self {
            id,
            height,
            width,
            x,
            y,
            corners: [
                Point::new(x, y),
                Point::new(right, y),
                Point::new(x, bottom),
                Point::new(right, bottom),
            ],
        }
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.width
    }

    #[inline]
    pub fn x(&self) -> i64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i64 {
        self.y
    }

    /// All four corners as TL, TR, BL, BR.
    #[inline]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    #[inline]
    pub fn corner(&self, corner: Corner) -> Point {
        self.corners[corner.index()]
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.corner(Corner::TopLeft)
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        self.corner(Corner::TopRight)
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        self.corner(Corner::BottomLeft)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.corner(Corner::BottomRight)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [tl, tr, bl, br] = self.corners;
        write!(
            f,
            "ID: {}, WIDTH: {}, HEIGHT: {} | COORDINATES: TL: ({},{}) / TR: ({},{}) / BL: ({},{}) / BR: ({},{})",
            self.id, self.width, self.height,
            tl.x, tl.y, tr.x, tr.y, bl.x, bl.y, br.x, br.y,
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Geometric primitives for rasterization.
//!
//! Provides the integer value types drawn onto a [`Canvas`](crate::canvas::Canvas).
//! Shapes are canonicalized on construction so that equality and hashing do not
//! depend on the order in which their defining points were given.

use std::fmt;

/// A 2D point with integer coordinates.
///
/// Points order lexicographically: by `x` first, then by `y`. Lines and
/// rectangles rely on this order to pick their canonical endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row, growing downwards).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Order two points so the smaller one comes first.
#[inline]
fn canonical(a: Point, b: Point) -> (Point, Point) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A line segment between two points.
///
/// The endpoints are stored in canonical order (`from <= to`), so
/// `Line::new(a, b) == Line::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    from: Point,
    to: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        let (from, to) = canonical(a, b);
        Self { from, to }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The smaller endpoint.
    #[must_use]
    pub const fn from(&self) -> Point {
        self.from
    }

    /// The larger endpoint.
    #[must_use]
    pub const fn to(&self) -> Point {
        self.to
    }

    /// Whether both endpoints share a column.
    #[must_use]
    pub const fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }
}

/// An axis-aligned rectangle spanned by two opposite corners.
///
/// Only the canonical `left`/`right` corners are stored; the four named
/// corners are derived from them. Two rectangles built from either diagonal
/// pair of the same box compare unequal, since `(left, right)` differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    left: Point,
    right: Point,
}

impl Rectangle {
    /// Create a rectangle from two opposite corners.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        let (left, right) = canonical(a, b);
        Self { left, right }
    }

    /// Create a rectangle from corner coordinates.
    #[must_use]
    pub fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The canonical smaller corner.
    #[must_use]
    pub const fn left(&self) -> Point {
        self.left
    }

    /// The canonical larger corner.
    #[must_use]
    pub const fn right(&self) -> Point {
        self.right
    }

    /// Corner sharing `left`'s column, mirrored onto `right`'s row.
    const fn left_mirror(&self) -> Point {
        Point::new(self.left.x, self.right.y)
    }

    /// Corner sharing `right`'s column, mirrored onto `left`'s row.
    const fn right_mirror(&self) -> Point {
        Point::new(self.right.x, self.left.y)
    }

    /// Top-left corner (smallest y in the left column).
    #[must_use]
    pub const fn top_left(&self) -> Point {
        if self.left.y <= self.left_mirror().y {
            self.left
        } else {
            self.left_mirror()
        }
    }

    /// Bottom-left corner (largest y in the left column).
    #[must_use]
    pub const fn bottom_left(&self) -> Point {
        if self.left.y > self.left_mirror().y {
            self.left
        } else {
            self.left_mirror()
        }
    }

    /// Top-right corner (smallest y in the right column).
    #[must_use]
    pub const fn top_right(&self) -> Point {
        if self.right.y <= self.right_mirror().y {
            self.right
        } else {
            self.right_mirror()
        }
    }

    /// Bottom-right corner (largest y in the right column).
    #[must_use]
    pub const fn bottom_right(&self) -> Point {
        if self.right.y > self.right_mirror().y {
            self.right
        } else {
            self.right_mirror()
        }
    }

    /// The four outline edges, clockwise from the top edge.
    #[must_use]
    pub fn edges(&self) -> [Line; 4] {
        let (tl, tr) = (self.top_left(), self.top_right());
        let (bl, br) = (self.bottom_left(), self.bottom_right());
        [Line::new(tl, tr), Line::new(tr, br), Line::new(br, bl), Line::new(bl, tl)]
    }

    /// Number of columns covered, endpoints inclusive.
    #[must_use]
    pub fn width(&self) -> u64 {
        u64::from(self.left.x.abs_diff(self.right.x)) + 1
    }

    /// Number of rows covered, endpoints inclusive.
    #[must_use]
    pub fn height(&self) -> u64 {
        u64::from(self.left.y.abs_diff(self.right.y)) + 1
    }
}

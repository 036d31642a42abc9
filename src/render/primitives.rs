//! Primitive rasterization functions.
//!
//! Implements the plotting of geometric shapes onto the integer grid.

use crate::geometry::{Line, Point, Rectangle};

/// Trait for drawable primitives.
///
/// A drawable knows the ordered sequence of grid points it occupies. Consumers
/// such as [`Canvas::draw`](crate::canvas::Canvas::draw) treat the sequence as
/// a set, so repeated points are harmless.
pub trait Drawable {
    /// The points this primitive occupies, in emission order.
    fn plot(&self) -> Vec<Point>;
}

impl<D: Drawable + ?Sized> Drawable for &D {
    fn plot(&self) -> Vec<Point> {
        (**self).plot()
    }
}

impl<D: Drawable> Drawable for [D] {
    fn plot(&self) -> Vec<Point> {
        self.iter().flat_map(Drawable::plot).collect()
    }
}

impl<D: Drawable> Drawable for Vec<D> {
    fn plot(&self) -> Vec<Point> {
        self.as_slice().plot()
    }
}

// ============================================================================
// Point
// ============================================================================

impl Drawable for Point {
    fn plot(&self) -> Vec<Point> {
        vec![*self]
    }
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Rasterize the segment between two points.
///
/// Endpoints are canonicalized first, so the result starts at the smaller
/// point and ends exactly at the larger one.
///
/// Non-vertical segments are walked column by column with an accumulated
/// error term (the Bresenham midpoint rule): the ordinate moves one step
/// towards the target whenever the error reaches `0.5`. Since the walk moves
/// at most one row per column, segments steeper than 45° are finished with a
/// vertical run in the last column.
///
/// # References
///
/// Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
pub fn rasterize_line(a: Point, b: Point) -> Vec<Point> {
    Line::new(a, b).plot()
}

/// Points emitted for a segment spanning `dx` columns and `dy` rows.
///
/// The walk advances one cell per step along the longer axis.
fn plot_len(dx: u32, dy: u32) -> usize {
    dx.max(dy) as usize + 1
}

/// Walk a canonical non-vertical segment (`from.x < to.x`).
fn plot_standard(from: Point, to: Point) -> Vec<Point> {
    let dx = from.x.abs_diff(to.x);
    let dy = from.y.abs_diff(to.y);
    let slope = f64::from(dy) / f64::from(dx);
    let step = if from.y < to.y { 1 } else { -1 };

    let mut points = Vec::with_capacity(plot_len(dx, dy));
    let mut error = 0.0_f64;
    let mut x = from.x;
    let mut y = from.y;

    loop {
        points.push(Point::new(x, y));
        if x == to.x {
            break;
        }

        error += slope;
        if error >= 0.5 {
            y += step;
            error -= 1.0;
        }
        x += 1;
    }

    // Steep segments fall short of the target row; finish in the last column.
    while y != to.y {
        y += if y < to.y { 1 } else { -1 };
        points.push(Point::new(to.x, y));
    }

    points
}

/// Walk a canonical vertical segment (`from.y <= to.y`).
fn plot_vertical(from: Point, to: Point) -> Vec<Point> {
    (from.y..=to.y).map(|y| Point::new(from.x, y)).collect()
}

impl Drawable for Line {
    fn plot(&self) -> Vec<Point> {
        let (from, to) = (self.from(), self.to());
        let points = if self.is_vertical() {
            plot_vertical(from, to)
        } else {
            plot_standard(from, to)
        };
        tracing::trace!(%from, %to, points = points.len(), "rasterized line");
        points
    }
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

impl Drawable for Rectangle {
    /// Outline points, edge by edge. Corners appear once per adjoining edge.
    fn plot(&self) -> Vec<Point> {
        self.edges().iter().flat_map(Drawable::plot).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn point() -> impl Strategy<Value = Point> {
        (-60i32..60, -60i32..60).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Both endpoints are plotted, in canonical order.
        #[test]
        fn prop_line_starts_and_ends_at_endpoints(a in point(), b in point()) {
            let line = Line::new(a, b);
            let plot = line.plot();
            prop_assert_eq!(plot.first().copied(), Some(line.from()));
            prop_assert_eq!(plot.last().copied(), Some(line.to()));
            prop_assert!(plot.contains(&a));
            prop_assert!(plot.contains(&b));
        }

        /// Consecutive points never skip a cell and never go backwards.
        #[test]
        fn prop_line_is_connected_and_monotonic(a in point(), b in point()) {
            let line = Line::new(a, b);
            let plot = line.plot();
            for pair in plot.windows(2) {
                let (p, q) = (pair[0], pair[1]);
                prop_assert!(q.x - p.x == 0 || q.x - p.x == 1, "{} -> {}", p, q);
                prop_assert!((q.y - p.y).abs() <= 1, "{} -> {}", p, q);
                prop_assert!(p != q, "duplicate point {}", p);
            }
            if line.is_vertical() {
                prop_assert_eq!(plot.len() as u32, a.y.abs_diff(b.y) + 1);
            } else {
                let columns: HashSet<i32> = plot.iter().map(|p| p.x).collect();
                prop_assert_eq!(columns.len() as u32, a.x.abs_diff(b.x) + 1);
            }
        }

        /// Line equality and plot do not depend on argument order.
        #[test]
        fn prop_line_symmetric(a in point(), b in point()) {
            prop_assert_eq!(Line::new(a, b), Line::new(b, a));
            prop_assert_eq!(Line::new(a, b).plot(), Line::new(b, a).plot());
        }

        /// The ordinate never passes the target row.
        #[test]
        fn prop_line_stays_within_bounding_box(a in point(), b in point()) {
            let (lo_y, hi_y) = (a.y.min(b.y), a.y.max(b.y));
            for p in Line::new(a, b).plot() {
                prop_assert!(p.y >= lo_y && p.y <= hi_y, "{} escapes rows {}..={}", p, lo_y, hi_y);
            }
        }

        /// Rectangle outline is the union of its edges, whichever corners built it.
        #[test]
        fn prop_rect_outline_is_union_of_edges(a in point(), b in point()) {
            let rect = Rectangle::new(a, b);
            let lit: HashSet<Point> = rect.plot().into_iter().collect();
            let swapped: HashSet<Point> = Rectangle::new(b, a).plot().into_iter().collect();
            let edges: HashSet<Point> = rect.edges().iter().flat_map(Drawable::plot).collect();
            prop_assert_eq!(&lit, &swapped);
            prop_assert_eq!(&lit, &edges);
            prop_assert!(lit.contains(&rect.top_left()));
            prop_assert!(lit.contains(&rect.bottom_right()));
        }
    }
}

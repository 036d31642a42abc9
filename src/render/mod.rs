//! Rasterization of geometric primitives.
//!
//! Turns points, lines and rectangles into the sequence of grid cells they
//! occupy.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: error-accumulation walk along the x axis, finished
//!   with a vertical run for steep segments
//! - **Rectangle Outline**: four canonical edges composed from line plots
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod primitives;

pub use primitives::{rasterize_line, Drawable};

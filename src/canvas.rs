//! Sparse pixel canvas.
//!
//! A [`Canvas`] records which cells of an integer grid are lit. The declared
//! width and height only bound what renderers visit; drawing never clips, so
//! points outside the window are kept but never shown.

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::geometry::Point;
use crate::output::{Renderer, RendererKind};
use crate::render::Drawable;

/// Sparse monochrome pixel grid.
///
/// Cells are stored as a set of lit points, so drawing the same point twice
/// has no further effect and memory grows with the number of lit cells rather
/// than with the declared area.
///
/// # Example
///
/// ```
/// use trueno_raster::prelude::*;
///
/// let mut canvas = Canvas::new(3, 3);
/// canvas.draw(&Rectangle::new(Point::new(0, 0), Point::new(2, 2)));
/// assert_eq!(canvas.render_as(RendererKind::Ascii), "@@@\n@-@\n@@@");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Declared width in cells.
    width: u32,
    /// Declared height in cells.
    height: u32,
    /// Lit cells, including any outside the declared window.
    pixels: HashSet<Point>,
}

impl Canvas {
    /// Create an empty canvas with the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixels: HashSet::new() }
    }

    /// Get the width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Light a single cell.
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.pixels.insert(Point::new(x, y));
    }

    /// Whether the cell at `(x, y)` has been drawn.
    #[must_use]
    pub fn pixel_at(&self, x: i32, y: i32) -> bool {
        self.pixels.contains(&Point::new(x, y))
    }

    /// Light every cell a shape occupies.
    pub fn draw<D: Drawable + ?Sized>(&mut self, shape: &D) {
        let plot = shape.plot();
        let before = self.pixels.len();
        self.pixels.extend(plot.iter().copied());
        tracing::trace!(
            plotted = plot.len(),
            added = self.pixels.len() - before,
            "drew shape"
        );
    }

    /// Whether `(x, y)` falls inside the declared window.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        u32::try_from(x).is_ok_and(|x| x < self.width)
            && u32::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// Number of lit cells, including those outside the window.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.pixels.len()
    }

    /// Whether nothing has been drawn yet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterate over lit cells in no particular order.
    pub fn pixels(&self) -> impl Iterator<Item = Point> + '_ {
        self.pixels.iter().copied()
    }

    /// Render with one of the built-in renderers.
    #[must_use]
    pub fn render_as(&self, kind: RendererKind) -> String {
        kind.render(self)
    }

    /// Render with any [`Renderer`].
    #[must_use]
    pub fn render_with<R: Renderer + ?Sized>(&self, renderer: &R) -> String {
        renderer.render(self)
    }

    /// Render with a built-in renderer and write the text to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to_file<P: AsRef<Path>>(&self, kind: RendererKind, path: P) -> Result<()> {
        kind.write_to_file(self, path)
    }
}

//! Output renderers (ASCII, HTML).
//!
//! A [`Renderer`] turns a [`Canvas`] into text. The built-in renderers are
//! stateless and selected through the closed [`RendererKind`] set.

mod ascii;
mod html;

pub use ascii::AsciiRenderer;
pub use html::HtmlRenderer;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::canvas::Canvas;
use crate::error::{Error, Result};

/// Capability to render a canvas to text.
pub trait Renderer {
    /// Render the declared window of `canvas`.
    fn render(&self, canvas: &Canvas) -> String;
}

/// The built-in renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RendererKind {
    /// `@` / `-` characters, one line per row.
    #[default]
    Ascii,
    /// Standalone HTML document with one inline box per cell.
    Html,
}

impl RendererKind {
    /// All built-in renderers.
    pub const ALL: [Self; 2] = [Self::Ascii, Self::Html];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Html => "html",
        }
    }

    /// Conventional file extension for this output.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Ascii => "txt",
            Self::Html => "html",
        }
    }

    /// Write the rendered canvas to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to_file<P: AsRef<Path>>(self, canvas: &Canvas, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.render(canvas);
        fs::write(path, &text)?;
        tracing::debug!(renderer = %self, path = %path.display(), bytes = text.len(), "wrote canvas");
        Ok(())
    }
}

impl Renderer for RendererKind {
    fn render(&self, canvas: &Canvas) -> String {
        tracing::debug!(
            renderer = %self,
            width = canvas.width(),
            height = canvas.height(),
            "rendering canvas"
        );
        match self {
            Self::Ascii => AsciiRenderer.render(canvas),
            Self::Html => HtmlRenderer.render(canvas),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RendererKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownRenderer(s.to_string()))
    }
}

/// Walk the declared window row by row, mapping each cell to a token.
///
/// Columns are concatenated; rows are joined with `row_separator`.
pub(crate) fn render_grid(
    canvas: &Canvas,
    lit: &str,
    unlit: &str,
    row_separator: &str,
) -> String {
    let cell = lit.len().max(unlit.len());
    let rows = canvas.height() as usize;
    let mut output = String::with_capacity(
        rows * (canvas.width() as usize * cell + row_separator.len()),
    );

    for y in 0..canvas.height() {
        if y > 0 {
            output.push_str(row_separator);
        }
        for x in 0..canvas.width() {
            let token = if cell_lit(canvas, x, y) { lit } else { unlit };
            output.push_str(token);
        }
    }

    output
}

/// Whether the window cell `(x, y)` is lit.
///
/// Cells past `i32::MAX` in either axis have no matching point and stay unlit.
fn cell_lit(canvas: &Canvas, x: u32, y: u32) -> bool {
    match (i32::try_from(x), i32::try_from(y)) {
        (Ok(x), Ok(y)) => canvas.pixel_at(x, y),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    #[test]
    fn test_parse_renderer_kind() {
        assert_eq!("ascii".parse::<RendererKind>().unwrap(), RendererKind::Ascii);
        assert_eq!("HTML".parse::<RendererKind>().unwrap(), RendererKind::Html);
        assert_eq!(" Html ".parse::<RendererKind>().unwrap(), RendererKind::Html);
    }

    #[test]
    fn test_parse_unknown_renderer() {
        let err = "svg".parse::<RendererKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownRenderer(ref name) if name == "svg"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in RendererKind::ALL {
            assert_eq!(kind.to_string().parse::<RendererKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(RendererKind::Ascii.file_extension(), "txt");
        assert_eq!(RendererKind::Html.file_extension(), "html");
    }

    #[test]
    fn test_kind_dispatches_to_renderer() {
        let mut canvas = Canvas::new(4, 3);
        canvas.draw(&Rectangle::from_coords(0, 0, 3, 2));
        assert_eq!(RendererKind::Ascii.render(&canvas), AsciiRenderer.render(&canvas));
        assert_eq!(RendererKind::Html.render(&canvas), HtmlRenderer.render(&canvas));
    }

    #[test]
    fn test_render_grid_row_major() {
        let mut canvas = Canvas::new(3, 2);
        canvas.set_pixel(2, 0);
        canvas.set_pixel(0, 1);
        assert_eq!(render_grid(&canvas, "X", ".", "|"), "..X|X..");
    }

    #[test]
    fn test_cell_lit_beyond_i32_range() {
        let mut canvas = Canvas::new(u32::MAX, u32::MAX);
        canvas.set_pixel(i32::MIN, 0);
        canvas.set_pixel(0, i32::MIN);
        canvas.set_pixel(i32::MAX, i32::MAX);
        assert!(!cell_lit(&canvas, 1 << 31, 0));
        assert!(!cell_lit(&canvas, 0, 1 << 31));
        assert!(!cell_lit(&canvas, u32::MAX, u32::MAX));
        assert!(cell_lit(&canvas, i32::MAX as u32, i32::MAX as u32));
    }

    #[test]
    fn test_render_grid_empty_window() {
        let canvas = Canvas::new(0, 0);
        assert_eq!(render_grid(&canvas, "X", ".", "|"), "");
        let canvas = Canvas::new(0, 2);
        assert_eq!(render_grid(&canvas, "X", ".", "|"), "|");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas.txt");
        let mut canvas = Canvas::new(2, 1);
        canvas.set_pixel(1, 0);
        RendererKind::Ascii.write_to_file(&canvas, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "-@");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("canvas.html");
        let err = RendererKind::Html.write_to_file(&Canvas::new(1, 1), &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

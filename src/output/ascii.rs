//! Plain-text renderer.
//!
//! One line per canvas row, `@` for lit cells and `-` for unlit ones. Lines
//! are joined with `\n` and there is no trailing newline.

use super::{render_grid, Renderer};
use crate::canvas::Canvas;

/// ASCII renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    /// Glyph for a lit cell.
    pub const LIT: &'static str = "@";
    /// Glyph for an unlit cell.
    pub const UNLIT: &'static str = "-";
    /// Row separator.
    pub const ROW_SEPARATOR: &'static str = "\n";
}

impl Renderer for AsciiRenderer {
    fn render(&self, canvas: &Canvas) -> String {
        render_grid(canvas, Self::LIT, Self::UNLIT, Self::ROW_SEPARATOR)
    }
}

//! HTML renderer.
//!
//! Produces a standalone document: an inline stylesheet turns every cell into
//! a small rounded box, `<b>` for lit cells (dark) and `<i>` for unlit ones
//! (light). Rows are separated by `<br>` line breaks.

use super::{render_grid, Renderer};
use crate::canvas::Canvas;

/// HTML renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Document shell up to the opening of the canvas container.
    pub const HEADER: &'static str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Rendered Canvas</title>
  <style type="text/css">
    .canvas {
      font-size: 1px;
      line-height: 1px;
    }
    .canvas * {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 5px;
    }
    .canvas i {
      background-color: #eee;
    }
    .canvas b {
      background-color: #333;
    }
  </style>
</head>
<body>
<div class="canvas">
"#;

    /// Closes the canvas container and the document.
    pub const FOOTER: &'static str = "\n</div>\n</body>\n</html>\n";

    /// Element for a lit cell.
    pub const LIT: &'static str = "<b></b>";
    /// Element for an unlit cell.
    pub const UNLIT: &'static str = "<i></i>";
    /// Row separator.
    pub const ROW_SEPARATOR: &'static str = "<br>\n";
}

impl Renderer for HtmlRenderer {
    fn render(&self, canvas: &Canvas) -> String {
        let grid = render_grid(canvas, Self::LIT, Self::UNLIT, Self::ROW_SEPARATOR);
        let mut output = String::with_capacity(Self::HEADER.len() + grid.len() + Self::FOOTER.len());
        output.push_str(Self::HEADER);
        output.push_str(&grid);
        output.push_str(Self::FOOTER);
        output
    }
}

//! # Trueno-Raster
//!
//! Minimal 2D raster drawing engine with integer geometry.
//!
//! Points, lines and axis-aligned rectangles are rasterized onto a sparse
//! pixel grid and rendered through interchangeable text backends.
//!
//! ## Features
//!
//! - **Integer geometry**: `Point`, `Line` and `Rectangle` value types with
//!   order-independent equality and hashing
//! - **Bresenham rasterization**: error-accumulation line walk that always
//!   ends exactly on its endpoint
//! - **Multiple Outputs**: ASCII and HTML rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut canvas = Canvas::new(3, 3);
//! canvas.draw(&Rectangle::new(Point::new(0, 0), Point::new(2, 2)));
//!
//! assert_eq!(canvas.render_as(RendererKind::Ascii), "@@@\n@-@\n@@@");
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: the `trueno-raster` command-line binary
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, lines, rectangles).
pub mod geometry;

/// Sparse pixel canvas.
pub mod canvas;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of primitives into grid points.
pub mod render;

/// Output renderers (ASCII, HTML).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Line, Point, Rectangle};
    pub use crate::output::{AsciiRenderer, HtmlRenderer, Renderer, RendererKind};
    pub use crate::render::{rasterize_line, Drawable};
}

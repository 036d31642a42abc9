//! Error types for trueno-raster operations.
//!
//! Geometry, rasterization and canvas updates are total; errors only arise at
//! the edges, when naming a renderer or writing rendered output.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Renderer name that is not one of the built-in renderers.
    #[error("Unknown renderer: {0:?} (expected \"ascii\" or \"html\")")]
    UnknownRenderer(String),
}

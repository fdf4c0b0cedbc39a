//! Error types for running the stencil.

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Crate result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A scalar field buffer could not be allocated.
    #[error("could not allocate {elements} grid values: {source}")]
    Allocation {
        elements: usize,
        #[source]
        source: TryReserveError,
    },

    /// Both grid dimensions must be at least one cell.
    #[error("grid of {nx} x {ny} has no cells")]
    EmptyGrid { nx: usize, ny: usize },

    /// The padded buffer size or a dimension does not fit the index types.
    #[error("grid of {nx} x {ny} is too large to allocate")]
    GridTooLarge { nx: usize, ny: usize },

    /// The output file could not be opened for writing.
    #[error("could not open {}: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

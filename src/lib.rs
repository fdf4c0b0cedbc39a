//! Halo padded 2D heat stencil.
//!
//! Two column-major scalar fields are allocated with a zero halo,
//! initialized with a checkerboard, and smoothed by a weighted
//! 5 point stencil in ping-pong fashion. The result is written
//! as a grayscale PGM image.

pub mod build_info;
pub mod cli;
pub mod domain;
pub mod driver;
pub mod error;
pub mod init;
pub mod output;
pub mod solver;
pub mod stencil;
pub mod util;

pub use driver::{run, RunConfig, RunReport};
pub use error::{Error, Result};

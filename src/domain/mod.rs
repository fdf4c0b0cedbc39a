//! This module manages the scalar fields the stencil runs on.
//! Every field is stored column-major inside a padded allocation,
//! with a halo of zeros before and after the logical grid.
//! Views translate logical grid coordinates into that storage.

mod pair;
mod view;

pub use pair::*;
pub use view::*;

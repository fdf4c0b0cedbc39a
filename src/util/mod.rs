pub use nalgebra::{matrix, vector};
pub use num_traits::Zero;

mod aabb;
pub mod indexing;
pub use aabb::*;

/// Grid coordinate, component 0 is the column `i` and component 1 the row `j`.
pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Inclusive `[min, max]` per dimension, one row per dimension.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;

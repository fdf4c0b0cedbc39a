//! Linear index math for coordinate spaces.
//!
//! The first dimension has the largest stride and the last dimension is
//! contiguous. For a 2D grid with exclusive bounds `[nx, ny]` this is
//! column-major storage: `(i, j)` lives at `j + i * ny`.

use crate::util::*;

pub fn real_buffer_size<const DIMENSION: usize>(
    exclusive_bound: &Coord<DIMENSION>,
) -> usize {
    exclusive_bound.iter().map(|d| *d as usize).product()
}

pub fn coord_to_linear<const GRID_DIMENSION: usize>(
    coord: &Coord<GRID_DIMENSION>,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> usize {
    let mut linear = 0;
    for d in 0..GRID_DIMENSION {
        debug_assert!(coord[d] >= 0);
        debug_assert!(coord[d] < exclusive_bounds[d]);
        linear = linear * exclusive_bounds[d] as usize + coord[d] as usize;
    }
    linear
}

pub fn linear_to_coord<const GRID_DIMENSION: usize>(
    linear_index: usize,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> Coord<GRID_DIMENSION> {
    let mut result = Coord::zero();
    let mut remainder = linear_index;
    for d in (0..GRID_DIMENSION).rev() {
        let extent = exclusive_bounds[d] as usize;
        result[d] = (remainder % extent) as i32;
        remainder /= extent;
    }
    debug_assert_eq!(remainder, 0);
    result
}

//! Field Initialization
//!
//! Sets up the initial condition for a run: both fields cleared,
//! then a checkerboard painted into the current field.

use crate::domain::*;
use crate::util::*;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Tiles per axis of the default pattern.
pub const DEFAULT_TILES: NonZeroUsize = NonZeroUsize::MIN.saturating_add(7);

/// Checkerboard of `tiles` x `tiles` rectangular tiles.
/// Tile `(tx, ty)` gets `high` when `tx + ty` is odd and `low` otherwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkerboard {
    tiles: NonZeroUsize,
    high: f64,
    low: f64,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Checkerboard::new(DEFAULT_TILES, 100.0, 0.0)
    }
}

impl Checkerboard {
    pub fn new(tiles: NonZeroUsize, high: f64, low: f64) -> Self {
        Checkerboard { tiles, high, low }
    }

    pub fn tiles(&self) -> usize {
        self.tiles.get()
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    /// Cells covered by `tile` along an axis with `extent` cells.
    /// Integer division means tiles may differ in size by one cell,
    /// or be empty when `extent < tiles`.
    pub fn tile_range(&self, tile: usize, extent: usize) -> Range<usize> {
        let tiles = self.tiles();
        tile * extent / tiles..(tile + 1) * extent / tiles
    }

    pub fn tile_value(&self, tx: usize, ty: usize) -> f64 {
        if (tx + ty) % 2 == 1 {
            self.high
        } else {
            self.low
        }
    }

    /// Write the pattern over the whole logical region of `domain`.
    pub fn paint<DomainType: DomainView>(&self, domain: &mut DomainType) {
        let exclusive_bounds = domain.aabb().exclusive_bounds();
        let nx = exclusive_bounds[0] as usize;
        let ny = exclusive_bounds[1] as usize;
        for ty in 0..self.tiles() {
            for tx in 0..self.tiles() {
                let value = self.tile_value(tx, ty);
                for j in self.tile_range(ty, ny) {
                    for i in self.tile_range(tx, nx) {
                        let coord = vector![i as i32, j as i32];
                        domain.set_coord(&coord, value);
                    }
                }
            }
        }
    }

    /// Sum of the painted field over an `nx` by `ny` grid.
    pub fn expected_sum(&self, nx: usize, ny: usize) -> f64 {
        let mut result = 0.0;
        for ty in 0..self.tiles() {
            for tx in 0..self.tiles() {
                let area = self.tile_range(tx, nx).len()
                    * self.tile_range(ty, ny).len();
                result += self.tile_value(tx, ty) * area as f64;
            }
        }
        result
    }
}

/// Zero both fields over their full padded extent,
/// then paint `pattern` into the logical region of the current field.
/// The halo is left at zero, so the stencil never reads stale values
/// there.
pub fn checkerboard(pair: &mut DomainPair, pattern: &Checkerboard) {
    profiling::scope!("init::checkerboard");
    let (current, next) = pair.split_mut();
    current.padded_buffer_mut().fill(0.0);
    next.padded_buffer_mut().fill(0.0);
    pattern.paint(&mut current.as_slice_domain());
    tracing::debug!(tiles = pattern.tiles(), "painted checkerboard");
}

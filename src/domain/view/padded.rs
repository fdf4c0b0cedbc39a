use super::*;
use crate::error::{Error, Result};

/// Owned scalar field with a halo on both ends of its allocation.
///
/// The allocation holds `nx * (ny + 2)` values: `nx` halo values,
/// the `nx * ny` logical values in column-major order, then another
/// `nx` halo values. The halo is never part of the logical view.
pub struct PaddedDomain {
    aabb: AABB<2>,
    halo: usize,
    buffer: Vec<f64>,
}

impl PaddedDomain {
    /// Allocate a zeroed field for `aabb`.
    pub fn new(aabb: AABB<2>) -> Result<Self> {
        let exclusive_bounds = aabb.exclusive_bounds();
        let nx = exclusive_bounds[0] as usize;
        let ny = exclusive_bounds[1] as usize;
        let padded_len = ny
            .checked_add(2)
            .and_then(|padded_ny| padded_ny.checked_mul(nx))
            .ok_or(Error::GridTooLarge { nx, ny })?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(padded_len)
            .map_err(|source| Error::Allocation {
                elements: padded_len,
                source,
            })?;
        buffer.resize(padded_len, 0.0);

        Ok(PaddedDomain {
            aabb,
            halo: nx,
            buffer,
        })
    }

    /// Number of halo values on each end of the allocation.
    pub fn halo_len(&self) -> usize {
        self.halo
    }

    pub fn padded_len(&self) -> usize {
        self.buffer.len()
    }

    /// The whole allocation, halo included.
    pub fn padded_buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub fn padded_buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    /// Leading and trailing halo.
    pub fn halo(&self) -> (&[f64], &[f64]) {
        let end = self.halo + self.aabb.buffer_size();
        (&self.buffer[..self.halo], &self.buffer[end..])
    }

    /// Translate a logical linear index into the padded allocation.
    #[track_caller]
    pub fn padded_index(&self, linear_index: usize) -> usize {
        debug_assert!(
            linear_index < self.aabb.buffer_size(),
            "{} is outside logical grid {}",
            linear_index,
            self.aabb
        );
        self.halo + linear_index
    }

    /// Translate a logical coordinate into a logical linear index.
    #[track_caller]
    pub fn logical_index(&self, world_coord: &Coord<2>) -> usize {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        self.aabb.coord_to_linear(world_coord)
    }

    /// Borrow the logical region as a slice domain.
    pub fn as_slice_domain(&mut self) -> SliceDomain<'_> {
        let aabb = self.aabb;
        SliceDomain::new(aabb, self.buffer_mut())
    }
}

impl DomainView for PaddedDomain {
    fn aabb(&self) -> &AABB<2> {
        &self.aabb
    }

    fn buffer(&self) -> &[f64] {
        let range = self.halo..self.halo + self.aabb.buffer_size();
        &self.buffer[range]
    }

    fn buffer_mut(&mut self) -> &mut [f64] {
        let range = self.halo..self.halo + self.aabb.buffer_size();
        &mut self.buffer[range]
    }

    #[track_caller]
    fn view(&self, world_coord: &Coord<2>) -> f64 {
        let index = self.padded_index(self.logical_index(world_coord));
        self.buffer[index]
    }

    #[track_caller]
    fn set_coord(&mut self, world_coord: &Coord<2>, value: f64) {
        let index = self.padded_index(self.logical_index(world_coord));
        self.buffer[index] = value;
    }
}

use super::*;

/// Logical view over a borrowed buffer.
/// Used to lend a field's logical region without its halo,
/// or to run the stencil on plain unpadded storage.
pub struct SliceDomain<'a> {
    aabb: AABB<2>,
    buffer: &'a mut [f64],
}

impl<'a> SliceDomain<'a> {
    pub fn new(aabb: AABB<2>, buffer: &'a mut [f64]) -> Self {
        debug_assert!(buffer.len() >= aabb.buffer_size());
        SliceDomain { aabb, buffer }
    }
}

impl DomainView for SliceDomain<'_> {
    fn aabb(&self) -> &AABB<2> {
        &self.aabb
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer[0..self.aabb.buffer_size()]
    }

    fn buffer_mut(&mut self) -> &mut [f64] {
        let range = 0..self.aabb.buffer_size();
        &mut self.buffer[range]
    }
}

mod padded;
mod slice;

pub use padded::*;
pub use slice::*;

use crate::util::*;

/// Logical view of a 2D scalar field.
/// `buffer` covers exactly the logical grid described by `aabb`,
/// in the column-major order `AABB::coord_to_linear` defines.
pub trait DomainView {
    fn aabb(&self) -> &AABB<2>;

    fn buffer(&self) -> &[f64];

    fn buffer_mut(&mut self) -> &mut [f64];

    fn view(&self, world_coord: &Coord<2>) -> f64 {
        debug_assert!(
            self.aabb().contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb(),
            world_coord
        );
        let index = self.aabb().coord_to_linear(world_coord);
        self.buffer()[index]
    }

    fn set_coord(&mut self, world_coord: &Coord<2>, value: f64) {
        debug_assert!(
            self.aabb().contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb(),
            world_coord
        );
        let index = self.aabb().coord_to_linear(world_coord);
        self.buffer_mut()[index] = value;
    }

    fn set_values<F: Fn(Coord<2>) -> f64>(&mut self, f: F) {
        let aabb = *self.aabb();
        for (linear, value_mut) in self.buffer_mut().iter_mut().enumerate() {
            *value_mut = f(aabb.linear_to_coord(linear));
        }
    }

    /// Total heat in the field.
    fn sum(&self) -> f64 {
        self.buffer().iter().sum()
    }

    /// Sum of squares over the field.
    fn energy(&self) -> f64 {
        self.buffer().iter().map(|v| v * v).sum()
    }

    /// Largest value in the field, never less than 0.0.
    fn max_value(&self) -> f64 {
        self.buffer()
            .iter()
            .fold(0.0, |maximum, &v| if v > maximum { v } else { maximum })
    }
}

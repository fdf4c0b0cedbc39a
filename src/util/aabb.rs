use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) for coordinate types.
/// Each instance is inclusive of both corners.
/// All mapping between coordinates and linear buffer offsets goes
/// through here, see `indexing` for the storage order.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const DIMENSION: usize> std::fmt::Display for AABB<DIMENSION> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}", self.bounds)
    }
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Create an AABB anchored at the origin with the given
    /// number of cells per dimension.
    pub fn from_exclusive_bounds(exclusive_bounds: Coord<DIMENSION>) -> Self {
        let max = exclusive_bounds.add_scalar(-1);
        let result = AABB {
            bounds: Bounds::from_columns(&[Coord::zero(), max]),
        };
        debug_assert!(result.check_validity());
        result
    }

    /// Moving min to the origin, returns the exclusive size in each direction
    /// i.e. [0, 9] would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord<DIMENSION>) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord<DIMENSION> {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        (0..DIMENSION).all(|d| {
            coord[d] >= self.bounds[(d, 0)] && coord[d] <= self.bounds[(d, 1)]
        })
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord<DIMENSION> {
        self.bounds.column(1).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        (0..DIMENSION).all(|d| self.bounds[(d, 0)] <= self.bounds[(d, 1)])
    }

    /// Return iterator over contained coords
    /// in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord<DIMENSION>> {
        let aabb = *self;
        (0..aabb.buffer_size()).map(move |i| aabb.linear_to_coord(i))
    }

    /// Linear distance to each coordinate offset.
    /// The last dimension goes the fastest.
    pub fn coord_offset_to_linear<const NEIGHBORHOOD_SIZE: usize>(
        &self,
        coord_offsets: &[Coord<DIMENSION>; NEIGHBORHOOD_SIZE],
    ) -> [i32; NEIGHBORHOOD_SIZE] {
        let exclusive_bounds = self.exclusive_bounds();
        let mut linear_offsets = [0; NEIGHBORHOOD_SIZE];
        let mut stride = 1;
        for d in (0..DIMENSION).rev() {
            for (linear, offset) in
                linear_offsets.iter_mut().zip(coord_offsets.iter())
            {
                *linear += offset[d] * stride;
            }
            if d > 0 {
                stride *= exclusive_bounds[d];
            }
        }
        linear_offsets
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn buffer_size_test() {
        {
            let a = AABB::new(matrix![0, 5]);
            assert_eq!(a.buffer_size(), 6);
        }

        {
            let a = AABB::new(matrix![0, 7; 0, 4]);
            assert_eq!(a.buffer_size(), 8 * 5);
            assert_eq!(a.exclusive_bounds(), vector![8, 5]);
        }
    }

    #[test]
    fn from_exclusive_bounds_test() {
        let a = AABB::from_exclusive_bounds(vector![12, 3]);
        assert_eq!(a, AABB::new(matrix![0, 11; 0, 2]));
        assert_eq!(a.min(), vector![0, 0]);
        assert_eq!(a.max(), vector![11, 2]);

        let single = AABB::from_exclusive_bounds(vector![1, 1]);
        assert_eq!(single.buffer_size(), 1);
    }

    #[test]
    fn linear_ordering_test() {
        // Column index i has stride ny, row index j is contiguous
        let a = AABB::new(matrix![0, 3; 0, 9]);
        assert_eq!(a.coord_to_linear(&vector![2, 7]), 7 + 2 * 10);
        assert_eq!(a.linear_to_coord(7 + 2 * 10), vector![2, 7]);

        let coords: Vec<_> = a.coord_iter().take(11).collect();
        assert_eq!(coords[0], vector![0, 0]);
        assert_eq!(coords[9], vector![0, 9]);
        assert_eq!(coords[10], vector![1, 0]);
    }

    #[test]
    fn coord_offset_to_linear_test() {
        // 4 columns of 10 rows
        let a = AABB::new(matrix![0, 3; 0, 9]);
        let offsets = [
            vector![-1, 0],
            vector![1, 0],
            vector![0, -1],
            vector![0, 1],
            vector![0, 0],
        ];
        assert_eq!(a.coord_offset_to_linear(&offsets), [-10, 10, -1, 1, 0]);
        let c = vector![2, 5];
        for (o, l) in offsets.iter().zip(a.coord_offset_to_linear(&offsets)) {
            let expected = a.coord_to_linear(&(c + o)) as i32;
            assert_eq!(a.coord_to_linear(&c) as i32 + l, expected);
        }
    }

    #[test]
    fn contains_test() {
        let a = AABB::new(matrix![0, 7; 0, 7]);
        assert!(a.contains(&vector![0, 0]));
        assert!(a.contains(&vector![7, 7]));
        assert!(!a.contains(&vector![-1, 0]));
        assert!(!a.contains(&vector![0, 8]));
    }

    #[test]
    fn check_validity_test() {
        assert!(AABB::new(matrix![0, 9]).check_validity());
        assert!(!AABB::new(matrix![9, 0]).check_validity());
    }
}

use crate::util::*;

/// Neighbor offsets in the order `apply` expects them:
/// left, right, lower, upper, then the cell itself.
pub const FIVE_POINT_OFFSETS: [[i32; 2]; 5] =
    [[-1, 0], [1, 0], [0, -1], [0, 1], [0, 0]];

/// Linear 5 point stencil where all four axis-aligned neighbors
/// share one weight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FivePoint {
    center: f64,
    neighbor: f64,
}

impl FivePoint {
    pub fn new(center: f64, neighbor: f64) -> Self {
        FivePoint { center, neighbor }
    }

    pub fn offsets(&self) -> [Coord<2>; 5] {
        FIVE_POINT_OFFSETS.map(|o| Coord::from_column_slice(&o))
    }

    /// Neighbors are summed first, in order, and weighted once.
    /// Absent neighbors must be passed as 0.0.
    #[inline]
    pub fn apply(&self, center: f64, neighbors: &[f64; 4]) -> f64 {
        self.center * center
            + self.neighbor
                * (neighbors[0] + neighbors[1] + neighbors[2] + neighbors[3])
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn apply_unit_neighbors_test() {
        // Feeding a single 1.0 recovers that position's weight
        let s = FivePoint::new(0.6, 0.1);
        let mut neighbors = [0.0; 4];
        for n in 0..4 {
            neighbors[n] = 1.0;
            assert_eq!(s.apply(0.0, &neighbors), 0.1);
            neighbors[n] = 0.0;
        }
        assert_eq!(s.apply(1.0, &neighbors), 0.6);
        assert_approx_eq!(f64, s.apply(1.0, &[1.0; 4]), 1.0, ulps = 2);
    }

    #[test]
    fn offsets_test() {
        let s = FivePoint::new(0.6, 0.1);
        let o = s.offsets();
        assert_eq!(o[0], vector![-1, 0]);
        assert_eq!(o[3], vector![0, 1]);
        assert_eq!(o[4], vector![0, 0]);
        assert_eq!(o.iter().sum::<Coord<2>>(), vector![0, 0]);
    }
}

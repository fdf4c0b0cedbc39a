use crate::domain::*;
use crate::stencil::*;
use crate::util::*;

/// Applies a 5 point stencil directly, cell by cell,
/// alternating between the two fields of a `DomainPair`.
pub struct DirectSolver<'a> {
    stencil: &'a FivePoint,
    aabb: AABB<2>,
    iterations: usize,
    /// Linear distance to the left, right, lower and upper neighbor.
    offsets: [usize; 4],
}

impl<'a> DirectSolver<'a> {
    pub fn new(
        stencil: &'a FivePoint,
        aabb: AABB<2>,
        iterations: usize,
    ) -> Self {
        let expected_offsets = [
            vector![-1, 0], // left
            vector![1, 0],  // right
            vector![0, -1], // lower
            vector![0, 1],  // upper
            vector![0, 0],  // center
        ];
        debug_assert_eq!(expected_offsets, stencil.offsets());
        let offsets_i32 = aabb.coord_offset_to_linear(&stencil.offsets());
        debug_assert_eq!(offsets_i32[4], 0);
        let offsets = [
            offsets_i32[0].unsigned_abs() as usize,
            offsets_i32[1].unsigned_abs() as usize,
            offsets_i32[2].unsigned_abs() as usize,
            offsets_i32[3].unsigned_abs() as usize,
        ];

        DirectSolver {
            stencil,
            aabb,
            iterations,
            offsets,
        }
    }

    /// Run every iteration on `pair`.
    /// One iteration is two stencil applications, current into next and
    /// back again, so the result always ends up in `pair.current()`.
    pub fn apply(&self, pair: &mut DomainPair) {
        profiling::scope!("direct::apply");
        debug_assert_eq!(pair.aabb(), &self.aabb);
        let (current, next) = pair.split_mut();
        for t in 0..self.iterations {
            self.apply_step(&*current, &mut *next);
            self.apply_step(&*next, &mut *current);
            tracing::trace!(t, "iteration finished");
        }
    }

    /// One application of the stencil, reading only `input`
    /// and writing every logical cell of `output`.
    pub fn apply_step<InputDomain: DomainView, OutputDomain: DomainView>(
        &self,
        input: &InputDomain,
        output: &mut OutputDomain,
    ) {
        profiling::scope!("direct::apply_step");
        debug_assert_eq!(input.aabb(), &self.aabb);
        debug_assert_eq!(output.aabb(), &self.aabb);

        let exclusive_bounds = self.aabb.exclusive_bounds();
        let nx = exclusive_bounds[0] as usize;
        let ny = exclusive_bounds[1] as usize;
        let [o_left, o_right, o_lower, o_upper] = self.offsets;
        let ib = input.buffer();
        let ob = output.buffer_mut();

        // j is contiguous in storage, so it is the inner loop.
        // Cells are independent so the order does not change results.
        for i in 0..nx {
            for j in 0..ny {
                let l = j + i * ny;
                let left = if i > 0 { ib[l - o_left] } else { 0.0 };
                let right = if i + 1 < nx { ib[l + o_right] } else { 0.0 };
                let lower = if j > 0 { ib[l - o_lower] } else { 0.0 };
                let upper = if j + 1 < ny { ib[l + o_upper] } else { 0.0 };
                ob[l] = self.stencil.apply(ib[l], &[left, right, lower, upper]);
            }
        }
    }
}

/// Apply `stencil` once from `input` into `output`.
pub fn apply_step<InputDomain: DomainView, OutputDomain: DomainView>(
    stencil: &FivePoint,
    input: &InputDomain,
    output: &mut OutputDomain,
) {
    DirectSolver::new(stencil, *input.aabb(), 1).apply_step(input, output);
}

/// Evolve `pair` for `iterations` iterations, two stencil
/// applications each.
pub fn evolve(stencil: &FivePoint, pair: &mut DomainPair, iterations: usize) {
    DirectSolver::new(stencil, *pair.aabb(), iterations).apply(pair);
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::stencil::standard_stencils::heat_5pt;

    #[test]
    fn offsets_from_stencil_test() {
        let stencil = heat_5pt();
        let aabb = AABB::new(matrix![0, 4; 0, 6]);
        let solver = DirectSolver::new(&stencil, aabb, 1);
        // column stride is ny, row stride is 1
        assert_eq!(solver.offsets, [7, 7, 1, 1]);
    }

    fn ramp(aabb: AABB<2>) -> Vec<f64> {
        aabb.coord_iter()
            .map(|c| ((7 * c[0] + 3 * c[1]) % 11) as f64 * 1.37 + 0.25)
            .collect()
    }

    #[test]
    fn interior_exact_test() {
        let aabb = AABB::new(matrix![0, 6; 0, 4]);
        let stencil = heat_5pt();
        let mut input_buffer = ramp(aabb);
        let mut output_buffer = vec![-1.0; aabb.buffer_size()];
        let input = SliceDomain::new(aabb, &mut input_buffer);
        let mut output = SliceDomain::new(aabb, &mut output_buffer);

        apply_step(&stencil, &input, &mut output);

        for i in 1..6 {
            for j in 1..4 {
                let v = |di: i32, dj: i32| input.view(&vector![i + di, j + dj]);
                let expected = 0.6 * v(0, 0)
                    + 0.1 * (v(-1, 0) + v(1, 0) + v(0, -1) + v(0, 1));
                assert_eq!(output.view(&vector![i, j]), expected);
            }
        }
    }

    #[test]
    fn edges_contribute_zero_test() {
        let aabb = AABB::new(matrix![0, 3; 0, 2]);
        let stencil = heat_5pt();
        let mut input_buffer = ramp(aabb);
        let mut output_buffer = vec![0.0; aabb.buffer_size()];
        let input = SliceDomain::new(aabb, &mut input_buffer);
        let mut output = SliceDomain::new(aabb, &mut output_buffer);

        apply_step(&stencil, &input, &mut output);

        let v = |i: i32, j: i32| input.view(&vector![i, j]);
        // (min, min) corner only sees right and upper
        assert_eq!(
            output.view(&vector![0, 0]),
            0.6 * v(0, 0) + 0.1 * (0.0 + v(1, 0) + 0.0 + v(0, 1))
        );
        // (max, max) corner only sees left and lower
        assert_eq!(
            output.view(&vector![3, 2]),
            0.6 * v(3, 2) + 0.1 * (v(2, 2) + 0.0 + v(3, 1) + 0.0)
        );
        // edge with i = max, nothing wraps around to i = 0
        assert_eq!(
            output.view(&vector![3, 1]),
            0.6 * v(3, 1) + 0.1 * (v(2, 1) + 0.0 + v(3, 0) + v(3, 2))
        );
    }

    #[test]
    fn single_cell_test() {
        let aabb = AABB::new(matrix![0, 0; 0, 0]);
        let mut input_buffer = vec![10.0];
        let mut output_buffer = vec![0.0];
        let input = SliceDomain::new(aabb, &mut input_buffer);
        let mut output = SliceDomain::new(aabb, &mut output_buffer);
        apply_step(&heat_5pt(), &input, &mut output);
        assert_eq!(output_buffer[0], 0.6 * 10.0);
    }

    #[test]
    fn zero_fixed_point_test() {
        let aabb = AABB::new(matrix![0, 9; 0, 12]);
        let mut pair = DomainPair::new(aabb).unwrap();
        evolve(&heat_5pt(), &mut pair, 5);
        assert!(pair.current().padded_buffer().iter().all(|v| *v == 0.0));
        assert!(pair.next().padded_buffer().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn evolve_applies_twice_per_iteration_test() {
        let aabb = AABB::new(matrix![0, 4; 0, 5]);
        let stencil = heat_5pt();
        let mut pair = DomainPair::new(aabb).unwrap();
        pair.current_mut().set_values(|c| (c[0] * c[1]) as f64);

        let mut a = pair.current().buffer().to_vec();
        let mut b = vec![0.0; aabb.buffer_size()];
        for _ in 0..3 * 2 {
            apply_step(
                &stencil,
                &SliceDomain::new(aabb, &mut a),
                &mut SliceDomain::new(aabb, &mut b),
            );
            std::mem::swap(&mut a, &mut b);
        }

        evolve(&stencil, &mut pair, 3);
        assert_eq!(pair.current().buffer(), &a[..]);
    }

    #[test]
    fn halo_untouched_test() {
        let aabb = AABB::new(matrix![0, 7; 0, 3]);
        let mut pair = DomainPair::new(aabb).unwrap();
        pair.current_mut().set_values(|_| 100.0);
        evolve(&heat_5pt(), &mut pair, 4);
        for domain in [pair.current(), pair.next()] {
            let (leading, trailing) = domain.halo();
            assert!(leading.iter().chain(trailing).all(|v| *v == 0.0));
        }
    }

    #[test]
    fn zero_iterations_test() {
        let aabb = AABB::new(matrix![0, 2; 0, 2]);
        let mut pair = DomainPair::new(aabb).unwrap();
        pair.current_mut().set_coord(&vector![1, 1], 5.0);
        evolve(&heat_5pt(), &mut pair, 0);
        assert_eq!(pair.current().view(&vector![1, 1]), 5.0);
        assert_eq!(pair.current().sum(), 5.0);
    }
}

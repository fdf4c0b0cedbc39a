use crate::domain::*;
use crate::error::Result;
use crate::util::*;

/// The two same-shaped fields the stencil ping-pongs between.
/// `current` holds the latest state whenever control is outside the solver.
pub struct DomainPair {
    current: PaddedDomain,
    next: PaddedDomain,
}

impl DomainPair {
    /// Allocate both fields, failing if either allocation fails.
    pub fn new(aabb: AABB<2>) -> Result<Self> {
        let current = PaddedDomain::new(aabb)?;
        let next = PaddedDomain::new(aabb)?;
        tracing::debug!(
            padded_len = current.padded_len(),
            halo = current.halo_len(),
            "allocated field pair for {}",
            aabb
        );
        Ok(DomainPair { current, next })
    }

    pub fn aabb(&self) -> &AABB<2> {
        self.current.aabb()
    }

    pub fn current(&self) -> &PaddedDomain {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut PaddedDomain {
        &mut self.current
    }

    pub fn next(&self) -> &PaddedDomain {
        &self.next
    }

    /// Borrow `(current, next)` mutably at the same time.
    pub fn split_mut(&mut self) -> (&mut PaddedDomain, &mut PaddedDomain) {
        (&mut self.current, &mut self.next)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn same_shape_test() {
        let aabb = AABB::new(matrix![0, 9; 0, 4]);
        let pair = DomainPair::new(aabb).unwrap();
        assert_eq!(pair.aabb(), &aabb);
        assert_eq!(pair.current().aabb(), pair.next().aabb());
        assert_eq!(pair.current().padded_len(), pair.next().padded_len());
    }

    #[test]
    fn split_mut_test() {
        let mut pair = DomainPair::new(AABB::new(matrix![0, 2; 0, 2])).unwrap();
        let (current, next) = pair.split_mut();
        current.set_coord(&vector![1, 1], 1.0);
        next.set_coord(&vector![1, 1], 2.0);
        assert_ne!(current.buffer().as_ptr(), next.buffer().as_ptr());

        assert_eq!(pair.current().view(&vector![1, 1]), 1.0);
        assert_eq!(pair.next().view(&vector![1, 1]), 2.0);
    }
}

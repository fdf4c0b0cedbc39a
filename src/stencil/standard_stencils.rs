use crate::stencil::*;

/// Explicit diffusion step with self weight 0.6 and 0.1 per neighbor.
pub fn heat_5pt() -> FivePoint {
    FivePoint::new(0.6, 0.1)
}

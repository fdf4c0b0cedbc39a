mod five_point;

pub mod standard_stencils;

pub use five_point::*;

mod direct;

pub use direct::*;

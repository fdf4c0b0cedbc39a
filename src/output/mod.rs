//! Writers for the final logical field.

mod csv;
mod pgm;
mod preview;

pub use csv::*;
pub use pgm::*;
pub use preview::*;

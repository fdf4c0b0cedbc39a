//! Netpbm grayscale binary ("P5") output.

use crate::domain::*;
use crate::error::{Error, Result};
use std::io::prelude::*;
use std::path::Path;

/// Scale `value` into a gray level, truncating toward zero.
/// A zero `maximum` gives NaN, which converts to 0.
#[inline]
pub fn scale_to_byte(value: f64, maximum: f64) -> u8 {
    (255.0 * value / maximum) as u8
}

/// Encode the logical region of `domain` as a P5 image.
///
/// The header is `P5 <nx> <ny> 255\n`. Pixels are written row by row,
/// `j` outer and `i` inner, each reading the value stored at `j + i * ny`.
pub fn encode_pgm<DomainType: DomainView, W: Write>(
    domain: &DomainType,
    writer: &mut W,
) -> std::io::Result<()> {
    profiling::scope!("pgm::encode");
    let exclusive_bounds = domain.aabb().exclusive_bounds();
    let nx = exclusive_bounds[0] as usize;
    let ny = exclusive_bounds[1] as usize;
    writeln!(writer, "P5 {nx} {ny} 255")?;

    let maximum = domain.max_value();
    let buffer = domain.buffer();
    let mut row = Vec::with_capacity(nx);
    for j in 0..ny {
        row.clear();
        row.extend((0..nx).map(|i| scale_to_byte(buffer[j + i * ny], maximum)));
        writer.write_all(&row)?;
    }
    Ok(())
}

/// In memory P5 image of `domain`.
pub fn pgm_bytes<DomainType: DomainView>(domain: &DomainType) -> Vec<u8> {
    let mut bytes = Vec::new();
    encode_pgm(domain, &mut bytes).expect("writing to a Vec cannot fail");
    bytes
}

/// Write `domain` as a P5 image at `path`.
pub fn write_pgm<P: AsRef<Path>, DomainType: DomainView>(
    path: &P,
    domain: &DomainType,
) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|source| Error::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut output = std::io::BufWriter::new(file);
    encode_pgm(domain, &mut output)?;
    output.flush()?;
    tracing::info!("Wrote: {:?}", path);
    Ok(())
}

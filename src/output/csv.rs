use crate::domain::*;
use crate::error::Result;
use std::io::prelude::*;
use std::path::Path;

/// One line per row `j`, values for `i = 0..nx` separated by ", ".
pub fn encode_csv<DomainType: DomainView, W: Write>(
    domain: &DomainType,
    output: &mut W,
) -> std::io::Result<()> {
    let aabb = domain.aabb();
    for y in aabb.bounds[(1, 0)]..=aabb.bounds[(1, 1)] {
        let mut x_iter = aabb.bounds[(0, 0)]..=aabb.bounds[(0, 1)];
        if let Some(x) = x_iter.next() {
            write!(output, "{}", domain.view(&nalgebra::vector![x, y]))?;
        }
        for x in x_iter {
            write!(output, ", {}", domain.view(&nalgebra::vector![x, y]))?;
        }
        writeln!(output)?;
    }
    Ok(())
}

pub fn write_csv<P: AsRef<Path>, DomainType: DomainView>(
    path: &P,
    domain: &DomainType,
) -> Result<()> {
    profiling::scope!("csv::write");
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    encode_csv(domain, &mut output)?;
    output.flush()?;
    tracing::info!("Wrote: {:?}", path.as_ref());
    Ok(())
}

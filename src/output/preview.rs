use crate::domain::*;
use crate::error::Result;
use std::path::Path;

/// Save a false color PNG preview of `domain`, normalized by its maximum,
/// with pixel `(i, j)` showing cell `(i, j)`.
pub fn write_png<P: AsRef<Path>, DomainType: DomainView>(
    path: &P,
    domain: &DomainType,
) -> Result<()> {
    profiling::scope!("image::write");
    let img = render_turbo(domain);
    img.save_with_format(path, image::ImageFormat::Png)?;
    tracing::info!("Wrote: {:?}", path.as_ref());
    Ok(())
}

pub fn render_turbo<DomainType: DomainView>(
    domain: &DomainType,
) -> image::RgbImage {
    let aabb = domain.aabb();
    let exclusive_bounds = aabb.exclusive_bounds();
    let gradient = colorous::TURBO;
    let maximum = domain.max_value();
    let mut img = image::RgbImage::new(
        exclusive_bounds[0] as u32,
        exclusive_bounds[1] as u32,
    );
    for coord in aabb.coord_iter() {
        let v = domain.view(&coord);
        let r = if maximum > 0.0 { v / maximum } else { 0.0 };
        let c = gradient.eval_continuous(r.clamp(0.0, 1.0));
        img.put_pixel(
            coord[0] as u32,
            coord[1] as u32,
            image::Rgb(c.as_array()),
        );
    }
    img
}

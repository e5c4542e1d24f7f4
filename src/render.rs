use crate::pipeline::PipelineError;
use image::RgbaImage;

/// Resample into a square `side` x `side` buffer, each destination
/// pixel copying the single nearest source pixel.
///
/// Destination pixel centers map onto the source grid with integer
/// math, so resampling at the source dimensions is the identity and a
/// one-pixel target samples the source center. No filtering at any
/// stage: smoothing would reintroduce the partial alpha the matte
/// passes just removed.
pub fn resample_nearest(source: &RgbaImage, side: u32) -> Result<RgbaImage, PipelineError> {
    if side == 0 {
        return Err(PipelineError::RenderTarget { side });
    }

    let (width, height) = source.dimensions();
    let mut target = RgbaImage::new(side, side);

    for (dx, dy, pixel) in target.enumerate_pixels_mut() {
        let sx = ((2 * dx as u64 + 1) * width as u64 / (2 * side as u64)) as u32;
        let sy = ((2 * dy as u64 + 1) * height as u64 / (2 * side as u64)) as u32;
        *pixel = *source.get_pixel(sx, sy);
    }

    Ok(target)
}

/// Force every alpha to 0 or 255 at the midpoint threshold. RGB
/// channels are left as they are.
pub fn binarize_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        pixel[3] = if pixel[3] < 128 { 0 } else { 255 };
    }
}

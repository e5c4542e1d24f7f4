use crate::matte::{self, clear_border_matte, clear_fringe, sample_matte_color};
use crate::render::{binarize_alpha, resample_nearest};
use image::RgbaImage;
use thiserror::Error;

/// Failures the normalization core can produce. Both are structural;
/// nothing in the pipeline is transient or worth retrying.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source buffer has a zero dimension, so there is nothing to
    /// sample a matte from.
    #[error("degenerate source image ({width}x{height})")]
    DegenerateImage { width: u32, height: u32 },

    /// The requested render target cannot be produced.
    #[error("cannot allocate a {side}x{side} render target")]
    RenderTarget { side: u32 },
}

/// Tunable knobs for one normalization run.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Side length of the square output buffer.
    pub resolution: u32,
    /// Strict threshold for the border flood.
    pub matte_tolerance: f32,
    /// Loose threshold for the fringe pass.
    pub fringe_tolerance: f32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            resolution: 64,
            matte_tolerance: matte::MATTE_TOLERANCE,
            fringe_tolerance: matte::FRINGE_TOLERANCE,
        }
    }
}

/// Turn a raw generated image into a pixel-art sprite: sample the
/// corner matte, flood the border-connected background away, strip the
/// anti-alias fringe, then resample to the target resolution with a
/// binary alpha channel.
pub fn normalize(
    mut image: RgbaImage,
    options: &NormalizeOptions,
) -> Result<RgbaImage, PipelineError> {
    let _span = tracing::debug_span!("normalize").entered();

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(PipelineError::DegenerateImage { width, height });
    }

    let reference = sample_matte_color(&image);
    clear_border_matte(&mut image, reference, options.matte_tolerance);
    clear_fringe(&mut image, reference, options.fringe_tolerance);

    let mut sprite = resample_nearest(&image, options.resolution)?;
    binarize_alpha(&mut sprite);

    Ok(sprite)
}

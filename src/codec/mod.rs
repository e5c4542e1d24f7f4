mod file;
mod payload;

pub use file::{FileSink, FileSource};

use anyhow::Result;
use image::RgbaImage;

/// Trait for sprite sources
pub trait SpriteSource {
    /// Decode the source into an RGBA pixel buffer
    fn load(&mut self) -> Result<RgbaImage>;
}

/// Trait for sprite sinks
pub trait SpriteSink {
    /// Encode and persist a finished sprite
    fn write(&mut self, sprite: &RgbaImage) -> Result<()>;
}

/// Container a sink emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Binary PNG bytes
    Png,
    /// base64 PNG data URL as text
    DataUrl,
}

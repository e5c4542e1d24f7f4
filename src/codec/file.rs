use super::payload;
use super::{OutputFormat, SpriteSink, SpriteSource};
use anyhow::{Context, Result};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a sprite from a raster file or a data-URL text file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SpriteSource for FileSource {
    fn load(&mut self) -> Result<RgbaImage> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        // A text file holding a data URL is decoded as a payload;
        // anything else goes through container sniffing.
        if bytes.starts_with(b"data:") {
            let text =
                std::str::from_utf8(&bytes).context("data URL payload is not valid UTF-8")?;
            return payload::decode_data_url(text);
        }
        payload::decode_bytes(&bytes)
    }
}

/// Writes a sprite as a PNG file or a data-URL text file.
pub struct FileSink {
    path: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P, format: OutputFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }
}

impl SpriteSink for FileSink {
    fn write(&mut self, sprite: &RgbaImage) -> Result<()> {
        match self.format {
            OutputFormat::Png => fs::write(&self.path, payload::encode_png(sprite)?),
            OutputFormat::DataUrl => fs::write(&self.path, payload::encode_data_url(sprite)?),
        }
        .with_context(|| format!("Failed to write {}", self.path.display()))?;

        tracing::info!("Wrote {}", self.path.display());
        Ok(())
    }
}

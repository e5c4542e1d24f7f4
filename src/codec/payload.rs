use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose, Engine as _};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Decode a `data:<mime>;base64,` payload into an RGBA buffer.
pub fn decode_data_url(payload: &str) -> Result<RgbaImage> {
    let rest = payload
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| anyhow!("payload does not start with data:"))?;
    let (_mime, encoded) = rest
        .split_once(";base64,")
        .ok_or_else(|| anyhow!("payload is not base64 encoded"))?;

    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .context("invalid base64 in data URL")?;
    decode_bytes(&bytes)
}

/// Decode raw container bytes, sniffing the format.
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image::load_from_memory(bytes).context("failed to decode image payload")?;
    Ok(image.to_rgba8())
}

/// Encode an RGBA buffer as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .context("failed to encode PNG")?;
    Ok(bytes.into_inner())
}

/// Encode an RGBA buffer as a `data:image/png;base64,` payload.
pub fn encode_data_url(image: &RgbaImage) -> Result<String> {
    let png = encode_png(image)?;
    Ok(format!(
        "{}{}",
        PNG_DATA_URL_PREFIX,
        general_purpose::STANDARD.encode(png)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sample_sprite() -> RgbaImage {
        RgbaImage::from_fn(4, 4, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn data_url_round_trips_pixels() {
        let sprite = sample_sprite();

        let url = encode_data_url(&sprite).unwrap();
        let decoded = decode_data_url(&url).unwrap();

        assert!(url.starts_with(PNG_DATA_URL_PREFIX));
        assert_eq!(decoded, sprite);
    }

    #[test]
    fn png_bytes_round_trip_pixels() {
        let sprite = sample_sprite();

        let png = encode_png(&sprite).unwrap();
        let decoded = decode_bytes(&png).unwrap();

        assert_eq!(decoded, sprite);
    }

    #[test]
    fn rejects_payload_without_data_prefix() {
        assert!(decode_data_url("iVBORw0KGgo=").is_err());
    }

    #[test]
    fn rejects_unencoded_data_url() {
        assert!(decode_data_url("data:text/plain,hello").is_err());
    }
}

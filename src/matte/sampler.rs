use super::corner_coords;
use image::{Rgb, RgbaImage};

/// Pick the dominant corner color as the background reference.
///
/// Samples the four corners in scan order (top-left, top-right,
/// bottom-left, bottom-right) and returns the color occurring most
/// often. A tie keeps the color encountered first, so repeated runs on
/// the same image always agree.
pub fn sample_matte_color(image: &RgbaImage) -> Rgb<u8> {
    let (width, height) = image.dimensions();

    // Insertion order is the tie-break order.
    let mut counts: Vec<(Rgb<u8>, u32)> = Vec::with_capacity(4);
    for (x, y) in corner_coords(width, height) {
        let pixel = image.get_pixel(x, y);
        let color = Rgb([pixel[0], pixel[1], pixel[2]]);
        match counts.iter_mut().find(|(seen, _)| *seen == color) {
            Some((_, count)) => *count += 1,
            None => counts.push((color, 1)),
        }
    }

    let mut best = counts[0];
    for &(color, count) in &counts[1..] {
        if count > best.1 {
            best = (color, count);
        }
    }

    tracing::debug!(
        "Matte reference {:?} ({} of 4 corners)",
        best.0,
        best.1
    );
    best.0
}

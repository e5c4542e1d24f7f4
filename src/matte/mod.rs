mod flood;
mod fringe;
mod sampler;

pub use flood::clear_border_matte;
pub use fringe::clear_fringe;
pub use sampler::sample_matte_color;

use image::{Rgb, Rgba};

/// Strict RGB distance threshold for the border flood pass.
/// Pixels at or beyond this distance act as walls.
pub const MATTE_TOLERANCE: f32 = 45.0;

/// Loose RGB distance threshold for the fringe cleanup pass.
/// Looser than the flood so anti-aliased halo pixels still match.
pub const FRINGE_TOLERANCE: f32 = 80.0;

/// Euclidean distance between a pixel and the reference color in RGB
/// space. Alpha does not participate in color identity.
pub(crate) fn rgb_distance(pixel: &Rgba<u8>, reference: Rgb<u8>) -> f32 {
    let dr = pixel[0] as f32 - reference[0] as f32;
    let dg = pixel[1] as f32 - reference[1] as f32;
    let db = pixel[2] as f32 - reference[2] as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Corner coordinates in the fixed scan order: top-left, top-right,
/// bottom-left, bottom-right. Callers guarantee non-zero dimensions.
pub(crate) fn corner_coords(width: u32, height: u32) -> [(u32, u32); 4] {
    [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_ignores_alpha() {
        let opaque = Rgba([10, 20, 30, 255]);
        let transparent = Rgba([10, 20, 30, 0]);
        let reference = Rgb([0, 0, 0]);

        assert_eq!(
            rgb_distance(&opaque, reference),
            rgb_distance(&transparent, reference)
        );
    }

    #[test]
    fn distance_is_euclidean_over_channels() {
        let pixel = Rgba([3, 4, 0, 255]);
        let reference = Rgb([0, 0, 0]);

        assert_eq!(rgb_distance(&pixel, reference), 5.0);
    }

    #[test]
    fn corners_follow_scan_order() {
        assert_eq!(
            corner_coords(100, 50),
            [(0, 0), (99, 0), (0, 49), (99, 49)]
        );
    }
}

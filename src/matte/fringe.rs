use super::rgb_distance;
use image::{Rgb, RgbaImage};

/// Clear opaque near-matte pixels directly adjacent to transparency.
///
/// One raster scan, one hop: adjacency is judged against the alpha
/// state captured before the pass, so a pixel cleared here can never
/// expose its own neighbors within the same pass. Runs with the loose
/// tolerance to catch anti-aliased halo pixels the flood left behind.
pub fn clear_fringe(image: &mut RgbaImage, reference: Rgb<u8>, tolerance: f32) {
    let (width, height) = image.dimensions();
    let w = width as usize;

    let was_transparent: Vec<bool> = image.pixels().map(|p| p[3] == 0).collect();

    let mut cleared = 0usize;
    for y in 0..height {
        for x in 0..width {
            if was_transparent[y as usize * w + x as usize] {
                continue;
            }

            let (xi, yi) = (x as i64, y as i64);
            let touches_transparency = [(xi - 1, yi), (xi + 1, yi), (xi, yi - 1), (xi, yi + 1)]
                .into_iter()
                .any(|(nx, ny)| {
                    nx >= 0
                        && ny >= 0
                        && nx < width as i64
                        && ny < height as i64
                        && was_transparent[ny as usize * w + nx as usize]
                });
            if !touches_transparency {
                continue;
            }

            let pixel = image.get_pixel_mut(x, y);
            if rgb_distance(pixel, reference) < tolerance {
                pixel[3] = 0;
                cleared += 1;
            }
        }
    }

    tracing::debug!("Fringe pass cleared {} pixels", cleared);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const REFERENCE: Rgb<u8> = Rgb([255, 0, 255]);

    #[test]
    fn strips_halo_pixel_at_the_transparent_border() {
        // Cleared background, one blended halo pixel, solid subject.
        let mut image = RgbaImage::new(3, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 255, 0]));
        image.put_pixel(1, 0, Rgba([255, 64, 255, 255]));
        image.put_pixel(2, 0, Rgba([255, 0, 0, 255]));

        clear_fringe(&mut image, REFERENCE, 80.0);

        assert_eq!(image.get_pixel(1, 0)[3], 0, "halo pixel clears");
        assert_eq!(image.get_pixel(2, 0)[3], 255, "subject pixel stays");
    }

    #[test]
    fn does_not_cascade_through_cleared_pixels() {
        // Two near-matte pixels in a row behind transparency. Only the
        // first touches transparency as the pass begins; clearing it
        // must not drag the second one along.
        let mut image = RgbaImage::new(4, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 255, 0]));
        image.put_pixel(1, 0, Rgba([255, 40, 255, 255]));
        image.put_pixel(2, 0, Rgba([255, 40, 255, 255]));
        image.put_pixel(3, 0, Rgba([255, 0, 0, 255]));

        clear_fringe(&mut image, REFERENCE, 80.0);

        assert_eq!(image.get_pixel(1, 0)[3], 0);
        assert_eq!(image.get_pixel(2, 0)[3], 255);
        assert_eq!(image.get_pixel(3, 0)[3], 255);
    }

    #[test]
    fn near_matte_pixel_away_from_transparency_is_kept() {
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 1, Rgba([255, 30, 255, 255]));

        clear_fringe(&mut image, REFERENCE, 80.0);

        assert_eq!(image.get_pixel(1, 1)[3], 255);
    }

    #[test]
    fn distinct_subject_edge_is_kept() {
        // Touching transparency is not enough; the color has to be
        // within the loose tolerance too.
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 255, 0]));
        image.put_pixel(1, 0, Rgba([255, 0, 0, 255]));

        clear_fringe(&mut image, REFERENCE, 80.0);

        assert_eq!(image.get_pixel(1, 0)[3], 255);
    }
}

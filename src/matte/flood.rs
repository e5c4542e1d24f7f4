use super::{corner_coords, rgb_distance};
use image::{Rgb, RgbaImage};

/// Clear every pixel reachable from a corner seed through a 4-connected
/// chain of colors within `tolerance` of the reference.
///
/// Pixels at or beyond the tolerance are walls: they keep their alpha
/// and the traversal does not continue through them, so a subject fully
/// enclosed by a distinct outline keeps its interior even where the
/// fill matches the matte color. A broken outline lets the fill leak
/// inside; the upstream producer is expected to deliver solid outlines.
///
/// Explicit frontier and visited bitmap, no recursion. Traversal order
/// never changes the final transparent set, only the visit order.
pub fn clear_border_matte(image: &mut RgbaImage, reference: Rgb<u8>, tolerance: f32) {
    let (width, height) = image.dimensions();
    let w = width as usize;

    let mut visited = vec![false; w * height as usize];
    let mut frontier: Vec<(u32, u32)> = Vec::new();

    // The four corners overlap on tiny images; visited dedups them.
    for (x, y) in corner_coords(width, height) {
        let idx = y as usize * w + x as usize;
        if !visited[idx] {
            visited[idx] = true;
            frontier.push((x, y));
        }
    }

    let mut cleared = 0usize;
    while let Some((x, y)) = frontier.pop() {
        let pixel = image.get_pixel_mut(x, y);
        if rgb_distance(pixel, reference) >= tolerance {
            // Wall: traversal does not pass through.
            continue;
        }
        pixel[3] = 0;
        cleared += 1;

        let (xi, yi) = (x as i64, y as i64);
        for (nx, ny) in [(xi - 1, yi), (xi + 1, yi), (xi, yi - 1), (xi, yi + 1)] {
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            let idx = ny as usize * w + nx as usize;
            if !visited[idx] {
                visited[idx] = true;
                frontier.push((nx as u32, ny as u32));
            }
        }
    }

    tracing::debug!("Border flood cleared {} pixels", cleared);
}

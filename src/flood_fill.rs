use image::RgbaImage;
use log::debug;

use crate::geometry::Point;
use crate::raster::{self, Color};

/// Scanline flood fill from `seed`, replacing the 4-connected region of the seed's
/// color with `replacement` in both `surface` and `mask`.
///
/// Works column by column with an explicit stack: each popped point walks up to
/// the top of its run, then fills downward, pushing the neighboring column once
/// per contiguous matching run. Returns the number of pixels filled.
///
/// The mask is written at the same coordinates as the surface; mask pixels that
/// fall outside the mask are skipped.
pub fn flood_fill(surface: &mut RgbaImage, mask: &mut RgbaImage, seed: Point, replacement: Color) -> usize {
    let Some(target) = raster::get_pixel(surface, seed.x, seed.y) else {
        return 0;
    };
    if target == replacement {
        return 0;
    }

    let width = surface.width() as i32;
    let height = surface.height() as i32;
    let matches = |img: &RgbaImage, x: i32, y: i32| *img.get_pixel(x as u32, y as u32) == target;

    let mut stack = vec![seed];
    let mut filled = 0;

    while let Some(Point { x, y }) = stack.pop() {
        let mut y1 = y;
        while y1 >= 0 && matches(surface, x, y1) {
            y1 -= 1;
        }
        y1 += 1;

        let mut span_left = false;
        let mut span_right = false;
        while y1 < height && matches(surface, x, y1) {
            surface.put_pixel(x as u32, y1 as u32, replacement);
            raster::put_pixel(mask, x, y1, replacement);
            filled += 1;

            if x > 0 {
                let left = matches(surface, x - 1, y1);
                if !span_left && left {
                    stack.push(Point::new(x - 1, y1));
                    span_left = true;
                } else if span_left && !left {
                    span_left = false;
                }
            }
            if x < width - 1 {
                let right = matches(surface, x + 1, y1);
                if !span_right && right {
                    stack.push(Point::new(x + 1, y1));
                    span_right = true;
                } else if span_right && !right {
                    span_right = false;
                }
            }
            y1 += 1;
        }
    }

    debug!("flood fill from {:?}: {} pixels", seed, filled);
    filled
}

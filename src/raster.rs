//! Pixel primitives over [`RgbaImage`].
//!
//! Every write is bounds-checked: coordinates outside the target are skipped,
//! never reported. Callers can hand in arbitrary pointer positions.

use image::{Rgba, RgbaImage, imageops};

use crate::geometry::{PixelRect, Point};

pub type Color = Rgba<u8>;

pub const WHITE: Color = Rgba([255, 255, 255, 255]);
pub const BLACK: Color = Rgba([0, 0, 0, 255]);

/// Upper bound on segments used to approximate an ellipse outline
const MAX_ELLIPSE_SEGMENTS: usize = 16_384;

/// Create a `width` x `height` buffer filled with `color`
pub fn filled(width: u32, height: u32, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

pub fn get_pixel(img: &RgbaImage, x: i32, y: i32) -> Option<Color> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    img.get_pixel_checked(x, y).copied()
}

/// Write a pixel, returning whether it landed inside the buffer
pub fn put_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Color) -> bool {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return false;
    };
    match img.get_pixel_mut_checked(x, y) {
        Some(pixel) => {
            *pixel = color;
            true
        }
        None => false,
    }
}

fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let inv = 255 - alpha;
    ((src as u16 * alpha + dst as u16 * inv) / 255) as u8
}

/// Source-over composite of `src` onto `dst`
pub fn blend(dst: Color, src: Color) -> Color {
    match src[3] {
        255 => src,
        0 => dst,
        a => {
            let alpha = a as u16;
            let out_alpha = a as u16 + (dst[3] as u16 * (255 - alpha)) / 255;
            Rgba([
                blend_channel(src[0], dst[0], alpha),
                blend_channel(src[1], dst[1], alpha),
                blend_channel(src[2], dst[2], alpha),
                out_alpha.min(255) as u8,
            ])
        }
    }
}

/// Write a pixel at widened coordinates. Shape math runs in `i64` so points
/// near the `i32` limits can't overflow.
fn put_wide(img: &mut RgbaImage, x: i64, y: i64, color: Color) {
    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
        if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
            *pixel = color;
        }
    }
}

/// Fill the inclusive span `x1..=x2` on row `y`
fn hline(img: &mut RgbaImage, x1: i64, x2: i64, y: i64, color: Color) {
    if y < 0 || y >= img.height() as i64 {
        return;
    }
    let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    let start = x1.max(0);
    let end = x2.min(img.width() as i64 - 1);
    for x in start..=end {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Fill the inclusive rectangle spanned by two corners
fn fill_span_rect(img: &mut RgbaImage, (x1, y1): (i64, i64), (x2, y2): (i64, i64), color: Color) {
    let y_start = y1.min(y2).max(0);
    let y_end = y1.max(y2).min(img.height() as i64 - 1);
    for y in y_start..=y_end {
        hline(img, x1, x2, y, color);
    }
}

fn widen(p: Point) -> (i64, i64) {
    (p.x as i64, p.y as i64)
}

/// Clip a segment to the buffer grown by a margin of one buffer side.
///
/// Segments already inside the margin come back untouched, so on-canvas strokes
/// rasterize exactly. Far-away endpoints are pulled in along the segment, which
/// keeps the Bresenham walk short for any input.
fn clip_segment(img: &RgbaImage, from: (i64, i64), to: (i64, i64)) -> Option<((i64, i64), (i64, i64))> {
    let margin = img.width().max(img.height()) as f64 + 1.0;
    let (lo_x, hi_x) = (-margin, img.width() as f64 + margin);
    let (lo_y, hi_y) = (-margin, img.height() as f64 + margin);
    let inside = |(x, y): (i64, i64)| {
        let (x, y) = (x as f64, y as f64);
        x >= lo_x && x <= hi_x && y >= lo_y && y <= hi_y
    };
    if inside(from) && inside(to) {
        return Some((from, to));
    }

    // Liang-Barsky
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (dx, dy) = (to.0 as f64 - x0, to.1 as f64 - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [(-dx, x0 - lo_x), (dx, hi_x - x0), (-dy, y0 - lo_y), (dy, hi_y - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    let at = |t: f64| ((x0 + t * dx).round() as i64, (y0 + t * dy).round() as i64);
    Some((at(t0), at(t1)))
}

fn line_wide(img: &mut RgbaImage, from: (i64, i64), to: (i64, i64), color: Color) {
    let Some(((x0, y0), (x1, y1))) = clip_segment(img, from, to) else {
        return;
    };
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        put_wide(img, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Bresenham line, 1px wide
pub fn draw_line(img: &mut RgbaImage, from: Point, to: Point, color: Color) {
    line_wide(img, widen(from), widen(to), color);
}

/// Line with variable thickness built from parallel Bresenham lines.
///
/// Offsets advance in half-pixel steps so diagonal strokes don't leave gaps.
pub fn draw_thick_line(img: &mut RgbaImage, from: Point, to: Point, width: u32, color: Color) {
    if width <= 1 {
        draw_line(img, from, to, color);
        return;
    }

    let (fx, fy) = widen(from);
    let (tx, ty) = widen(to);
    let dx = (tx - fx) as f64;
    let dy = (ty - fy) as f64;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 0.001 {
        fill_disc(img, from, width, color);
        return;
    }

    let px = -dy / len;
    let py = dx / len;
    let half = (width as f64 - 1.0) / 2.0;
    for i in 0..(width as u64 * 2 - 1) {
        let offset = i as f64 / 2.0 - half;
        let ox = (px * offset).round() as i64;
        let oy = (py * offset).round() as i64;
        line_wide(img, (fx + ox, fy + oy), (tx + ox, ty + oy), color);
    }
}

/// Filled circle via midpoint spans
pub fn fill_circle(img: &mut RgbaImage, center: Point, radius: i32, color: Color) {
    let (cx, cy) = widen(center);
    if radius <= 0 {
        if radius == 0 {
            put_wide(img, cx, cy, color);
        }
        return;
    }

    let radius = radius as i64;
    let (w, h) = (img.width() as i64, img.height() as i64);
    if cx + radius < 0 || cy + radius < 0 || cx - radius >= w || cy - radius >= h {
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        hline(img, cx - x, cx + x, cy + y, color);
        if y != 0 {
            hline(img, cx - x, cx + x, cy - y, color);
        }
        if x != y {
            hline(img, cx - y, cx + y, cy + x, color);
            if y != 0 {
                hline(img, cx - y, cx + y, cy - x, color);
            }
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Filled disc of the given diameter centered on `center`
pub fn fill_disc(img: &mut RgbaImage, center: Point, diameter: u32, color: Color) {
    let radius = (diameter / 2) as i32;
    fill_circle(img, center, radius, color);
}

/// Rectangle outline centered on the edges between `min` and `max`
pub fn draw_rect_outline(img: &mut RgbaImage, min: Point, max: Point, width: u32, color: Color) {
    let width = width.max(1) as i64;
    let inner = width / 2;
    let outer = width - inner - 1;
    let (x0, y0) = widen(min);
    let (x1, y1) = widen(max);

    // top, bottom, left, right bands
    fill_span_rect(img, (x0 - inner, y0 - inner), (x1 + outer, y0 + outer), color);
    fill_span_rect(img, (x0 - inner, y1 - inner), (x1 + outer, y1 + outer), color);
    fill_span_rect(img, (x0 - inner, y0 - inner), (x0 + outer, y1 + outer), color);
    fill_span_rect(img, (x1 - inner, y0 - inner), (x1 + outer, y1 + outer), color);
}

/// 1px rectangle outline with an `on`/`off` dash pattern walked clockwise.
///
/// Only the on-screen part of each edge is visited; the dash phase comes from
/// the pixel's position along the whole outline.
pub fn draw_dashed_rect_outline(img: &mut RgbaImage, min: Point, max: Point, on: u32, off: u32, color: Color) {
    if min == max {
        put_pixel(img, min.x, min.y, color);
        return;
    }

    let on = on.max(1) as i64;
    let period = on + off as i64;
    let (w, h) = (img.width() as i64, img.height() as i64);
    let (x0, y0) = widen(min);
    let (x1, y1) = widen(max);
    let top_len = x1 - x0;
    let side_len = y1 - y0;

    let mut dash = |step: i64, x: i64, y: i64| {
        if step % period < on {
            put_wide(img, x, y, color);
        }
    };

    // top, left to right
    if (0..h).contains(&y0) {
        for x in x0.max(0)..x1.min(w) {
            dash(x - x0, x, y0);
        }
    }
    // right, downwards
    if (0..w).contains(&x1) {
        for y in y0.max(0)..y1.min(h) {
            dash(top_len + y - y0, x1, y);
        }
    }
    // bottom, right to left
    if (0..h).contains(&y1) {
        for x in (x0 + 1).max(0)..=x1.min(w - 1) {
            dash(top_len + side_len + x1 - x, x, y1);
        }
    }
    // left, upwards
    if (0..w).contains(&x0) {
        for y in (y0 + 1).max(0)..=y1.min(h - 1) {
            dash(2 * top_len + side_len + y1 - y, x0, y);
        }
    }
}

/// Outline of the ellipse inscribed in the rectangle `min`..`max`
pub fn draw_ellipse_outline(img: &mut RgbaImage, min: Point, max: Point, width: u32, color: Color) {
    let rx = (max.x as f64 - min.x as f64) / 2.0;
    let ry = (max.y as f64 - min.y as f64) / 2.0;
    let cx = min.x as f64 + rx;
    let cy = min.y as f64 + ry;

    if rx < 0.5 && ry < 0.5 {
        fill_disc(img, Point::new(cx.round() as i32, cy.round() as i32), width, color);
        return;
    }

    let circumference = std::f64::consts::TAU * rx.max(ry);
    let segments = (circumference.ceil() as usize).clamp(8, MAX_ELLIPSE_SEGMENTS);
    let at = |i: usize| {
        let t = std::f64::consts::TAU * i as f64 / segments as f64;
        Point::new((cx + rx * t.cos()).round() as i32, (cy + ry * t.sin()).round() as i32)
    };

    let mut previous = at(0);
    for i in 1..=segments {
        let next = at(i);
        if next != previous {
            draw_thick_line(img, previous, next, width, color);
            previous = next;
        }
    }
}

/// Composite `src` onto `dst` with its top-left corner at `at`
pub fn blit(dst: &mut RgbaImage, src: &RgbaImage, at: Point) {
    let dst_w = dst.width() as i64;
    let dst_h = dst.height() as i64;

    for (sx, sy, pixel) in src.enumerate_pixels() {
        let dx = at.x as i64 + sx as i64;
        let dy = at.y as i64 + sy as i64;
        if dx < 0 || dy < 0 || dx >= dst_w || dy >= dst_h {
            continue;
        }
        let target = dst.get_pixel_mut(dx as u32, dy as u32);
        *target = blend(*target, *pixel);
    }
}

/// Copy out `region`, clamped to the buffer. A region entirely outside the
/// buffer yields a 0x0 image.
pub fn crop(img: &RgbaImage, region: PixelRect) -> RgbaImage {
    match region.clamp_to(img.width(), img.height()) {
        Some(r) => imageops::crop_imm(img, r.min.x as u32, r.min.y as u32, r.width(), r.height()).to_image(),
        None => RgbaImage::new(0, 0),
    }
}

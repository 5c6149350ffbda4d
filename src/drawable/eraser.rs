use image::RgbaImage;

use super::{Draw, RenderContext};
use crate::geometry::{Point, offset_point};
use crate::id_generator::{DrawableId, generate_id};
use crate::raster;
use crate::stroke::StrokeStyle;

/// Restores the background mask under a square brush instead of painting a color
#[derive(Debug, Clone)]
pub struct EraserStroke {
    id: DrawableId,
    points: Vec<Point>,
    style: StrokeStyle,
}

impl EraserStroke {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            style,
        }
    }
}

impl Draw for EraserStroke {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "eraser"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn style(&self) -> Option<&StrokeStyle> {
        Some(&self.style)
    }

    fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    fn render(&self, surface: &mut RgbaImage, offset: Point, ctx: &mut RenderContext<'_>) {
        let width = self.style.width() as i32;
        let half = width / 2;

        for point in &self.points {
            let screen = offset_point(*point, offset);
            let (mask_x, mask_y) = (point.x.saturating_sub(half), point.y.saturating_sub(half));
            let (screen_x, screen_y) = (screen.x.saturating_sub(half), screen.y.saturating_sub(half));
            for x in 0..width {
                for y in 0..width {
                    // mask is canvas-local; pixels it doesn't cover are left alone
                    let Some(restored) =
                        raster::get_pixel(ctx.background_mask, mask_x.saturating_add(x), mask_y.saturating_add(y))
                    else {
                        continue;
                    };
                    raster::put_pixel(surface, screen_x.saturating_add(x), screen_y.saturating_add(y), restored);
                }
            }
        }
    }
}

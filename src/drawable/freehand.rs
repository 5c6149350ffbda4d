use image::RgbaImage;

use super::{Draw, RenderContext, common};
use crate::geometry::Point;
use crate::id_generator::{DrawableId, generate_id};
use crate::raster;
use crate::stroke::StrokeStyle;

/// Pen stroke: every pointer position, joined by thick segments with round caps and joins
#[derive(Debug, Clone)]
pub struct FreehandStroke {
    id: DrawableId,
    points: Vec<Point>,
    style: StrokeStyle,
}

impl FreehandStroke {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            style,
        }
    }
}

impl Draw for FreehandStroke {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "pen"
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

    fn render(&self, surface: &mut RgbaImage, offset: Point, _ctx: &mut RenderContext<'_>) {
        let screen = common::to_screen(&self.points, offset);
        let Some(first) = screen.first() else {
            return;
        };
        let color = self.style.color();
        let width = self.style.width();

        raster::fill_disc(surface, *first, width, color);
        if screen.len() < 2 {
            return;
        }

        for segment in screen.windows(2) {
            raster::draw_thick_line(surface, segment[0], segment[1], width, color);
        }
        if width > 1 {
            for joint in &screen[1..] {
                raster::fill_disc(surface, *joint, width, color);
            }
        }
    }
}

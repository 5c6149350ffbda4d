use image::RgbaImage;

use super::{Draw, RenderContext, common};
use crate::geometry::{Point, normalize_rectangle};
use crate::id_generator::{DrawableId, generate_id};
use crate::raster;
use crate::stroke::StrokeStyle;

/// Outline of the rectangle between the drag anchor and the current pointer
#[derive(Debug, Clone)]
pub struct RectangleShape {
    id: DrawableId,
    points: Vec<Point>,
    style: StrokeStyle,
}

impl RectangleShape {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            style,
        }
    }
}

impl Draw for RectangleShape {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "rectangle"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn style(&self) -> Option<&StrokeStyle> {
        Some(&self.style)
    }

    fn add_point(&mut self, point: Point) {
        common::collapse_to_anchor(&mut self.points, point);
    }

    fn render(&self, surface: &mut RgbaImage, offset: Point, _ctx: &mut RenderContext<'_>) {
        if let Some((a, b)) = common::corners(&self.points, offset) {
            let (min, max) = normalize_rectangle(a, b);
            raster::draw_rect_outline(surface, min, max, self.style.width(), self.style.color());
        }
    }
}

/// Outline of the ellipse inscribed in the anchor-to-pointer rectangle
#[derive(Debug, Clone)]
pub struct EllipseShape {
    id: DrawableId,
    points: Vec<Point>,
    style: StrokeStyle,
}

impl EllipseShape {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            style,
        }
    }
}

impl Draw for EllipseShape {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "ellipse"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn style(&self) -> Option<&StrokeStyle> {
        Some(&self.style)
    }

    fn add_point(&mut self, point: Point) {
        common::collapse_to_anchor(&mut self.points, point);
    }

    fn render(&self, surface: &mut RgbaImage, offset: Point, _ctx: &mut RenderContext<'_>) {
        if let Some((a, b)) = common::corners(&self.points, offset) {
            let (min, max) = normalize_rectangle(a, b);
            raster::draw_ellipse_outline(surface, min, max, self.style.width(), self.style.color());
        }
    }
}

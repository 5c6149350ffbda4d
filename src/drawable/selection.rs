use image::RgbaImage;

use super::{Draw, RenderContext, common};
use crate::geometry::{PixelRect, Point, normalize_rectangle};
use crate::id_generator::{DrawableId, generate_id};
use crate::raster;
use crate::stroke::{DashPattern, StrokeStyle};

/// Dashed rubber-band rectangle marking the copy region.
///
/// Always temporary: it is never baked into an export or a merge.
#[derive(Debug, Clone)]
pub struct SelectionMarquee {
    id: DrawableId,
    points: Vec<Point>,
    style: StrokeStyle,
}

impl SelectionMarquee {
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            style: StrokeStyle::marquee(),
        }
    }

    /// Normalized region currently enclosed by the marquee
    pub fn region(&self) -> Option<PixelRect> {
        match self.points.as_slice() {
            [a, b, ..] => Some(PixelRect::from_corners(*a, *b)),
            _ => None,
        }
    }
}

impl Default for SelectionMarquee {
    fn default() -> Self {
        Self::new()
    }
}

impl Draw for SelectionMarquee {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "selection"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn style(&self) -> Option<&StrokeStyle> {
        Some(&self.style)
    }

    fn is_temporary(&self) -> bool {
        true
    }

    fn add_point(&mut self, point: Point) {
        common::collapse_to_anchor(&mut self.points, point);
    }

    fn render(&self, surface: &mut RgbaImage, offset: Point, _ctx: &mut RenderContext<'_>) {
        let Some((a, b)) = common::corners(&self.points, offset) else {
            return;
        };
        let (min, max) = normalize_rectangle(a, b);
        match self.style.dash() {
            DashPattern::Dashed { on, off } => {
                raster::draw_dashed_rect_outline(surface, min, max, on, off, self.style.color())
            }
            DashPattern::Solid => raster::draw_rect_outline(surface, min, max, self.style.width(), self.style.color()),
        }
    }
}

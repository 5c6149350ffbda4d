use std::cell::OnceCell;
use std::sync::Arc;

use image::RgbaImage;
use log::info;

use super::{Draw, RenderContext};
use crate::flood_fill::flood_fill;
use crate::geometry::{Point, offset_point};
use crate::id_generator::{DrawableId, generate_id};
use crate::raster;
use crate::stroke::StrokeStyle;

/// Bucket fill.
///
/// Holds the composite as it looked when the bucket was clicked. The first render
/// floods that snapshot (and the background mask) from the seed point; the result
/// is kept so later renders only blit it.
#[derive(Clone)]
pub struct FloodFillStroke {
    id: DrawableId,
    points: Vec<Point>,
    style: StrokeStyle,
    base: Arc<RgbaImage>,
    filled: OnceCell<Arc<RgbaImage>>,
}

impl std::fmt::Debug for FloodFillStroke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloodFillStroke")
            .field("id", &self.id)
            .field("points", &self.points)
            .field("style", &self.style)
            .field("base", &self.base.dimensions())
            .field("filled", &self.filled.get().is_some())
            .finish()
    }
}

impl FloodFillStroke {
    pub fn new(style: StrokeStyle, base: Arc<RgbaImage>) -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            style,
            base,
            filled: OnceCell::new(),
        }
    }

    pub fn seed(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

impl Draw for FloodFillStroke {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "bucket"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    fn style(&self) -> Option<&StrokeStyle> {
        Some(&self.style)
    }

    // only the click position matters
    fn add_point(&mut self, point: Point) {
        if self.points.is_empty() {
            self.points.push(point);
        }
    }

    fn render(&self, surface: &mut RgbaImage, offset: Point, ctx: &mut RenderContext<'_>) {
        let Some(seed) = self.seed() else {
            return;
        };
        if raster::get_pixel(&self.base, seed.x, seed.y).is_none() {
            return;
        }

        let color = self.style.color();
        let filled = self.filled.get_or_init(|| {
            let mut image = RgbaImage::clone(&self.base);
            let count = flood_fill(&mut image, ctx.background_mask, seed, color);
            info!("🪣 Bucket {} filled {} pixels from {:?}", self.id, count, seed);
            Arc::new(image)
        });
        raster::blit(surface, filled, offset_point(Point::ZERO, offset));
    }
}

use std::sync::Arc;

use image::RgbaImage;

use super::{Draw, RenderContext};
use crate::geometry::{Point, offset_point};
use crate::id_generator::{DrawableId, generate_id};
use crate::raster;

/// A fixed bitmap placed at a single point (paste, import, flattened history)
#[derive(Clone)]
pub struct ImagePaste {
    id: DrawableId,
    points: Vec<Point>,
    bitmap: Arc<RgbaImage>,
}

// Custom Debug so the pixel data isn't dumped into logs
impl std::fmt::Debug for ImagePaste {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePaste")
            .field("id", &self.id)
            .field("points", &self.points)
            .field("size", &self.bitmap.dimensions())
            .finish()
    }
}

impl ImagePaste {
    pub fn new(bitmap: Arc<RgbaImage>) -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            bitmap,
        }
    }

    pub fn position(&self) -> Option<Point> {
        self.points.first().copied()
    }
}

impl Draw for ImagePaste {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "image"
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    // a paste follows the pointer; only the latest placement is kept
    fn add_point(&mut self, point: Point) {
        self.points.clear();
        self.points.push(point);
    }

    fn render(&self, surface: &mut RgbaImage, offset: Point, _ctx: &mut RenderContext<'_>) {
        if let Some(position) = self.position() {
            raster::blit(surface, &self.bitmap, offset_point(position, offset));
        }
    }
}

use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Draw, RenderContext};
use crate::geometry::{Point, offset_point};
use crate::id_generator::{DrawableId, generate_id};
use crate::raster;
use crate::stroke::StrokeStyle;

/// One in this many candidate pixels of the spray disc gets paint
const SPRAY_SPARSENESS: u32 = 8;

/// Airbrush stroke: a sparse random dot pattern inside a disc at every point.
///
/// The pattern for point `i` is drawn from an RNG seeded with the drawable's id
/// plus `i`, so re-rendering the same stroke reproduces the same dots while two
/// strokes over identical points still differ.
#[derive(Debug, Clone)]
pub struct SprayStroke {
    id: DrawableId,
    points: Vec<Point>,
    style: StrokeStyle,
}

impl SprayStroke {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            id: generate_id(),
            points: Vec::new(),
            style,
        }
    }

    fn rng_for(&self, index: usize) -> StdRng {
        StdRng::seed_from_u64(self.id.seed().wrapping_add(index as u64))
    }
}

impl Draw for SprayStroke {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "spray"
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
        let width = self.style.width();
        let color = self.style.color();
        let radius = width as f64 / 2.0;
        let half = (width / 2) as i32;

        for (index, point) in self.points.iter().enumerate() {
            let center = offset_point(*point, offset);
            let (left, top) = (center.x.saturating_sub(half), center.y.saturating_sub(half));
            let mut rng = self.rng_for(index);
            for x in 0..width {
                for y in 0..width {
                    let hit = rng.gen_range(0..SPRAY_SPARSENESS) == 1;
                    let dx = x as f64 - radius;
                    let dy = y as f64 - radius;
                    if hit && dx * dx + dy * dy <= radius * radius {
                        raster::put_pixel(surface, left.saturating_add(x as i32), top.saturating_add(y as i32), color);
                    }
                }
            }
        }
    }
}

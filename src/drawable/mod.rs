use image::RgbaImage;

mod common;
pub(crate) mod eraser;
pub(crate) mod fill;
pub(crate) mod freehand;
pub(crate) mod paste;
pub(crate) mod selection;
pub(crate) mod shape;
pub(crate) mod spray;

pub use eraser::EraserStroke;
pub use fill::FloodFillStroke;
pub use freehand::FreehandStroke;
pub use paste::ImagePaste;
pub use selection::SelectionMarquee;
pub use shape::{EllipseShape, RectangleShape};
pub use spray::SprayStroke;

use crate::geometry::{PixelRect, Point};
use crate::id_generator::{DrawableId, generate_id};
use crate::stroke::StrokeStyle;

/// Canvas state a drawable may read or write while rendering
pub struct RenderContext<'a> {
    /// Snapshot of the blank background, same size as the canvas.
    /// The eraser reads from it; the bucket writes its fill into it.
    pub background_mask: &'a mut RgbaImage,
}

/// Common trait that all drawables must implement
pub trait Draw {
    /// Get the unique identifier for this drawable
    fn id(&self) -> DrawableId;

    /// Short name of the tool that produced this drawable
    fn kind(&self) -> &'static str;

    /// Recorded points in canvas-local coordinates
    fn points(&self) -> &[Point];

    fn style(&self) -> Option<&StrokeStyle> {
        None
    }

    /// Temporary drawables only live while they are the latest one in history
    fn is_temporary(&self) -> bool {
        false
    }

    /// Record a pointer position. Each kind decides what to keep.
    fn add_point(&mut self, point: Point);

    /// Rasterize onto `surface`, translating every stored point by `offset`
    fn render(&self, surface: &mut RgbaImage, offset: Point, ctx: &mut RenderContext<'_>);
}

/// Stand-in left in history when a stale temporary is dropped; renders nothing
#[derive(Debug, Clone)]
pub struct NoOp {
    id: DrawableId,
}

impl NoOp {
    pub fn new() -> Self {
        Self { id: generate_id() }
    }
}

impl Default for NoOp {
    fn default() -> Self {
        Self::new()
    }
}

impl Draw for NoOp {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "none"
    }

    fn points(&self) -> &[Point] {
        &[]
    }

    fn add_point(&mut self, _point: Point) {}

    fn render(&self, _surface: &mut RgbaImage, _offset: Point, _ctx: &mut RenderContext<'_>) {}
}

/// Enumeration of everything that can live in the canvas history
#[derive(Debug, Clone)]
pub enum Drawable {
    Freehand(FreehandStroke),
    Spray(SprayStroke),
    Eraser(EraserStroke),
    Rectangle(RectangleShape),
    Ellipse(EllipseShape),
    Selection(SelectionMarquee),
    FloodFill(FloodFillStroke),
    Image(ImagePaste),
    NoOp(NoOp),
}

impl Drawable {
    /// Region enclosed by a selection marquee
    pub fn selection_region(&self) -> Option<PixelRect> {
        match self {
            Drawable::Selection(marquee) => marquee.region(),
            _ => None,
        }
    }
}

impl Draw for Drawable {
    fn id(&self) -> DrawableId {
        match self {
            Drawable::Freehand(d) => d.id(),
            Drawable::Spray(d) => d.id(),
            Drawable::Eraser(d) => d.id(),
            Drawable::Rectangle(d) => d.id(),
            Drawable::Ellipse(d) => d.id(),
            Drawable::Selection(d) => d.id(),
            Drawable::FloodFill(d) => d.id(),
            Drawable::Image(d) => d.id(),
            Drawable::NoOp(d) => d.id(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Drawable::Freehand(d) => d.kind(),
            Drawable::Spray(d) => d.kind(),
            Drawable::Eraser(d) => d.kind(),
            Drawable::Rectangle(d) => d.kind(),
            Drawable::Ellipse(d) => d.kind(),
            Drawable::Selection(d) => d.kind(),
            Drawable::FloodFill(d) => d.kind(),
            Drawable::Image(d) => d.kind(),
            Drawable::NoOp(d) => d.kind(),
        }
    }

    fn points(&self) -> &[Point] {
        match self {
            Drawable::Freehand(d) => d.points(),
            Drawable::Spray(d) => d.points(),
            Drawable::Eraser(d) => d.points(),
            Drawable::Rectangle(d) => d.points(),
            Drawable::Ellipse(d) => d.points(),
            Drawable::Selection(d) => d.points(),
            Drawable::FloodFill(d) => d.points(),
            Drawable::Image(d) => d.points(),
            Drawable::NoOp(d) => d.points(),
        }
    }

    fn style(&self) -> Option<&StrokeStyle> {
        match self {
            Drawable::Freehand(d) => d.style(),
            Drawable::Spray(d) => d.style(),
            Drawable::Eraser(d) => d.style(),
            Drawable::Rectangle(d) => d.style(),
            Drawable::Ellipse(d) => d.style(),
            Drawable::Selection(d) => d.style(),
            Drawable::FloodFill(d) => d.style(),
            Drawable::Image(d) => d.style(),
            Drawable::NoOp(d) => d.style(),
        }
    }

    fn is_temporary(&self) -> bool {
        match self {
            Drawable::Selection(d) => d.is_temporary(),
            _ => false,
        }
    }

    fn add_point(&mut self, point: Point) {
        match self {
            Drawable::Freehand(d) => d.add_point(point),
            Drawable::Spray(d) => d.add_point(point),
            Drawable::Eraser(d) => d.add_point(point),
            Drawable::Rectangle(d) => d.add_point(point),
            Drawable::Ellipse(d) => d.add_point(point),
            Drawable::Selection(d) => d.add_point(point),
            Drawable::FloodFill(d) => d.add_point(point),
            Drawable::Image(d) => d.add_point(point),
            Drawable::NoOp(d) => d.add_point(point),
        }
    }

    fn render(&self, surface: &mut RgbaImage, offset: Point, ctx: &mut RenderContext<'_>) {
        match self {
            Drawable::Freehand(d) => d.render(surface, offset, ctx),
            Drawable::Spray(d) => d.render(surface, offset, ctx),
            Drawable::Eraser(d) => d.render(surface, offset, ctx),
            Drawable::Rectangle(d) => d.render(surface, offset, ctx),
            Drawable::Ellipse(d) => d.render(surface, offset, ctx),
            Drawable::Selection(d) => d.render(surface, offset, ctx),
            Drawable::FloodFill(d) => d.render(surface, offset, ctx),
            Drawable::Image(d) => d.render(surface, offset, ctx),
            Drawable::NoOp(d) => d.render(surface, offset, ctx),
        }
    }
}

/// Factory functions for creating drawables
pub mod factory {
    use std::sync::Arc;

    use image::RgbaImage;

    use super::*;

    pub fn create_freehand(style: StrokeStyle) -> Drawable {
        Drawable::Freehand(FreehandStroke::new(style))
    }

    pub fn create_spray(style: StrokeStyle) -> Drawable {
        Drawable::Spray(SprayStroke::new(style))
    }

    pub fn create_eraser(style: StrokeStyle) -> Drawable {
        Drawable::Eraser(EraserStroke::new(style))
    }

    pub fn create_rectangle(style: StrokeStyle) -> Drawable {
        Drawable::Rectangle(RectangleShape::new(style))
    }

    pub fn create_ellipse(style: StrokeStyle) -> Drawable {
        Drawable::Ellipse(EllipseShape::new(style))
    }

    pub fn create_selection() -> Drawable {
        Drawable::Selection(SelectionMarquee::new())
    }

    /// `base` is the composite the fill floods; take it when the bucket is clicked
    pub fn create_flood_fill(style: StrokeStyle, base: Arc<RgbaImage>) -> Drawable {
        Drawable::FloodFill(FloodFillStroke::new(style, base))
    }

    /// An image already placed at `position`
    pub fn create_image(bitmap: Arc<RgbaImage>, position: Point) -> Drawable {
        let mut paste = ImagePaste::new(bitmap);
        paste.add_point(position);
        Drawable::Image(paste)
    }

    pub fn create_noop() -> Drawable {
        Drawable::NoOp(NoOp::new())
    }
}

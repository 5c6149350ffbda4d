use std::sync::Arc;
use std::time::{Duration, Instant};

use image::RgbaImage;
use log::{debug, info};
use parking_lot::Mutex;

use crate::config::CanvasConfig;
use crate::drawable::{Draw, Drawable, RenderContext, factory};
use crate::error::CanvasError;
use crate::geometry::{PixelRect, Point};
use crate::history::DrawHistory;
use crate::raster::{self, Color};
use crate::renderer::render_drawables;

/// A canvas behind one lock, for a render thread separate from input handling.
/// Hold the lock for the whole of each operation.
pub type SharedCanvas = Arc<Mutex<Canvas>>;

/// The composition engine.
///
/// Owns the drawable history, the live surface and the background mask. The
/// mask starts as a copy of the blank surface; the eraser restores pixels from
/// it and the bucket paints its fill into it.
#[derive(Debug)]
pub struct Canvas {
    history: DrawHistory,
    background_mask: RgbaImage,
    surface: RgbaImage,
    background: Color,
    last_render: Duration,
    selection: Option<PixelRect>,
    gesture_active: bool,
    needs_redraw: bool,
    version: u64,
}

impl Canvas {
    pub fn new(config: &CanvasConfig) -> Result<Self, CanvasError> {
        config.validate()?;
        Ok(Self::blank(config))
    }

    fn blank(config: &CanvasConfig) -> Self {
        let background = config.background_color();
        let surface = raster::filled(config.width, config.height, background);
        info!("🎨 New canvas {}x{}", config.width, config.height);

        Self {
            history: DrawHistory::new(),
            background_mask: surface.clone(),
            surface,
            background,
            last_render: Duration::ZERO,
            selection: None,
            gesture_active: false,
            needs_redraw: true,
            version: 0,
        }
    }

    pub fn with_size(width: u32, height: u32) -> Result<Self, CanvasError> {
        Self::new(&CanvasConfig {
            width,
            height,
            ..CanvasConfig::default()
        })
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn drawables(&self) -> &[Drawable] {
        self.history.active()
    }

    pub fn redo_len(&self) -> usize {
        self.history.redo_len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn background_mask(&self) -> &RgbaImage {
        &self.background_mask
    }

    /// The live surface as of the last [`Canvas::redraw`]
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Bumped by every redraw; lets the UI skip re-uploading an unchanged surface
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn last_render(&self) -> Duration {
        self.last_render
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Append a drawable and drop everything redoable
    pub fn add(&mut self, drawable: Drawable) {
        debug!("Adding {} drawable {}", drawable.kind(), drawable.id());
        self.history.commit(drawable);
        self.request_redraw();
    }

    /// Add the drawable for a new pointer gesture. Points go to it until [`Canvas::end_gesture`].
    pub fn begin_gesture(&mut self, drawable: Drawable) {
        self.add(drawable);
        self.gesture_active = true;
    }

    pub fn extend_gesture(&mut self, point: Point) {
        if !self.gesture_active {
            return;
        }
        if let Some(drawable) = self.history.last_mut() {
            drawable.add_point(point);
            if let Some(region) = drawable.selection_region() {
                self.selection = Some(region);
            }
            self.request_redraw();
        }
    }

    pub fn end_gesture(&mut self) {
        self.gesture_active = false;
    }

    pub fn undo(&mut self) {
        // the drawable being extended may be the one that goes away
        self.gesture_active = false;
        if self.history.undo() {
            self.request_redraw();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.request_redraw();
        }
    }

    /// Drop all drawables. With `reset_background` the blank surface also becomes
    /// the new background mask, forgetting earlier bucket fills.
    pub fn clear(&mut self, reset_background: bool) {
        self.history.clear();
        self.selection = None;
        self.gesture_active = false;
        self.surface = raster::filled(self.width(), self.height(), self.background);
        if reset_background {
            self.background_mask = self.surface.clone();
        }
        info!("🧹 Canvas cleared (background reset: {})", reset_background);
        self.request_redraw();
    }

    fn drop_trailing_temporary(&mut self) -> bool {
        let trailing = self.history.active().last().is_some_and(|d| d.is_temporary());
        if trailing {
            self.history.active_mut().pop();
            self.request_redraw();
        }
        trailing
    }

    fn composite(&mut self) -> RgbaImage {
        let mut output = raster::filled(self.width(), self.height(), self.background);
        let mut ctx = RenderContext {
            background_mask: &mut self.background_mask,
        };
        render_drawables(self.history.active_mut(), &mut output, Point::ZERO, &mut ctx);
        output
    }

    /// Composite everything onto a fresh background buffer.
    ///
    /// A trailing temporary drawable (the marquee) is removed first so it never
    /// ends up in an export. With `region` the result is cropped to it after
    /// clamping to the canvas; a region entirely outside yields a 0x0 image.
    pub fn render_surface(&mut self, region: Option<PixelRect>) -> RgbaImage {
        if self.drop_trailing_temporary() {
            self.gesture_active = false;
        }
        let full = self.composite();
        match region {
            None => full,
            Some(region) => match region.clamp_to(self.width(), self.height()) {
                Some(clamped) => raster::crop(&full, clamped),
                None => RgbaImage::new(0, 0),
            },
        }
    }

    /// Flatten the history into one bitmap at the origin.
    ///
    /// The drawable of an unfinished gesture and a trailing marquee are kept on
    /// top of the flattened image instead of being baked in. Redo is lost.
    pub fn merge(&mut self) {
        let keep = {
            let last = self.history.active().last();
            if self.gesture_active || last.is_some_and(|d| d.is_temporary()) {
                self.history.active_mut().pop()
            } else {
                None
            }
        };
        let baked = self.history.undo_len();
        let flattened = self.composite();

        let mut drawables = vec![factory::create_image(Arc::new(flattened), Point::ZERO)];
        drawables.extend(keep);
        self.history.replace(drawables);
        info!("🗜 Merged {} drawables into one bitmap", baked);
        self.request_redraw();
    }

    /// Re-render the live surface from scratch and time it
    pub fn redraw(&mut self) {
        let started = Instant::now();
        for pixel in self.surface.pixels_mut() {
            *pixel = self.background;
        }
        let mut ctx = RenderContext {
            background_mask: &mut self.background_mask,
        };
        render_drawables(self.history.active_mut(), &mut self.surface, Point::ZERO, &mut ctx);

        self.last_render = started.elapsed();
        self.needs_redraw = false;
        self.version = self.version.wrapping_add(1);
        debug!(
            "Redrew {} drawables in {:?}",
            self.history.undo_len(),
            self.last_render
        );
    }

    /// Redraw only when something changed. Returns whether it did.
    pub fn redraw_if_needed(&mut self) -> bool {
        if self.needs_redraw {
            self.redraw();
            true
        } else {
            false
        }
    }

    pub fn export_raster(&mut self) -> RgbaImage {
        self.render_surface(None)
    }

    /// Replace the whole canvas content with `image`, anchored at the origin
    pub fn import_raster(&mut self, image: RgbaImage) {
        info!("📂 Importing {}x{} image", image.width(), image.height());
        self.clear(true);
        self.add(factory::create_image(Arc::new(image), Point::ZERO));
    }

    pub fn extract_region(&mut self, region: PixelRect) -> RgbaImage {
        self.render_surface(Some(region))
    }

    /// Region last enclosed by the selection marquee
    pub fn selection(&self) -> Option<PixelRect> {
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Color of the composited canvas at `point`
    pub fn color_at(&mut self, point: Point) -> Option<Color> {
        self.redraw_if_needed();
        raster::get_pixel(&self.surface, point.x, point.y)
    }

    /// Change the canvas extent. Existing drawables are kept and clipped; the
    /// background mask keeps its content where the sizes overlap.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        CanvasError::check_dimensions(width, height)?;

        let mut mask = raster::filled(width, height, self.background);
        raster::blit(&mut mask, &self.background_mask, Point::ZERO);
        self.background_mask = mask;
        self.surface = raster::filled(width, height, self.background);
        self.selection = self.selection.and_then(|s| s.clamp_to(width, height));
        info!("📐 Canvas resized to {}x{}", width, height);
        self.request_redraw();
        Ok(())
    }

    pub fn into_shared(self) -> SharedCanvas {
        Arc::new(Mutex::new(self))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::blank(&CanvasConfig::default())
    }
}

use std::sync::Arc;

use image::RgbaImage;
use log::{debug, info};

use crate::canvas::Canvas;
use crate::config::{CanvasConfig, MergePolicy};
use crate::drawable::factory;
use crate::error::CanvasError;
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::raster::Color;
use crate::tools::{ToolKind, ToolSettings};

/// What a pointer-down turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// A gesture started; moves extend it until pointer-up
    Drawing,
    /// The color picker sampled the canvas
    PickedColor(Color),
    /// Nothing to do (paste with an empty clipboard, pick outside the canvas)
    Ignored,
}

/// One editing session: the canvas, the copied image and the merge policy
#[derive(Debug)]
pub struct Editor {
    canvas: Canvas,
    clipboard: Option<Arc<RgbaImage>>,
    merge_policy: MergePolicy,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            clipboard: None,
            merge_policy: MergePolicy::default(),
        }
    }
}

impl Editor {
    pub fn new(config: &CanvasConfig) -> Result<Self, CanvasError> {
        Ok(Self {
            canvas: Canvas::new(config)?,
            clipboard: None,
            merge_policy: config.merge,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn set_merge_policy(&mut self, policy: MergePolicy) {
        self.merge_policy = policy;
    }

    pub fn clipboard(&self) -> Option<&Arc<RgbaImage>> {
        self.clipboard.as_ref()
    }

    pub fn pointer_down(&mut self, point: Point, settings: &ToolSettings) -> PointerOutcome {
        self.canvas.clear_selection();
        let style = settings.stroke_style();

        let drawable = match settings.tool {
            ToolKind::ColorPicker => {
                return match self.canvas.color_at(point) {
                    Some(color) => PointerOutcome::PickedColor(color),
                    None => PointerOutcome::Ignored,
                };
            }
            ToolKind::PasteImage => match &self.clipboard {
                Some(bitmap) => factory::create_image(Arc::clone(bitmap), point),
                None => {
                    debug!("Paste with an empty clipboard");
                    return PointerOutcome::Ignored;
                }
            },
            ToolKind::FloodFill => {
                let snapshot = self.canvas.render_surface(None);
                factory::create_flood_fill(style, Arc::new(snapshot))
            }
            ToolKind::FreehandPen => factory::create_freehand(style),
            ToolKind::Spray => factory::create_spray(style),
            ToolKind::Eraser => factory::create_eraser(style),
            ToolKind::Rectangle => factory::create_rectangle(style),
            ToolKind::Ellipse => factory::create_ellipse(style),
            ToolKind::SelectionMarquee => factory::create_selection(),
        };

        self.canvas.begin_gesture(drawable);
        self.canvas.extend_gesture(point);
        PointerOutcome::Drawing
    }

    pub fn pointer_move(&mut self, point: Point) {
        self.canvas.extend_gesture(point);
    }

    /// Finish the gesture, then flatten the history if rendering it got too slow.
    /// Returns whether a merge happened.
    pub fn pointer_up(&mut self) -> bool {
        if !self.canvas.is_gesture_active() {
            return false;
        }
        self.canvas.end_gesture();
        self.canvas.redraw_if_needed();

        let last_render = self.canvas.last_render();
        let count = self.canvas.drawables().len();
        if self.merge_policy.should_merge(last_render, count) {
            debug!("Render took {:?} over {} drawables, merging", last_render, count);
            self.canvas.merge();
            return true;
        }
        false
    }

    /// Dispatch a translated input event
    pub fn handle(&mut self, event: InputEvent, settings: &ToolSettings) -> PointerOutcome {
        match event {
            InputEvent::PointerDown { position } => return self.pointer_down(position, settings),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { position } => {
                if let Some(position) = position {
                    self.pointer_move(position);
                }
                self.pointer_up();
            }
            InputEvent::Undo => self.canvas.undo(),
            InputEvent::Redo => self.canvas.redo(),
        }
        PointerOutcome::Ignored
    }

    /// Copy the selected region into the clipboard. Returns false when there is
    /// no selection or it lies outside the canvas.
    pub fn copy_selection(&mut self) -> bool {
        let Some(region) = self.canvas.selection() else {
            return false;
        };
        let copied = self.canvas.extract_region(region);
        if copied.width() == 0 || copied.height() == 0 {
            return false;
        }
        info!("📋 Copied {}x{} region", copied.width(), copied.height());
        self.clipboard = Some(Arc::new(copied));
        true
    }
}

use std::path::PathBuf;

use crate::config::CanvasConfig;
use crate::editor::{Editor, PointerOutcome};
use crate::file_handler::{self, FileHandler};
use crate::geometry::Point;
use crate::input::{InputEvent, InputHandler};
use crate::panels::{central_panel, file_panel, status_bar, tools_panel};
use crate::texture_manager::CanvasTexture;
use crate::tools::ToolSettings;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    settings: ToolSettings,
    config: CanvasConfig,
    file_path: String,

    #[serde(skip)]
    editor: Editor,
    #[serde(skip)]
    texture: CanvasTexture,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    file_handler: FileHandler,
    #[serde(skip)]
    status: String,
    #[serde(skip)]
    cursor: Option<Point>,
    #[serde(skip)]
    resize_to: [u32; 2],
}

impl Default for PaintApp {
    fn default() -> Self {
        let config = CanvasConfig::default();
        Self {
            settings: ToolSettings::default(),
            config,
            file_path: "canvas.png".to_owned(),
            editor: Editor::default(),
            texture: CanvasTexture::new(),
            input: InputHandler::default(),
            file_handler: FileHandler::new(),
            status: String::new(),
            cursor: None,
            resize_to: [config.width, config.height],
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: PaintApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        match Editor::new(&app.config) {
            Ok(editor) => app.editor = editor,
            Err(err) => {
                log::warn!("Stored canvas config rejected ({}), using defaults", err);
                app.config = CanvasConfig::default();
            }
        }
        app.resize_to = [app.editor.canvas().width(), app.editor.canvas().height()];
        log::info!("🖌 Paint app ready");
        app
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn file_path_mut(&mut self) -> &mut String {
        &mut self.file_path
    }

    pub fn resize_to_mut(&mut self) -> &mut [u32; 2] {
        &mut self.resize_to
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn undo(&mut self) {
        self.editor.canvas_mut().undo();
    }

    pub fn redo(&mut self) {
        self.editor.canvas_mut().redo();
    }

    pub fn clear_canvas(&mut self) {
        self.editor.canvas_mut().clear(true);
        self.set_status("Canvas cleared");
    }

    pub fn copy_selection(&mut self) {
        if self.editor.copy_selection() {
            self.set_status("Selection copied");
        } else {
            self.set_status("Nothing selected");
        }
    }

    pub fn save_file(&mut self) {
        let path = PathBuf::from(&self.file_path);
        let image = self.editor.canvas_mut().export_raster();
        match file_handler::save_raster(&path, &image) {
            Ok(()) => self.set_status(format!("Saved {}", path.display())),
            Err(err) => {
                log::error!("Failed to save {}: {}", path.display(), err);
                self.set_status(err.to_string());
            }
        }
    }

    pub fn open_file(&mut self) {
        let path = PathBuf::from(&self.file_path);
        match file_handler::load_raster(&path) {
            Ok(image) => {
                self.editor.canvas_mut().import_raster(image);
                self.set_status(format!("Opened {}", path.display()));
            }
            Err(err) => {
                log::error!("Failed to open {}: {}", path.display(), err);
                self.set_status(err.to_string());
            }
        }
    }

    pub fn resize_canvas(&mut self) {
        let [width, height] = self.resize_to;
        match self.editor.canvas_mut().resize(width, height) {
            Ok(()) => {
                self.config.width = width;
                self.config.height = height;
                self.texture.invalidate();
                self.set_status(format!("Canvas is now {}x{}", width, height));
            }
            Err(err) => {
                log::warn!("Resize rejected: {}", err);
                self.set_status(err.to_string());
            }
        }
    }

    /// Paste dropped images in place of the current content
    fn import_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        if let Some((name, image)) = self.file_handler.take_dropped_images().pop() {
            self.editor.canvas_mut().import_raster(image);
            self.set_status(format!("Opened {}", name));
        }
    }

    /// Route this frame's canvas input to the editor
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        let typing = ctx.wants_keyboard_input();

        for event in self.input.process_input(ctx) {
            if typing && matches!(event, InputEvent::Undo | InputEvent::Redo) {
                continue;
            }
            if let PointerOutcome::PickedColor(color) = self.editor.handle(event, &self.settings) {
                self.settings.set_color(color);
            }
        }
    }

    pub fn set_cursor(&mut self, cursor: Option<Point>) {
        self.cursor = cursor;
    }

    /// Redraw if needed and return the texture showing the canvas
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureId> {
        let canvas = self.editor.canvas_mut();
        canvas.redraw_if_needed();
        match self.texture.texture_id(ctx, canvas.surface(), canvas.version()) {
            Ok(id) => Some(id),
            Err(err) => {
                log::error!("Canvas texture unavailable: {}", err);
                None
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.import_dropped_files(ctx);

        file_panel(self, ctx);
        status_bar(self, ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);

        self.file_handler.preview_files_being_dropped(ctx);
    }
}

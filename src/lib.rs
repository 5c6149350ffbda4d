#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod drawable;
pub mod editor;
pub mod error;
pub mod file_handler;
pub mod flood_fill;
pub mod geometry;
pub mod history;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod stroke;
pub mod texture_manager;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Canvas, SharedCanvas};
pub use config::{CanvasConfig, MergePolicy};
pub use drawable::{Draw, Drawable, RenderContext};
pub use editor::{Editor, PointerOutcome};
pub use error::{CanvasError, FileError};
pub use geometry::{PixelRect, Point, normalize_rectangle, offset_point};
pub use history::DrawHistory;
pub use input::InputEvent;
pub use stroke::{DashPattern, StrokeStyle};
pub use tools::{ToolKind, ToolSettings};

use std::path::Path;

use eframe::egui;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{FileError, FileResult};

/// Formats the canvas can be saved to and loaded from
const SUPPORTED_FORMATS: [ImageFormat; 3] = [ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::Bmp];

fn format_for(path: &Path) -> FileResult<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| SUPPORTED_FORMATS.contains(format))
        .ok_or_else(|| FileError::UnsupportedFormat(path.to_path_buf()))
}

/// Encode the canvas to `path`, picking the format from the extension.
/// JPEG has no alpha channel, so it is dropped.
pub fn save_raster(path: &Path, image: &RgbaImage) -> FileResult<()> {
    let format = format_for(path)?;
    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format)?,
        _ => image.save_with_format(path, format)?,
    }
    log::info!("💾 Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

pub fn load_raster(path: &Path) -> FileResult<RgbaImage> {
    format_for(path)?;
    let bytes = std::fs::read(path)?;
    let image = decode_raster(&bytes)?;
    log::info!("Loaded {}x{} image from {}", image.width(), image.height(), path.display());
    Ok(image)
}

pub fn decode_raster(bytes: &[u8]) -> FileResult<RgbaImage> {
    let decoded = image::load_from_memory(bytes)?;
    log::debug!("Decoded image: {}x{}", decoded.width(), decoded.height());
    Ok(decoded.to_rgba8())
}

/// Collects images dropped onto the window
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up newly dropped files from the UI context.
    /// Returns true if any arrived this frame.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let mut new_dropped_files = false;

        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
                new_dropped_files = true;
            }
        });

        new_dropped_files
    }

    /// Decode the pending dropped files. Files that aren't images or fail to
    /// decode are logged and skipped.
    pub fn take_dropped_images(&mut self) -> Vec<(String, RgbaImage)> {
        let mut images = Vec::new();

        for file in self.dropped_files.drain(..) {
            let file_name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", file_name);
                continue;
            }

            let decoded = if let Some(bytes) = &file.bytes {
                log::info!("Processing image from memory: {} ({} bytes)", file_name, bytes.len());
                decode_raster(bytes)
            } else if let Some(path) = &file.path {
                log::info!("Processing image from path: {}", path.display());
                std::fs::read(path).map_err(FileError::from).and_then(|bytes| decode_raster(&bytes))
            } else {
                log::warn!("Dropped file has no accessible data: {}", file_name);
                continue;
            };

            match decoded {
                Ok(image) => images.push((file_name, image)),
                Err(err) => log::error!("Failed to load dropped image {}: {}", file_name, err),
            }
        }

        images
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Dropping files:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        file.mime.starts_with("image/")
    } else if let Some(path) = &file.path {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "bmp"))
    } else {
        false
    }
}

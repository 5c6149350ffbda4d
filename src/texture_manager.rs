use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use image::RgbaImage;
use thiserror::Error;

/// Errors that can occur during texture generation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TextureGenerationError {
    #[error("Invalid texture dimensions {0}x{1}")]
    InvalidDimensions(u32, u32),
}

/// Convert a canvas surface into an egui image
pub fn color_image(surface: &RgbaImage) -> Result<ColorImage, TextureGenerationError> {
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return Err(TextureGenerationError::InvalidDimensions(width, height));
    }
    Ok(ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        surface.as_raw(),
    ))
}

/// The GPU copy of the canvas surface.
///
/// Keyed by the canvas version, so the surface is only re-uploaded after a redraw.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    version: Option<u64>,
    uploads: u64,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for `surface` at `version`, uploading it first if the cached one is older
    pub fn texture_id(
        &mut self,
        ctx: &Context,
        surface: &RgbaImage,
        version: u64,
    ) -> Result<TextureId, TextureGenerationError> {
        if self.version == Some(version) {
            if let Some(handle) = &self.handle {
                return Ok(handle.id());
            }
        }

        let image = color_image(surface)?;
        let id = match self.handle.as_mut() {
            Some(handle) => {
                handle.set(image, TextureOptions::NEAREST);
                handle.id()
            }
            None => {
                let handle = ctx.load_texture("canvas_surface", image, TextureOptions::NEAREST);
                let id = handle.id();
                self.handle = Some(handle);
                id
            }
        };
        self.version = Some(version);
        self.uploads += 1;
        log::trace!("Uploaded canvas texture v{}", version);
        Ok(id)
    }

    /// Force the next call to re-upload
    pub fn invalidate(&mut self) {
        self.version = None;
    }

    /// Number of uploads so far
    pub fn upload_count(&self) -> u64 {
        self.uploads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{self, WHITE};

    #[test]
    fn test_cache_hit() {
        let ctx = Context::default();
        let surface = raster::filled(10, 10, WHITE);
        let mut texture = CanvasTexture::new();

        let first = texture.texture_id(&ctx, &surface, 1).unwrap();
        let second = texture.texture_id(&ctx, &surface, 1).unwrap();

        assert_eq!(first, second);
        assert_eq!(texture.upload_count(), 1);
    }

    #[test]
    fn test_version_change_reuploads_in_place() {
        let ctx = Context::default();
        let surface = raster::filled(10, 10, WHITE);
        let mut texture = CanvasTexture::new();

        let first = texture.texture_id(&ctx, &surface, 1).unwrap();
        let second = texture.texture_id(&ctx, &surface, 2).unwrap();

        assert_eq!(first, second);
        assert_eq!(texture.upload_count(), 2);
    }

    #[test]
    fn test_invalidation() {
        let ctx = Context::default();
        let surface = raster::filled(4, 4, WHITE);
        let mut texture = CanvasTexture::new();

        texture.texture_id(&ctx, &surface, 7).unwrap();
        texture.invalidate();
        texture.texture_id(&ctx, &surface, 7).unwrap();
        assert_eq!(texture.upload_count(), 2);
    }

    #[test]
    fn test_empty_surface_is_rejected() {
        let ctx = Context::default();
        let mut texture = CanvasTexture::new();
        assert_eq!(
            texture.texture_id(&ctx, &RgbaImage::new(0, 3), 1),
            Err(TextureGenerationError::InvalidDimensions(0, 3))
        );
    }
}

use std::ops::RangeInclusive;
use std::path::PathBuf;

use thiserror::Error;

/// Largest accepted canvas side, in pixels
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Accepted canvas side lengths, shared by validation and the size controls
pub const CANVAS_SIDES: RangeInclusive<u32> = 1..=MAX_CANVAS_SIDE;

/// Errors raised when configuring or resizing the canvas
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

impl CanvasError {
    /// Check a requested canvas extent before anything is allocated
    pub fn check_dimensions(width: u32, height: u32) -> Result<(), CanvasError> {
        if CANVAS_SIDES.contains(&width) && CANVAS_SIDES.contains(&height) {
            Ok(())
        } else {
            Err(CanvasError::InvalidDimensions { width, height })
        }
    }
}

/// Errors that can occur while reading or writing image files
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode or decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

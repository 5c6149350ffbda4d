use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::raster::Color;

/// When the editor flattens history into a single bitmap after a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePolicy {
    /// Merge once a full redraw takes longer than this
    pub max_render_time_ms: u64,
    /// Merge once this many drawables are stacked up, regardless of timing
    pub max_drawables: usize,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            max_render_time_ms: 30,
            max_drawables: 64,
        }
    }
}

impl MergePolicy {
    pub fn should_merge(&self, last_render: Duration, drawable_count: usize) -> bool {
        last_render > Duration::from_millis(self.max_render_time_ms) || drawable_count > self.max_drawables
    }
}

/// Initial canvas setup, persisted with the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Background fill as unmultiplied RGBA
    pub background: [u8; 4],
    pub merge: MergePolicy,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: [255, 255, 255, 255],
            merge: MergePolicy::default(),
        }
    }
}

impl CanvasConfig {
    pub fn background_color(&self) -> Color {
        image::Rgba(self.background)
    }

    pub fn validate(&self) -> Result<(), CanvasError> {
        CanvasError::check_dimensions(self.width, self.height)
    }
}

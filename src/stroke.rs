use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::raster::{BLACK, Color};

/// Dash pattern of an outline, in pixels along the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed { on: u32, off: u32 },
}

// Pen settings shared by every stroked drawable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    color: Color,
    width: u32,
    dash: DashPattern,
}

impl StrokeStyle {
    /// A solid stroke. Widths below one pixel are raised to one.
    pub fn new(color: Color, width: u32) -> Self {
        Self {
            color,
            width: width.max(1),
            dash: DashPattern::Solid,
        }
    }

    // Style of the selection marquee
    pub fn marquee() -> Self {
        Self::new(BLACK, 1).with_dash(DashPattern::Dashed { on: 4, off: 3 })
    }

    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn dash(&self) -> DashPattern {
        self.dash
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Rgba([0, 0, 0, 255]), 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marquee_is_a_thin_dashed_black_line() {
        let style = StrokeStyle::marquee();
        assert_eq!(style.color(), BLACK);
        assert_eq!(style.width(), 1);
        assert_eq!(style.dash(), DashPattern::Dashed { on: 4, off: 3 });
    }

    #[test]
    fn width_is_at_least_one_pixel() {
        assert_eq!(StrokeStyle::new(BLACK, 0).width(), 1);
        assert_eq!(StrokeStyle::default().dash(), DashPattern::Solid);
    }
}

use serde::{Deserialize, Serialize};

use crate::raster::Color;
use crate::stroke::StrokeStyle;

/// Every tool the toolbar offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    FreehandPen,
    Spray,
    Eraser,
    ColorPicker,
    Rectangle,
    Ellipse,
    SelectionMarquee,
    PasteImage,
    FloodFill,
}

impl ToolKind {
    pub const ALL: [ToolKind; 9] = [
        ToolKind::FreehandPen,
        ToolKind::Spray,
        ToolKind::Eraser,
        ToolKind::ColorPicker,
        ToolKind::Rectangle,
        ToolKind::Ellipse,
        ToolKind::SelectionMarquee,
        ToolKind::PasteImage,
        ToolKind::FloodFill,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::FreehandPen => "🖊 Pen",
            ToolKind::Spray => "💨 Spray",
            ToolKind::Eraser => "⌫ Eraser",
            ToolKind::ColorPicker => "💧 Picker",
            ToolKind::Rectangle => "▭ Rectangle",
            ToolKind::Ellipse => "◯ Ellipse",
            ToolKind::SelectionMarquee => "⬚ Select",
            ToolKind::PasteImage => "📋 Paste",
            ToolKind::FloodFill => "🪣 Bucket",
        }
    }

    /// Whether the stroke width applies to this tool
    pub fn uses_width(&self) -> bool {
        matches!(
            self,
            ToolKind::FreehandPen | ToolKind::Spray | ToolKind::Eraser | ToolKind::Rectangle | ToolKind::Ellipse
        )
    }
}

/// The toolbar state handed to the editor on every pointer-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool: ToolKind,
    /// Unmultiplied RGBA
    pub color: [u8; 4],
    pub width: u32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            color: [0, 0, 0, 255],
            width: 2,
        }
    }
}

impl ToolSettings {
    pub fn new(tool: ToolKind, color: Color, width: u32) -> Self {
        Self {
            tool,
            color: color.0,
            width,
        }
    }

    pub fn color(&self) -> Color {
        image::Rgba(self.color)
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color.0;
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color(), self.width)
    }
}

use egui::{Context, Key, Pos2, Rect};

use crate::geometry::Point;

/// Canvas input, already translated into canvas-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Point },
    /// Pointer moved while the button is held. May leave the canvas.
    PointerMove { position: Point },
    /// Primary button released
    PointerUp { position: Option<Point> },
    Undo,
    Redo,
}

/// Map a screen position into the pixel grid of a canvas drawn at `canvas_rect`
pub fn to_canvas_point(canvas_rect: Rect, pos: Pos2) -> Point {
    Point::new(
        (pos.x - canvas_rect.min.x).floor() as i32,
        (pos.y - canvas_rect.min.y).floor() as i32,
    )
}

/// Handles converting raw egui input into canvas events
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    dragging: bool,
    last_position: Option<Point>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            dragging: false,
            last_position: None,
        }
    }

    /// Update the canvas rectangle (it moves when the scroll area scrolls)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Process this frame's egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.interact_pos().map(|pos| (pos, to_canvas_point(self.canvas_rect, pos)));

            if input.pointer.primary_pressed() {
                if let Some((pos, position)) = hover {
                    if self.canvas_rect.contains(pos) {
                        events.push(InputEvent::PointerDown { position });
                        self.dragging = true;
                        self.last_position = Some(position);
                    }
                }
            } else if self.dragging && input.pointer.primary_down() {
                if let Some((_, position)) = hover {
                    if self.last_position != Some(position) {
                        events.push(InputEvent::PointerMove { position });
                        self.last_position = Some(position);
                    }
                }
            }

            if self.dragging && input.pointer.primary_released() {
                events.push(InputEvent::PointerUp {
                    position: hover.map(|(_, position)| position),
                });
                self.dragging = false;
                self.last_position = None;
            }

            for event in &input.raw.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    if !modifiers.command {
                        continue;
                    }
                    match key {
                        Key::Z if modifiers.shift => events.push(InputEvent::Redo),
                        Key::Z => events.push(InputEvent::Undo),
                        Key::Y => events.push(InputEvent::Redo),
                        _ => {}
                    }
                }
            }
        });

        events
    }
}

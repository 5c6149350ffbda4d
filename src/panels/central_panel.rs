use crate::PaintApp;
use crate::input::to_canvas_point;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(texture) = app.canvas_texture(ctx) else {
            ui.label("Canvas unavailable");
            return;
        };
        let canvas = app.editor().canvas();
        let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);

        egui::ScrollArea::both().show(ui, |ui| {
            let (canvas_rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter().image(texture, canvas_rect, uv, egui::Color32::WHITE);

            app.set_cursor(response.hover_pos().map(|pos| to_canvas_point(canvas_rect, pos)));
            app.handle_input(ctx, canvas_rect);
        });

        if app.editor().canvas().needs_redraw() {
            ctx.request_repaint();
        }
    });
}

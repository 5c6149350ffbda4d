use crate::PaintApp;
use crate::error::CANVAS_SIDES;

pub fn file_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("file_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("File:");
            ui.text_edit_singleline(app.file_path_mut());
            if ui.button("Open").clicked() {
                app.open_file();
            }
            if ui.button("Save").clicked() {
                app.save_file();
            }
            if ui.button("New").clicked() {
                app.clear_canvas();
            }

            ui.separator();
            let size = app.resize_to_mut();
            ui.label("Size:");
            ui.add(egui::DragValue::new(&mut size[0]).range(CANVAS_SIDES));
            ui.label("x");
            ui.add(egui::DragValue::new(&mut size[1]).range(CANVAS_SIDES));
            if ui.button("Resize").clicked() {
                app.resize_canvas();
            }
        });
    });
}

pub fn status_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let canvas = app.editor().canvas();
            ui.label(format!("{}x{}", canvas.width(), canvas.height()));
            ui.separator();
            match app.cursor() {
                Some(p) => ui.label(format!("{}, {}", p.x, p.y)),
                None => ui.label("-"),
            };
            if let Some(region) = canvas.selection() {
                ui.separator();
                ui.label(format!("Selection {}x{}", region.width(), region.height()));
            }
            ui.separator();
            ui.label(app.status());
        });
    });
}

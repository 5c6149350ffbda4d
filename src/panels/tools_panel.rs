use egui::{Color32, Slider};

use crate::PaintApp;
use crate::tools::ToolKind;

/// Quick-pick colors under the color button
const PALETTE: [[u8; 4]; 12] = [
    [0, 0, 0, 255],
    [127, 127, 127, 255],
    [255, 255, 255, 255],
    [237, 28, 36, 255],
    [255, 127, 39, 255],
    [255, 242, 0, 255],
    [34, 177, 76, 255],
    [0, 162, 232, 255],
    [63, 72, 204, 255],
    [163, 73, 164, 255],
    [185, 122, 87, 255],
    [255, 174, 201, 255],
];

fn to_color32(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let settings = app.settings_mut();
            for tool in ToolKind::ALL {
                if ui.selectable_value(&mut settings.tool, tool, tool.label()).clicked() {
                    log::info!("Tool selected from UI: {:?}", tool);
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = to_color32(settings.color);
                if ui.color_edit_button_srgba(&mut color).changed() {
                    settings.color = color.to_srgba_unmultiplied();
                }
            });
            egui::Grid::new("palette_grid").spacing([2.0, 2.0]).show(ui, |ui| {
                for (i, rgba) in PALETTE.iter().enumerate() {
                    let swatch = egui::Button::new("").fill(to_color32(*rgba)).min_size(egui::vec2(18.0, 18.0));
                    if ui.add(swatch).clicked() {
                        settings.color = *rgba;
                    }
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });

            ui.add_enabled_ui(settings.tool.uses_width(), |ui| {
                ui.horizontal(|ui| {
                    ui.label("Width:");
                    ui.add(Slider::new(&mut settings.width, 1..=50));
                });
            });
            ui.separator();

            ui.horizontal(|ui| {
                let canvas = app.editor().canvas();
                let (can_undo, can_redo) = (canvas.can_undo(), canvas.can_redo());

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Copy").clicked() {
                    app.copy_selection();
                }
                if ui.button("Clear").clicked() {
                    app.clear_canvas();
                }
            });
            ui.separator();

            let canvas = app.editor().canvas();
            ui.label(format!("Drawables: {}", canvas.drawables().len()));
            ui.label(format!("Redo stack: {}", canvas.redo_len()));
            ui.label(format!("Last render: {:.1} ms", canvas.last_render().as_secs_f64() * 1000.0));
            if let Some(clip) = app.editor().clipboard() {
                ui.label(format!("Clipboard: {}x{}", clip.width(), clip.height()));
            }
        });
}

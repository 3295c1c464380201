use crate::app::McadApp;

pub fn show(ctx: &egui::Context, app: &mut McadApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed at 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));
            ui.separator();
            let imaging = &app.analysis.imaging;
            ui.label(format!(
                "FOV: {:.2}° x {:.2}°",
                imaging.fov.x_rad.to_degrees(),
                imaging.fov.y_rad.to_degrees()
            ));
            ui.separator();
            ui.label(format!(
                "Sensor: {}x{} px",
                imaging.resolution.width_px, imaging.resolution.height_px
            ));
        });

        ui.add_space(2.0);
    });
}

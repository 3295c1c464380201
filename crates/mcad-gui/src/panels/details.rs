use mcad_core::units::format_length;

use crate::app::McadApp;
use crate::panels::section_header;
use crate::states::DetailsTab;

const PANEL_WIDTH: f32 = 360.0;

pub fn show(ctx: &egui::Context, app: &mut McadApp) {
    egui::SidePanel::right("details")
        .default_width(PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.selectable_value(&mut app.ui_state.details_tab, DetailsTab::Metadata, "Metadata");
                ui.selectable_value(&mut app.ui_state.details_tab, DetailsTab::Analysis, "Crater Analysis");
            });
            ui.separator();

            match app.ui_state.details_tab {
                DetailsTab::Metadata => metadata_tab(ui, app),
                DetailsTab::Analysis => analysis_tab(ui, app),
            }
        });
}

fn metadata_tab(ui: &mut egui::Ui, app: &mut McadApp) {
    if app.ui_state.metadata.is_none() {
        ui.label(egui::RichText::new("No metadata loaded").weak());
        return;
    }
    egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
        // Read-only view; the &str buffer discards edits.
        let mut text = app.ui_state.metadata_text.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );
    });
}

fn analysis_tab(ui: &mut egui::Ui, app: &mut McadApp) {
    section_header(ui, "Camera Position (m)", None);
    ui.add(
        egui::TextEdit::singleline(&mut app.analysis.cam_pos_input)
            .hint_text("x, y, z")
            .desired_width(f32::INFINITY),
    );

    let has_metadata = app.ui_state.metadata.is_some();
    if ui
        .add_enabled(has_metadata, egui::Button::new("Auto-fill from Metadata"))
        .clicked()
    {
        if let Some(ref metadata) = app.ui_state.metadata {
            if let Err(e) = app.analysis.fill_from_metadata(metadata) {
                app.analysis.input_error = Some(e.to_string());
            }
        }
    }

    ui.add_space(8.0);
    section_header(ui, "Crater Pixel Diameter", None);
    ui.add(
        egui::TextEdit::singleline(&mut app.analysis.pixel_diameter_input)
            .hint_text("pixels")
            .desired_width(f32::INFINITY),
    );

    ui.add_space(8.0);
    let button = egui::Button::new("Compute Crater Size").min_size(egui::vec2(ui.available_width(), 28.0));
    if ui.add(button).clicked() {
        app.analysis.compute();
    }

    if let Some(ref err) = app.analysis.input_error {
        ui.add_space(4.0);
        ui.colored_label(egui::Color32::from_rgb(230, 90, 90), err);
    }

    if let Some(ref report) = app.analysis.report {
        ui.add_space(8.0);
        ui.separator();
        section_header(ui, "Results", Some(&format!("{} px", report.pixel_diameter)));
        egui::Grid::new("crater_results")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label("Camera altitude");
                ui.monospace(format_length(report.altitude_m));
                ui.end_row();
                ui.label("Image width");
                ui.monospace(format_length(report.footprint_width_m));
                ui.end_row();
                ui.label("Image height");
                ui.monospace(format_length(report.footprint_height_m));
                ui.end_row();
                ui.label("Crater diameter");
                ui.strong(format_length(report.crater_diameter_m));
                ui.end_row();
            });
    }
}

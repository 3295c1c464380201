use crate::app::McadApp;
use crate::panels::section_header;

const PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut McadApp) {
    egui::SidePanel::left("browser")
        .default_width(PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            data_dir_section(ui, app);
            ui.separator();
            folder_section(ui, app);
            ui.add_space(8.0);
            image_section(ui, app);
        });
}

fn data_dir_section(ui: &mut egui::Ui, app: &McadApp) {
    section_header(ui, "Data Directory", None);
    match app.ui_state.data_dir {
        Some(ref dir) => {
            ui.label(egui::RichText::new(dir.display().to_string()).monospace().small());
        }
        None => {
            ui.label(egui::RichText::new("None (File > Open Data Directory)").weak());
        }
    }
}

fn folder_section(ui: &mut egui::Ui, app: &mut McadApp) {
    let count = format!("{}", app.ui_state.folders.len());
    section_header(ui, "Folder", Some(&count));

    let mut selected = app.ui_state.selected_folder.clone();
    ui.add_enabled_ui(!app.ui_state.folders.is_empty(), |ui| {
        egui::ComboBox::from_id_salt("folder_select")
            .width(ui.available_width())
            .selected_text(selected.as_deref().unwrap_or("Select a folder"))
            .show_ui(ui, |ui| {
                for folder in &app.ui_state.folders {
                    ui.selectable_value(&mut selected, Some(folder.clone()), folder);
                }
            });
    });

    if selected != app.ui_state.selected_folder {
        app.ui_state.selected_folder = selected.clone();
        app.ui_state.images.clear();
        app.ui_state.selected_image = None;
        if let Some(folder) = selected {
            app.list_images(folder);
        }
    }
}

fn image_section(ui: &mut egui::Ui, app: &mut McadApp) {
    // Only offer images that belong to the selected folder.
    let listed = app.ui_state.images_folder.is_some()
        && app.ui_state.images_folder == app.ui_state.selected_folder;
    let count = if listed {
        format!("{}", app.ui_state.images.len())
    } else {
        String::new()
    };
    section_header(ui, "Image", Some(&count));

    let mut selected = app.ui_state.selected_image.clone();
    ui.add_enabled_ui(listed && !app.ui_state.images.is_empty(), |ui| {
        egui::ComboBox::from_id_salt("image_select")
            .width(ui.available_width())
            .selected_text(selected.as_deref().unwrap_or("Select an image"))
            .show_ui(ui, |ui| {
                for file in &app.ui_state.images {
                    ui.selectable_value(&mut selected, Some(file.clone()), file);
                }
            });
    });
    app.ui_state.selected_image = selected;

    ui.add_space(8.0);

    let target = match (&app.ui_state.selected_folder, &app.ui_state.selected_image) {
        (Some(folder), Some(file)) if listed => Some((folder.clone(), file.clone())),
        _ => None,
    };
    let enabled = target.is_some() && !app.ui_state.is_busy();
    let button = egui::Button::new("Load Image & Data").min_size(egui::vec2(ui.available_width(), 28.0));
    if ui.add_enabled(enabled, button).clicked() {
        if let Some((folder, file)) = target {
            app.load_image(folder, file);
        }
    }

    if let Some(ref busy) = app.ui_state.busy {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(busy);
        });
    }

    if let Some((ref folder, ref file)) = app.ui_state.loaded_image {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!("Showing {folder}/{file}")).small());
    }
}

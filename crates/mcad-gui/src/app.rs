use std::sync::mpsc;

use mcad_core::config::AppConfig;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{AnalysisState, DetailsTab, UIState, ViewportState};
use crate::worker;

pub struct McadApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub analysis: AnalysisState,
    pub config: AppConfig,
    pub show_about: bool,
}

impl McadApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        let config = AppConfig::default();
        let mut app = Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            analysis: AnalysisState {
                imaging: config.imaging,
                ..Default::default()
            },
            config,
            show_about: false,
        };

        let data_dir = app.config.resolve_data_dir(None);
        if data_dir.is_dir() {
            app.open_data_dir(data_dir);
        }
        app
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Folders { root, folders } => {
                    self.ui_state.busy = None;
                    self.ui_state.add_log(format!(
                        "Opened: {} ({} folders)",
                        root.display(),
                        folders.len()
                    ));
                    self.ui_state.clear_selection();
                    self.ui_state.data_dir = Some(root);
                    self.ui_state.folders = folders;
                }
                WorkerResult::Images { folder, files } => {
                    self.ui_state.busy = None;
                    self.ui_state.images = files;
                    self.ui_state.images_folder = Some(folder);
                    self.ui_state.selected_image = self.ui_state.images.first().cloned();
                }
                WorkerResult::ImageLoaded {
                    folder,
                    file,
                    image,
                    elapsed,
                } => {
                    self.ui_state.add_log(format!(
                        "Loaded {folder}/{file} ({}x{}, {})",
                        image.size[0],
                        image.size[1],
                        format_duration(elapsed)
                    ));
                    self.update_viewport_texture(ctx, image, &format!("{folder}/{file}"));
                    self.analysis.clear_for_new_image();
                    self.ui_state.loaded_image = Some((folder, file));
                }
                WorkerResult::MetadataLoaded { metadata } => {
                    self.ui_state.busy = None;
                    self.ui_state.metadata_text = metadata
                        .as_ref()
                        .map(|m| m.pretty())
                        .unwrap_or_default();
                    if metadata.is_some() {
                        self.ui_state.details_tab = DetailsTab::Metadata;
                    }
                    self.ui_state.metadata = metadata;
                }
                WorkerResult::ConfigImported { config } => {
                    self.analysis.imaging = config.imaging;
                    self.analysis.report = None;
                    let data_dir = config.resolve_data_dir(None);
                    self.config = config;
                    self.open_data_dir(data_dir);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.busy = None;
                    tracing::warn!("{message}");
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context, image: egui::ColorImage, label: &str) {
        let size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.viewing_label = label.to_string();
        self.viewport.fit_pending = true;
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn open_data_dir(&mut self, path: std::path::PathBuf) {
        self.ui_state.busy = Some("Opening data directory".into());
        self.send_command(WorkerCommand::OpenDataDir { path });
    }

    pub fn list_images(&mut self, folder: String) {
        self.ui_state.busy = Some(format!("Listing {folder}"));
        self.send_command(WorkerCommand::ListImages { folder });
    }

    pub fn load_image(&mut self, folder: String, file: String) {
        self.ui_state.busy = Some(format!("Loading {file}"));
        self.send_command(WorkerCommand::LoadImage { folder, file });
    }
}

impl eframe::App for McadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::browser::show(ctx, self);
        panels::details::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About MCAD")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("MCAD");
                        ui.label("Multiscale Crater Analysis and Detection");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}

use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use mcad_core::catalog::DataCatalog;
use mcad_core::config::AppConfig;
use mcad_core::error::McadError;

use crate::convert::image_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("mcad-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut catalog: Option<DataCatalog> = None;

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::OpenDataDir { path } => {
                handle_open_data_dir(&path, &mut catalog, &tx, &ctx);
            }
            WorkerCommand::ListImages { folder } => match catalog {
                Some(ref c) => handle_list_images(c, folder, &tx, &ctx),
                None => send_error(&tx, &ctx, "No data directory open"),
            },
            WorkerCommand::LoadImage { folder, file } => match catalog {
                Some(ref c) => handle_load_image(c, folder, file, &tx, &ctx),
                None => send_error(&tx, &ctx, "No data directory open"),
            },
            WorkerCommand::ImportConfig { path } => {
                handle_import_config(&path, &tx, &ctx);
            }
        }
    }
}

fn handle_open_data_dir(
    path: &Path,
    catalog: &mut Option<DataCatalog>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let opened = DataCatalog::open(path).and_then(|c| {
        let folders = c.list_folders()?;
        Ok((c, folders))
    });
    match opened {
        Ok((c, folders)) => {
            tracing::info!(root = %path.display(), folders = folders.len(), "data directory opened");
            *catalog = Some(c);
            send(tx, ctx, WorkerResult::Folders {
                root: path.to_path_buf(),
                folders,
            });
        }
        Err(e) => send_error(tx, ctx, format!("Failed to open data directory: {e}")),
    }
}

fn handle_list_images(
    catalog: &DataCatalog,
    folder: String,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match catalog.list_png_files(&folder) {
        Ok(files) => {
            send_log(tx, ctx, format!("{folder}: {} images", files.len()));
            send(tx, ctx, WorkerResult::Images { folder, files });
        }
        Err(e) => send_error(tx, ctx, format!("Failed to list images: {e}")),
    }
}

fn handle_load_image(
    catalog: &DataCatalog,
    folder: String,
    file: String,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match catalog.load_image(&folder, &file) {
        Ok(img) => {
            let image = image_to_color_image(&img);
            send(tx, ctx, WorkerResult::ImageLoaded {
                folder: folder.clone(),
                file: file.clone(),
                image,
                elapsed: start.elapsed(),
            });
        }
        Err(e) => {
            send_error(tx, ctx, format!("Failed to load image: {e}"));
            return;
        }
    }

    match catalog.read_metadata(&folder, &file) {
        Ok(metadata) => send(tx, ctx, WorkerResult::MetadataLoaded {
            metadata: Some(metadata),
        }),
        Err(McadError::MetadataNotFound(path)) => {
            send_log(tx, ctx, format!("No metadata file: {}", path.display()));
            send(tx, ctx, WorkerResult::MetadataLoaded { metadata: None });
        }
        Err(e) => {
            send(tx, ctx, WorkerResult::MetadataLoaded { metadata: None });
            send_error(tx, ctx, format!("Failed to read metadata: {e}"));
        }
    }
}

fn handle_import_config(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match AppConfig::load(path) {
        Ok(config) => {
            send_log(tx, ctx, format!("Config imported from {}", path.display()));
            send(tx, ctx, WorkerResult::ConfigImported { config });
        }
        Err(e) => send_error(tx, ctx, format!("Failed to import config: {e}")),
    }
}

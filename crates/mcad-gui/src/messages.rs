use std::path::PathBuf;
use std::time::Duration;

use mcad_core::config::AppConfig;
use mcad_core::metadata::ImageMetadata;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Open a data tree and list its folders.
    OpenDataDir { path: PathBuf },

    /// List the PNG images of a folder in the open data tree.
    ListImages { folder: String },

    /// Decode an image and read its metadata.
    LoadImage { folder: String, file: String },

    /// Read, validate and apply a TOML config file.
    ImportConfig { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    Folders {
        root: PathBuf,
        folders: Vec<String>,
    },
    Images {
        folder: String,
        files: Vec<String>,
    },
    ImageLoaded {
        folder: String,
        file: String,
        image: egui::ColorImage,
        elapsed: Duration,
    },
    /// Metadata for the last loaded image; `None` when it has no metadata file.
    MetadataLoaded {
        metadata: Option<ImageMetadata>,
    },
    ConfigImported {
        config: AppConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}

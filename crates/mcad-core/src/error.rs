use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum McadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid {axis} field of view: {value} rad (must be in (0, pi))")]
    InvalidFieldOfView { axis: &'static str, value: f64 },

    #[error("Invalid sensor resolution: {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Crater pixel diameter must be a positive integer")]
    InvalidPixelDiameter,

    #[error("Non-finite {0} input")]
    NonFiniteInput(&'static str),

    #[error("Invalid camera position: {0}")]
    InvalidCameraPosition(String),

    #[error("Data directory not found: {}", .0.display())]
    DataDirNotFound(PathBuf),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Image not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("Metadata file not found: {}", .0.display())]
    MetadataNotFound(PathBuf),

    #[error("Invalid path component: {0:?}")]
    InvalidName(String),

    #[error("Metadata field missing or malformed: {0}")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, McadError>;

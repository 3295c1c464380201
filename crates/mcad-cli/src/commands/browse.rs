use anyhow::{Context, Result};
use clap::Args;
use mcad_core::catalog::ImagePair;
use mcad_core::config::ImagingConfig;
use mcad_core::geometry::{compute_crater_size_checked, FieldOfView};
use mcad_core::metadata::ImageMetadata;
use tracing::warn;

use crate::summary::print_crater_report;
use crate::Session;

#[derive(Args)]
pub struct ImagesArgs {
    /// Folder name, e.g. "Folder 001"
    pub folder: String,
}

#[derive(Args)]
pub struct MetadataArgs {
    /// Folder name, e.g. "Folder 001"
    pub folder: String,

    /// Image (or metadata) file name
    pub file: String,

    /// Also measure a crater of this many pixels using the image's camera position
    #[arg(long)]
    pub compute: Option<u32>,
}

pub fn run_folders(session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let folders = catalog.list_folders()?;
    if folders.is_empty() {
        eprintln!("No folders found in {}", catalog.root().display());
    }
    for folder in folders {
        println!("{folder}");
    }
    Ok(())
}

pub fn run_images(args: &ImagesArgs, session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let files = catalog
        .list_png_files(&args.folder)
        .with_context(|| format!("Failed to list images in {}", args.folder))?;
    for file in files {
        println!("{file}");
    }
    Ok(())
}

/// Every image with a metadata file, across all folders.
pub fn run_pairs(session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let pairs = catalog.image_pairs()?;
    if pairs.is_empty() {
        eprintln!("No image/metadata pairs found in {}", catalog.root().display());
    }
    for pair in &pairs {
        println!("{}", format_pair(pair));
    }
    println!();
    println!("Total pairs: {}", pairs.len());
    Ok(())
}

fn format_pair(pair: &ImagePair) -> String {
    let json_name = pair
        .metadata_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}/{} -> {}", pair.folder, pair.png_file, json_name)
}

pub fn run_metadata(args: &MetadataArgs, session: &Session) -> Result<()> {
    let catalog = session.catalog()?;
    let metadata = catalog
        .read_metadata(&args.folder, &args.file)
        .with_context(|| format!("Failed to read metadata for {}/{}", args.folder, args.file))?;

    println!("{}", metadata.pretty());

    if let Some(pixel_diameter) = args.compute {
        let position = metadata.camera_position()?;
        let imaging = &session.config.imaging;
        if let Some(fov) = recorded_fov_mismatch(&metadata, imaging) {
            warn!(
                x_rad = fov.x_rad,
                y_rad = fov.y_rad,
                "image was taken with a different field of view than configured"
            );
            eprintln!(
                "Note: metadata FOV {:.4} x {:.4} rad differs from the configured one",
                fov.x_rad, fov.y_rad
            );
        }
        let report = compute_crater_size_checked(&position, imaging, pixel_diameter)?;
        print_crater_report(&report, imaging);
    }
    Ok(())
}

/// The field of view recorded in the metadata, if it differs from `imaging`.
fn recorded_fov_mismatch(metadata: &ImageMetadata, imaging: &ImagingConfig) -> Option<FieldOfView> {
    metadata.field_of_view().filter(|fov| *fov != imaging.fov)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_pair_shows_json_name() {
        let pair = ImagePair {
            folder: "Folder 001".into(),
            png_file: "a.png".into(),
            png_path: PathBuf::from("/data/Folder 001/a.png"),
            metadata_path: PathBuf::from("/data/Folder 001/a.json"),
        };
        assert_eq!(format_pair(&pair), "Folder 001/a.png -> a.json");
    }

    #[test]
    fn test_recorded_fov_mismatch() {
        let imaging = ImagingConfig::default();
        let same = ImageMetadata::from_json(&format!(
            r#"{{"FOV X (rad)": {}, "FOV Y (rad)": {}}}"#,
            imaging.fov.x_rad, imaging.fov.y_rad
        ))
        .unwrap();
        assert_eq!(recorded_fov_mismatch(&same, &imaging), None);

        let other = ImageMetadata::from_json(r#"{"FOV X (rad)": 0.5, "FOV Y (rad)": "0.4"}"#).unwrap();
        assert_eq!(
            recorded_fov_mismatch(&other, &imaging),
            Some(FieldOfView::new(0.5, 0.4))
        );

        let missing = ImageMetadata::from_json(r#"{"Cam Pos (m)": [1, 2, 3]}"#).unwrap();
        assert_eq!(recorded_fov_mismatch(&missing, &imaging), None);
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::DataCatalog;
use crate::config::ImagingConfig;
use crate::error::Result;
use crate::geometry::{compute_crater_size_checked, CraterSizeReport};

/// Outcome for one image of a batch run.
#[derive(Clone, Debug, Serialize)]
pub struct BatchEntry {
    pub file_name: String,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    Measured(CraterSizeReport),
    Failed(String),
}

impl BatchEntry {
    pub fn report(&self) -> Option<&CraterSizeReport> {
        match &self.outcome {
            BatchOutcome::Measured(r) => Some(r),
            BatchOutcome::Failed(_) => None,
        }
    }
}

/// Measure a crater of `pixel_diameter` pixels in every image of `folder`.
pub fn measure_folder(
    catalog: &DataCatalog,
    folder: &str,
    config: &ImagingConfig,
    pixel_diameter: u32,
) -> Result<Vec<BatchEntry>> {
    measure_folder_with_progress(catalog, folder, config, pixel_diameter, |_, _| {})
}

/// Like [`measure_folder`], calling `on_progress(done, total)` after each image.
///
/// Images are processed in parallel; the result keeps file name order.
/// Images whose metadata is missing or lacks a camera position produce a
/// [`BatchOutcome::Failed`] entry instead of aborting the run.
pub fn measure_folder_with_progress<F>(
    catalog: &DataCatalog,
    folder: &str,
    config: &ImagingConfig,
    pixel_diameter: u32,
    on_progress: F,
) -> Result<Vec<BatchEntry>>
where
    F: Fn(usize, usize) + Sync,
{
    let files = catalog.list_png_files(folder)?;
    let total = files.len();
    info!(folder, images = total, "measuring folder");

    let done = AtomicUsize::new(0);
    let entries: Vec<BatchEntry> = files
        .par_iter()
        .map(|file_name| {
            let outcome = match measure_one(catalog, folder, file_name, config, pixel_diameter) {
                Ok(report) => BatchOutcome::Measured(report),
                Err(e) => {
                    debug!(file_name, "skipping: {e}");
                    BatchOutcome::Failed(e.to_string())
                }
            };
            on_progress(done.fetch_add(1, Ordering::Relaxed) + 1, total);
            BatchEntry {
                file_name: file_name.clone(),
                outcome,
            }
        })
        .collect();

    Ok(entries)
}

fn measure_one(
    catalog: &DataCatalog,
    folder: &str,
    file_name: &str,
    config: &ImagingConfig,
    pixel_diameter: u32,
) -> Result<CraterSizeReport> {
    let metadata = catalog.read_metadata(folder, file_name)?;
    let position = metadata.camera_position()?;
    compute_crater_size_checked(&position, config, pixel_diameter)
}

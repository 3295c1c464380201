mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use mcad_core::batch::{measure_folder, measure_folder_with_progress, BatchOutcome};
use mcad_core::catalog::DataCatalog;
use mcad_core::config::ImagingConfig;
use mcad_core::geometry::{compute_crater_size, CameraPosition};

use common::{build_data_tree, SAMPLE_CAM_POS};

#[test]
fn test_measure_folder_order_and_values() {
    let dir = tempfile::tempdir().unwrap();
    build_data_tree(dir.path());
    let catalog = DataCatalog::open(dir.path()).unwrap();
    let config = ImagingConfig::default();

    let entries = measure_folder(&catalog, "Folder 001", &config, 50).unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.png", "b.png", "c.PNG"]);

    let expected = compute_crater_size(&CameraPosition::from(SAMPLE_CAM_POS), &config, 50);
    assert_eq!(entries[0].report(), Some(&expected));

    let b = entries[1].report().unwrap();
    assert_eq!(b.altitude_m, 5000.0);

    // c.PNG has no metadata file.
    assert!(matches!(&entries[2].outcome, BatchOutcome::Failed(msg) if msg.contains("not found")));
}

#[test]
fn test_measure_folder_missing_camera_position() {
    let dir = tempfile::tempdir().unwrap();
    build_data_tree(dir.path());
    let catalog = DataCatalog::open(dir.path()).unwrap();

    let entries = measure_folder(&catalog, "Folder 002", &ImagingConfig::default(), 10).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].report().is_none());
}

#[test]
fn test_measure_folder_zero_pixels_fails_each_entry() {
    let dir = tempfile::tempdir().unwrap();
    build_data_tree(dir.path());
    let catalog = DataCatalog::open(dir.path()).unwrap();

    let entries = measure_folder(&catalog, "Folder 001", &ImagingConfig::default(), 0).unwrap();
    assert!(entries.iter().all(|e| e.report().is_none()));
}

#[test]
fn test_progress_reaches_total() {
    let dir = tempfile::tempdir().unwrap();
    build_data_tree(dir.path());
    let catalog = DataCatalog::open(dir.path()).unwrap();

    let max_seen = AtomicUsize::new(0);
    let calls = AtomicUsize::new(0);
    let entries = measure_folder_with_progress(
        &catalog,
        "Folder 001",
        &ImagingConfig::default(),
        5,
        |done, total| {
            assert_eq!(total, 3);
            calls.fetch_add(1, Ordering::Relaxed);
            max_seen.fetch_max(done, Ordering::Relaxed);
        },
    )
    .unwrap();

    assert_eq!(calls.load(Ordering::Relaxed), entries.len());
    assert_eq!(max_seen.load(Ordering::Relaxed), entries.len());
}

#[test]
fn test_batch_entry_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    build_data_tree(dir.path());
    let catalog = DataCatalog::open(dir.path()).unwrap();

    let entries = measure_folder(&catalog, "Folder 001", &ImagingConfig::default(), 5).unwrap();
    let value = serde_json::to_value(&entries).unwrap();
    assert_eq!(value[0]["file_name"], "a.png");
    assert!(value[0]["measured"]["crater_diameter_m"].is_number());
    assert!(value[2]["failed"].is_string());
}

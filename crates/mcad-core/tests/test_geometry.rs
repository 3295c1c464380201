mod common;

use std::f64::consts::PI;
use std::num::NonZeroU32;

use approx::assert_relative_eq;

use mcad_core::config::ImagingConfig;
use mcad_core::consts::{DEFAULT_FOV_X, DEFAULT_FOV_Y};
use mcad_core::error::McadError;
use mcad_core::geometry::{
    compute_camera_altitude, compute_crater_size, compute_crater_size_checked,
    compute_image_footprint, crater_diameter_meters, meters_per_pixel, CameraPosition,
    FieldOfView,
};

use common::SAMPLE_CAM_POS;

fn px(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

// ---------------------------------------------------------------------------
// Altitude
// ---------------------------------------------------------------------------

#[test]
fn test_altitude_pythagorean() {
    assert_eq!(CameraPosition::new(3.0, 4.0, 0.0).altitude(), 5.0);
    assert_eq!(CameraPosition::new(4.0, 3.0, 0.0).altitude(), 5.0);
    assert_eq!(CameraPosition::new(0.0, 0.0, 5.0).altitude(), 5.0);
}

#[test]
fn test_altitude_invariant_under_negation() {
    let p = CameraPosition::new(1.5, -2.25, 7.0);
    let n = CameraPosition::new(-1.5, 2.25, -7.0);
    assert_eq!(p.altitude(), n.altitude());
}

#[test]
fn test_altitude_zero_only_at_origin() {
    assert_eq!(CameraPosition::ORIGIN.altitude(), 0.0);
    assert!(CameraPosition::new(1e-300, 0.0, 0.0).altitude() >= 0.0);
    assert!(CameraPosition::new(0.0, -1.0, 0.0).altitude() > 0.0);
}

#[test]
fn test_altitude_is_body_center_distance() {
    // No lunar radius is subtracted.
    let alt = compute_camera_altitude(&CameraPosition::new(1_737_400.0, 0.0, 0.0));
    assert_eq!(alt, 1_737_400.0);
}

// ---------------------------------------------------------------------------
// Footprint
// ---------------------------------------------------------------------------

#[test]
fn test_footprint_zero_altitude() {
    let fp = compute_image_footprint(0.0, &FieldOfView::default());
    assert_eq!(fp.width_m, 0.0);
    assert_eq!(fp.height_m, 0.0);
}

#[test]
fn test_footprint_right_angle() {
    // tan(45 deg) = 1, so the footprint is twice the altitude.
    let fp = compute_image_footprint(100.0, &FieldOfView::new(PI / 2.0, PI / 2.0));
    assert_relative_eq!(fp.width_m, 200.0, epsilon = 1e-9);
    assert_relative_eq!(fp.height_m, 200.0, epsilon = 1e-9);
}

#[test]
fn test_footprint_scales_linearly_with_altitude() {
    let fov = FieldOfView::default();
    for h in [1.0, 250.0, 3.5e6] {
        let a = compute_image_footprint(h, &fov);
        let b = compute_image_footprint(2.0 * h, &fov);
        assert_relative_eq!(b.width_m, 2.0 * a.width_m, max_relative = 1e-12);
        assert_relative_eq!(b.height_m, 2.0 * a.height_m, max_relative = 1e-12);
    }
}

#[test]
fn test_footprint_monotonic_in_angle() {
    let narrow = compute_image_footprint(1000.0, &FieldOfView::new(0.1, 0.1));
    let wide = compute_image_footprint(1000.0, &FieldOfView::new(0.2, 0.3));
    assert!(wide.width_m > narrow.width_m);
    assert!(wide.height_m > narrow.height_m);
}

#[test]
fn test_footprint_axes_independent() {
    let fp = compute_image_footprint(1000.0, &FieldOfView::default());
    assert!(fp.width_m > fp.height_m, "FOV X is wider than FOV Y");
}

// ---------------------------------------------------------------------------
// Crater diameter
// ---------------------------------------------------------------------------

#[test]
fn test_crater_diameter_scale() {
    assert_eq!(meters_per_pixel(2592.0, px(2592)), 1.0);
    assert_eq!(crater_diameter_meters(50, 2592.0, px(2592)), 50.0);
}

#[test]
fn test_crater_diameter_linear_in_pixels() {
    let d1 = crater_diameter_meters(37, 12345.6, px(2592));
    let d2 = crater_diameter_meters(74, 12345.6, px(2592));
    assert_relative_eq!(d2, 2.0 * d1, max_relative = 1e-12);
}

#[test]
fn test_crater_diameter_zero_footprint() {
    assert_eq!(crater_diameter_meters(500, 0.0, px(2592)), 0.0);
}

// ---------------------------------------------------------------------------
// Composed pipeline
// ---------------------------------------------------------------------------

#[test]
fn test_reference_scenario() {
    let [x, y, z] = SAMPLE_CAM_POS;
    let config = ImagingConfig::default();
    let report = compute_crater_size(&CameraPosition::new(x, y, z), &config, 50);

    let altitude = (x * x + y * y + z * z).sqrt();
    let width = 2.0 * altitude * (DEFAULT_FOV_X / 2.0).tan();
    let height = 2.0 * altitude * (DEFAULT_FOV_Y / 2.0).tan();
    let diameter = 50.0 * (width / 2592.0);

    assert_eq!(report.altitude_m, altitude);
    assert_eq!(report.footprint_width_m, width);
    assert_eq!(report.footprint_height_m, height);
    assert_eq!(report.crater_diameter_m, diameter);

    assert_relative_eq!(report.altitude_m, 3_633_572.147714388, max_relative = 1e-12);
    assert_relative_eq!(report.footprint_width_m, 1_281_393.611985701, max_relative = 1e-12);
    assert_relative_eq!(report.crater_diameter_m, 24_718.240971946394, max_relative = 1e-12);
}

#[test]
fn test_degenerate_origin() {
    let config = ImagingConfig::default();
    for pixels in [1, 50, 10_000] {
        let report = compute_crater_size(&CameraPosition::ORIGIN, &config, pixels);
        assert_eq!(report.altitude_m, 0.0);
        assert_eq!(report.footprint_width_m, 0.0);
        assert_eq!(report.footprint_height_m, 0.0);
        assert_eq!(report.crater_diameter_m, 0.0);
    }
}

#[test]
fn test_pipeline_idempotent() {
    let config = ImagingConfig::default();
    let pos = CameraPosition::from(SAMPLE_CAM_POS);
    let a = compute_crater_size(&pos, &config, 123);
    let b = compute_crater_size(&pos, &config, 123);
    assert_eq!(a, b);
}

#[test]
fn test_pipeline_concurrent_callers_agree() {
    let config = ImagingConfig::default();
    let pos = CameraPosition::from(SAMPLE_CAM_POS);
    let expected = compute_crater_size(&pos, &config, 77);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || compute_crater_size(&pos, &config, 77)))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn test_checked_rejects_zero_pixels() {
    let err = compute_crater_size_checked(
        &CameraPosition::from(SAMPLE_CAM_POS),
        &ImagingConfig::default(),
        0,
    )
    .unwrap_err();
    assert!(matches!(err, McadError::InvalidPixelDiameter));
}

#[test]
fn test_checked_rejects_non_finite() {
    let err = compute_crater_size_checked(
        &CameraPosition::new(f64::NAN, 0.0, 0.0),
        &ImagingConfig::default(),
        10,
    )
    .unwrap_err();
    assert!(matches!(err, McadError::NonFiniteInput(_)));
}

#[test]
fn test_checked_allows_origin() {
    let report =
        compute_crater_size_checked(&CameraPosition::ORIGIN, &ImagingConfig::default(), 10)
            .unwrap();
    assert_eq!(report.crater_diameter_m, 0.0);
}

#[test]
fn test_report_json_field_names() {
    let report = compute_crater_size(&CameraPosition::new(3.0, 4.0, 0.0), &ImagingConfig::default(), 5);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["cam_pos"], serde_json::json!([3.0, 4.0, 0.0]));
    assert_eq!(value["pixel_diameter"], 5);
    assert_eq!(value["camera_altitude_m"], 5.0);
    assert!(value.get("image_width_m").is_some());
    assert!(value.get("image_height_m").is_some());
    assert!(value.get("crater_diameter_m").is_some());
}

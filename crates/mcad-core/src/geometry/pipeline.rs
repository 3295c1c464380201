use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ImagingConfig;
use crate::error::{McadError, Result};

use super::camera::CameraPosition;
use super::crater::crater_diameter_meters;
use super::footprint::compute_image_footprint;

/// Result of one crater size computation. All lengths in meters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CraterSizeReport {
    #[serde(rename = "cam_pos")]
    pub camera_position: CameraPosition,
    pub pixel_diameter: u32,
    #[serde(rename = "camera_altitude_m")]
    pub altitude_m: f64,
    #[serde(rename = "image_width_m")]
    pub footprint_width_m: f64,
    #[serde(rename = "image_height_m")]
    pub footprint_height_m: f64,
    pub crater_diameter_m: f64,
}

/// Altitude -> footprint -> crater diameter.
///
/// Pure and stateless. A camera at the body center degenerates to all-zero
/// outputs; a zero pixel diameter yields a zero crater. See
/// [`compute_crater_size_checked`] for the variant that rejects those inputs.
pub fn compute_crater_size(
    camera_position: &CameraPosition,
    config: &ImagingConfig,
    pixel_diameter: u32,
) -> CraterSizeReport {
    let altitude_m = camera_position.altitude();
    let footprint = compute_image_footprint(altitude_m, &config.fov);
    let crater_diameter_m = crater_diameter_meters(
        pixel_diameter,
        footprint.width_m,
        config.resolution.width_px,
    );

    CraterSizeReport {
        camera_position: *camera_position,
        pixel_diameter,
        altitude_m,
        footprint_width_m: footprint.width_m,
        footprint_height_m: footprint.height_m,
        crater_diameter_m,
    }
}

/// Same as [`compute_crater_size`], but rejects a zero pixel diameter and
/// non-finite camera coordinates.
pub fn compute_crater_size_checked(
    camera_position: &CameraPosition,
    config: &ImagingConfig,
    pixel_diameter: u32,
) -> Result<CraterSizeReport> {
    if pixel_diameter == 0 {
        return Err(McadError::InvalidPixelDiameter);
    }
    if !camera_position.is_finite() {
        return Err(McadError::NonFiniteInput("camera position"));
    }

    let report = compute_crater_size(camera_position, config, pixel_diameter);
    if report.altitude_m == 0.0 {
        debug!("camera at body center, crater size degenerates to zero");
    }
    Ok(report)
}

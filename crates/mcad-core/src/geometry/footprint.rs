use serde::{Deserialize, Serialize};

/// Angular coverage of the camera, in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOfView {
    /// Horizontal angle.
    pub x_rad: f64,
    /// Vertical angle.
    pub y_rad: f64,
}

impl FieldOfView {
    pub const fn new(x_rad: f64, y_rad: f64) -> Self {
        Self { x_rad, y_rad }
    }
}

/// Ground area covered by one image, in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageFootprint {
    pub width_m: f64,
    pub height_m: f64,
}

/// Extent covered by a single angle at the given altitude (pinhole model).
pub fn footprint_extent(altitude_m: f64, fov_rad: f64) -> f64 {
    2.0 * altitude_m * (fov_rad / 2.0).tan()
}

/// Width and height of the imaged area at `altitude_m`.
///
/// Each axis is computed independently as `2 * altitude * tan(fov / 2)`.
/// An altitude of 0 yields a zero footprint. Angles are taken as given;
/// values outside (0, pi) produce meaningless output rather than an error.
pub fn compute_image_footprint(altitude_m: f64, fov: &FieldOfView) -> ImageFootprint {
    ImageFootprint {
        width_m: footprint_extent(altitude_m, fov.x_rad),
        height_m: footprint_extent(altitude_m, fov.y_rad),
    }
}

use serde::{Deserialize, Serialize};

/// Camera position in a body-centered frame, in meters.
///
/// The origin is the center of the imaged body. Serialized as a plain
/// `[x, y, z]` array, matching the metadata files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct CameraPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CameraPosition {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the body center: `sqrt(x² + y² + z²)`.
    ///
    /// This is not height above the surface; no body radius is subtracted.
    /// Returns exactly 0.0 for the zero vector.
    pub fn altitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for CameraPosition {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<CameraPosition> for [f64; 3] {
    fn from(pos: CameraPosition) -> Self {
        pos.to_array()
    }
}

impl std::fmt::Display for CameraPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

/// Camera altitude above the body center, in meters.
pub fn compute_camera_altitude(position: &CameraPosition) -> f64 {
    position.altitude()
}

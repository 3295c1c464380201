use std::f64::consts::PI;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DATA_DIR_ENV, DEFAULT_DATA_DIR, DEFAULT_FOV_X, DEFAULT_FOV_Y, DEFAULT_IMAGE_HEIGHT_PX,
    DEFAULT_IMAGE_WIDTH_PX,
};
use crate::error::{McadError, Result};
use crate::geometry::FieldOfView;

/// Sensor size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorResolution {
    /// Horizontal resolution; the denominator of the meters-per-pixel scale.
    pub width_px: NonZeroU32,
    pub height_px: u32,
}

impl Default for SensorResolution {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_IMAGE_WIDTH_PX,
            height_px: DEFAULT_IMAGE_HEIGHT_PX,
        }
    }
}

impl Default for FieldOfView {
    fn default() -> Self {
        Self::new(DEFAULT_FOV_X, DEFAULT_FOV_Y)
    }
}

/// Fixed optical parameters of the imaging system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagingConfig {
    #[serde(default)]
    pub fov: FieldOfView,
    #[serde(default)]
    pub resolution: SensorResolution,
}

impl ImagingConfig {
    /// Reject angles outside (0, pi) and a zero sensor height.
    pub fn validate(&self) -> Result<()> {
        check_angle("horizontal", self.fov.x_rad)?;
        check_angle("vertical", self.fov.y_rad)?;
        if self.resolution.height_px == 0 {
            return Err(McadError::InvalidResolution {
                width: self.resolution.width_px.get(),
                height: self.resolution.height_px,
            });
        }
        Ok(())
    }
}

fn check_angle(axis: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value < PI {
        Ok(())
    } else {
        Err(McadError::InvalidFieldOfView { axis, value })
    }
}

/// Top-level configuration file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the image data tree.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub imaging: ImagingConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            imaging: ImagingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.imaging.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Data directory, in order: explicit override, `MCAD_DATA_DIR`, config.
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        if let Some(dir) = override_dir {
            return dir.to_path_buf();
        }
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => self.data_dir.clone(),
        }
    }
}

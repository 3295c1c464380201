use serde_json::Value;

use crate::consts::{CAM_POS_KEY, FOV_X_KEY, FOV_Y_KEY};
use crate::error::{McadError, Result};
use crate::geometry::{CameraPosition, FieldOfView};

/// Per-image metadata document, as stored next to each PNG.
///
/// The document is kept as raw JSON so that unknown keys survive for
/// display; typed accessors cover the keys the measurement needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageMetadata {
    raw: Value,
}

impl ImageMetadata {
    /// Wrap a parsed document. A JSON string holding a JSON document is
    /// unwrapped once.
    pub fn from_value(value: Value) -> Result<Self> {
        let raw = match value {
            Value::String(inner) => serde_json::from_str(&inner)?,
            other => other,
        };
        Ok(Self { raw })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Indented JSON for display.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }

    /// Camera position from `"Cam Pos (m)"`, given either as an array of
    /// three numbers or as a `"[x, y, z]"` string.
    pub fn camera_position(&self) -> Result<CameraPosition> {
        match self.raw.get(CAM_POS_KEY) {
            Some(Value::String(text)) => parse_camera_position(text),
            Some(Value::Array(items)) => {
                let values = items
                    .iter()
                    .map(number_or_numeric_string)
                    .collect::<Option<Vec<f64>>>()
                    .ok_or(McadError::MissingField(CAM_POS_KEY))?;
                camera_position_from_values(&values)
            }
            _ => Err(McadError::MissingField(CAM_POS_KEY)),
        }
    }

    pub fn fov_x(&self) -> Option<f64> {
        self.raw.get(FOV_X_KEY).and_then(number_or_numeric_string)
    }

    pub fn fov_y(&self) -> Option<f64> {
        self.raw.get(FOV_Y_KEY).and_then(number_or_numeric_string)
    }

    /// Both field-of-view angles, if the document carries them.
    pub fn field_of_view(&self) -> Option<FieldOfView> {
        Some(FieldOfView::new(self.fov_x()?, self.fov_y()?))
    }
}

fn number_or_numeric_string(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn camera_position_from_values(values: &[f64]) -> Result<CameraPosition> {
    match values {
        [x, y, z] if values.iter().all(|v| v.is_finite()) => Ok(CameraPosition::new(*x, *y, *z)),
        [_, _, _] => Err(McadError::InvalidCameraPosition(
            "coordinates must be finite".into(),
        )),
        _ => Err(McadError::InvalidCameraPosition(format!(
            "expected exactly three values (x, y, z), got {}",
            values.len()
        ))),
    }
}

/// Parse an operator-typed camera position such as
/// `"1890303.16, 1971386.84, 2396504.62"` or `"[1, 2, 3]"`.
pub fn parse_camera_position(text: &str) -> Result<CameraPosition> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    if inner.trim().is_empty() {
        return Err(McadError::InvalidCameraPosition("empty input".into()));
    }

    let values = inner
        .split(',')
        .map(|part| {
            part.trim().parse::<f64>().map_err(|_| {
                McadError::InvalidCameraPosition(format!(
                    "{:?} is not a number; use comma-separated values",
                    part.trim()
                ))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    camera_position_from_values(&values)
}

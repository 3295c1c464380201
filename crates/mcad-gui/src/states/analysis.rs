use mcad_core::config::ImagingConfig;
use mcad_core::error::McadError;
use mcad_core::geometry::{compute_crater_size_checked, CraterSizeReport};
use mcad_core::metadata::{parse_camera_position, ImageMetadata};

/// Editable inputs and last result of the crater analysis tab.
#[derive(Default)]
pub struct AnalysisState {
    pub cam_pos_input: String,
    pub pixel_diameter_input: String,
    pub imaging: ImagingConfig,
    pub report: Option<CraterSizeReport>,
    pub input_error: Option<String>,
}

impl AnalysisState {
    /// Fill the camera position field from image metadata.
    pub fn fill_from_metadata(&mut self, metadata: &ImageMetadata) -> Result<(), McadError> {
        let position = metadata.camera_position()?;
        self.cam_pos_input = position.to_string();
        self.input_error = None;
        Ok(())
    }

    /// Drop everything tied to the previous image. The pixel diameter is kept.
    pub fn clear_for_new_image(&mut self) {
        self.cam_pos_input.clear();
        self.report = None;
        self.input_error = None;
    }

    /// Validate the text inputs and run the size computation.
    pub fn compute(&mut self) {
        match self.try_compute() {
            Ok(report) => {
                tracing::debug!(crater_diameter_m = report.crater_diameter_m, "crater computed");
                self.report = Some(report);
                self.input_error = None;
            }
            Err(msg) => {
                self.report = None;
                self.input_error = Some(msg);
            }
        }
    }

    fn try_compute(&self) -> Result<CraterSizeReport, String> {
        let cam_pos = self.cam_pos_input.trim();
        let pixels = self.pixel_diameter_input.trim();
        if cam_pos.is_empty() || pixels.is_empty() {
            return Err("All fields must be filled in.".into());
        }

        let position = parse_camera_position(cam_pos).map_err(|e| e.to_string())?;
        let pixel_diameter: u32 = pixels
            .parse()
            .map_err(|_| "Crater pixel diameter must be a positive integer.".to_string())?;

        compute_crater_size_checked(&position, &self.imaging, pixel_diameter)
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_requires_both_fields() {
        let mut state = AnalysisState {
            cam_pos_input: "1, 2, 3".into(),
            ..Default::default()
        };
        state.compute();
        assert!(state.report.is_none());
        assert_eq!(state.input_error.as_deref(), Some("All fields must be filled in."));
    }

    #[test]
    fn test_compute_rejects_negative_pixels() {
        let mut state = AnalysisState {
            cam_pos_input: "1, 2, 3".into(),
            pixel_diameter_input: "-5".into(),
            ..Default::default()
        };
        state.compute();
        assert!(state.input_error.unwrap().contains("positive integer"));
    }

    #[test]
    fn test_compute_success_clears_error() {
        let mut state = AnalysisState {
            cam_pos_input: "[0, 3, 4]".into(),
            pixel_diameter_input: "50".into(),
            input_error: Some("stale".into()),
            ..Default::default()
        };
        state.compute();
        assert!(state.input_error.is_none());
        assert_eq!(state.report.unwrap().altitude_m, 5.0);
    }

    #[test]
    fn test_new_image_clears_previous_result() {
        let mut state = AnalysisState {
            cam_pos_input: "[0, 3, 4]".into(),
            pixel_diameter_input: "50".into(),
            ..Default::default()
        };
        state.compute();
        assert!(state.report.is_some());

        state.clear_for_new_image();
        assert!(state.report.is_none());
        assert!(state.cam_pos_input.is_empty());
        assert!(state.input_error.is_none());
        assert_eq!(state.pixel_diameter_input, "50");
    }

    #[test]
    fn test_fill_from_metadata() {
        let meta = ImageMetadata::from_json(r#"{"Cam Pos (m)": "[1.5, 2, 3]"}"#).unwrap();
        let mut state = AnalysisState::default();
        state.fill_from_metadata(&meta).unwrap();
        assert_eq!(state.cam_pos_input, "1.5, 2, 3");
    }
}

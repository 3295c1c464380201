use crate::consts::METERS_TO_MILES;

pub fn meters_to_miles(meters: f64) -> f64 {
    meters * METERS_TO_MILES
}

/// `"1234.57 m (0.7671 mi)"`.
pub fn format_length(meters: f64) -> String {
    format!("{:.2} m ({:.4} mi)", meters, meters_to_miles(meters))
}

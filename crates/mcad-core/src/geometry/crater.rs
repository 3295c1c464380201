use std::num::NonZeroU32;

/// Ground distance covered by one pixel column, in meters.
pub fn meters_per_pixel(footprint_width_m: f64, image_width_px: NonZeroU32) -> f64 {
    footprint_width_m / f64::from(image_width_px.get())
}

/// Physical crater diameter from its on-image size.
///
/// `pixel_diameter * (footprint_width_m / image_width_px)`. Linear in the
/// pixel diameter, and exactly 0.0 when the footprint width is 0.
pub fn crater_diameter_meters(
    pixel_diameter: u32,
    footprint_width_m: f64,
    image_width_px: NonZeroU32,
) -> f64 {
    f64::from(pixel_diameter) * meters_per_pixel(footprint_width_m, image_width_px)
}

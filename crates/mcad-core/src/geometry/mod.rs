//! Conversion of on-image crater sizes into physical sizes.
//!
//! Pipeline: camera position -> altitude -> image footprint ->
//! meters per pixel -> crater diameter.

pub mod camera;
pub mod crater;
pub mod footprint;
pub mod pipeline;

pub use camera::{compute_camera_altitude, CameraPosition};
pub use crater::{crater_diameter_meters, meters_per_pixel};
pub use footprint::{compute_image_footprint, footprint_extent, FieldOfView, ImageFootprint};
pub use pipeline::{compute_crater_size, compute_crater_size_checked, CraterSizeReport};

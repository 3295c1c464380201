use std::num::NonZeroU32;

/// Horizontal field of view of the survey camera, in radians (20 degrees).
pub const DEFAULT_FOV_X: f64 = 0.3490658503988659;

/// Vertical field of view of the survey camera, in radians.
pub const DEFAULT_FOV_Y: f64 = 0.27580511636453603;

/// Sensor width in pixels.
pub const DEFAULT_IMAGE_WIDTH_PX: NonZeroU32 = match NonZeroU32::new(2592) {
    Some(width) => width,
    None => panic!("sensor width must be non-zero"),
};

/// Sensor height in pixels.
pub const DEFAULT_IMAGE_HEIGHT_PX: u32 = 2048;

/// Statute miles per meter.
pub const METERS_TO_MILES: f64 = 0.000621371;

/// Directory name prefix of image folders inside the data tree.
pub const FOLDER_PREFIX: &str = "Folder";

/// Metadata key holding the body-centered camera position.
pub const CAM_POS_KEY: &str = "Cam Pos (m)";

/// Metadata key holding the horizontal field of view.
pub const FOV_X_KEY: &str = "FOV X (rad)";

/// Metadata key holding the vertical field of view.
pub const FOV_Y_KEY: &str = "FOV Y (rad)";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MCAD_DATA_DIR";

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 16;

/// Maximum password length, in characters.
pub const PASSWORD_MAX_LEN: usize = 64;

/// Characters accepted as the required special character of a password.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

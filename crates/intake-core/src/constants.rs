use glam::Vec3;

// Shared scene and interaction constants used by the web frontend.

// Camera transition
pub const ANIMATION_DURATION_SEC: f32 = 1.2; // fixed, linear

// Default framing when the pointer lands outside every region
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const DEFAULT_CAMERA_TARGET: Vec3 = Vec3::ZERO;

// Perspective
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Uniform scale applied to the loaded model after re-centering
pub const MODEL_SCALE: f32 = 3.5;

// Welcome modal
pub const WELCOME_SEEN_KEY: &str = "telth_welcome_seen";
pub const WELCOME_SEEN_VALUE: &str = "1";
pub const WELCOME_DELAY_MS: i32 = 60;

// Closing message defaults
pub const DEFAULT_PATIENT_NAME: &str = "Kawan";
pub const DEFAULT_APPOINTMENT_TIME: &str = "12:30";

pub use intake_core::*;

// Shaders bundled as string constants
pub static MODEL_WGSL: &str = include_str!("../../shaders/model.wgsl");

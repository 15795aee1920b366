// Web frontend tuning: DOM ids, asset location, lighting.

// Page elements (see index.html)
pub const CANVAS_ID: &str = "app-canvas";
pub const WELCOME_OVERLAY_ID: &str = "welcome-overlay";
pub const WELCOME_START_ID: &str = "welcome-start";
pub const WELCOME_CPF_ID: &str = "welcome_cpf";
pub const PANEL_ID: &str = "symptom-panel";
pub const CLOSING_OVERLAY_ID: &str = "closing-overlay";
pub const CLOSING_OK_ID: &str = "closing-ok";
pub const CLOSING_TITLE_ID: &str = "closing-title";
pub const CLOSING_BODY_ID: &str = "closing-body";

// Class toggled on overlays and the panel to hide them
pub const HIDDEN_CLASS: &str = "hidden";

// Body model, auto-centered and scaled after load
pub const MODEL_URL: &str = "/models/anatomy2.glb";

// Lighting: hemisphere (sky/ground) plus one directional key light
pub const HEMI_INTENSITY: f32 = 1.2;
pub const HEMI_SKY_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const HEMI_GROUND_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const KEY_LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 7.5]; // aimed at the origin
pub const KEY_LIGHT_INTENSITY: f32 = 0.8;

// Surface clear color behind the model
pub const CLEAR_COLOR: [f64; 3] = [0.96, 0.97, 0.98];

pub mod keyboard;
pub mod overlays;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use overlays::{schedule_welcome, wire_closing, wire_welcome};
pub use pointer::wire_canvas_pointerdown;

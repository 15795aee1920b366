use crate::core::ViewportRect;
use glam::Vec2;
use web_sys as web;

/// Canvas bounding client rect, in CSS pixels.
#[inline]
pub fn viewport_of(canvas: &web::HtmlCanvasElement) -> ViewportRect {
    let rect = canvas.get_bounding_client_rect();
    viewport_from_client_rect(rect.left(), rect.top(), rect.width(), rect.height())
}

#[inline]
pub fn viewport_from_client_rect(left: f64, top: f64, width: f64, height: f64) -> ViewportRect {
    ViewportRect::new(left as f32, top as f32, width as f32, height as f32)
}

/// Pointer client position as floats.
#[inline]
pub fn client_point(client_x: i32, client_y: i32) -> Vec2 {
    Vec2::new(client_x as f32, client_y as f32)
}

/// Normalized [0,1] viewport position of a client point, `None` for a
/// zero-size canvas.
#[inline]
pub fn pointer_uv(client: Vec2, viewport: ViewportRect) -> Option<Vec2> {
    viewport.normalize(client.x, client.y)
}

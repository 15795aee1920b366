use crate::dom;
use crate::input;
use crate::ui::{self, AppHandles};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas taps select a region or, outside every region, return home.
pub fn wire_canvas_pointerdown(canvas: &web::HtmlCanvasElement, app: AppHandles) {
    let canvas_for_rect = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let viewport = input::viewport_of(&canvas_for_rect);
        let client = input::client_point(ev.client_x(), ev.client_y());
        let transition = app
            .session
            .borrow_mut()
            .pointer_down(input::pointer_uv(client, viewport));
        if let Some(document) = dom::window_document() {
            ui::apply(&document, &app.session.borrow(), &transition);
        }
    }) as Box<dyn FnMut(web::PointerEvent)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

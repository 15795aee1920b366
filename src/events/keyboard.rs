use crate::core::IntakeKey;
use crate::dom;
use crate::ui::{self, AppHandles};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &AppHandles) {
    let Some(key) = IntakeKey::from_key(&ev.key()) else {
        return;
    };
    let transition = {
        let mut flags = app.flags.borrow_mut();
        app.session.borrow_mut().key_down(key, &mut *flags)
    };
    // Unconsumed keys keep their browser default (typing a space in a field).
    let Some(transition) = transition else {
        return;
    };
    ev.prevent_default();
    log::debug!("[keys] {:?} -> {:?}", key, transition);
    if let Some(document) = dom::window_document() {
        ui::apply(&document, &app.session.borrow(), &transition);
    }
}

pub fn wire_global_keydown(app: AppHandles) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &app);
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

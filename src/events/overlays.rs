//! Welcome and closing overlay controls.

use crate::constants::{
    CLOSING_OK_ID, CLOSING_OVERLAY_ID, WELCOME_CPF_ID, WELCOME_OVERLAY_ID, WELCOME_START_ID,
};
use crate::core::WELCOME_DELAY_MS;
use crate::dom;
use crate::overlay;
use crate::ui::{self, AppHandles};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn dismiss_welcome(app: &AppHandles) {
    let transition = {
        let mut flags = app.flags.borrow_mut();
        app.session.borrow_mut().dismiss_welcome(&mut *flags)
    };
    if let Some(document) = dom::window_document() {
        ui::apply(&document, &app.session.borrow(), &transition);
    }
}

fn dismiss_closing(app: &AppHandles) {
    let transition = app.session.borrow_mut().dismiss_closing();
    if let Some(document) = dom::window_document() {
        ui::apply(&document, &app.session.borrow(), &transition);
    }
}

/// True when the event landed on the overlay backdrop itself rather than on
/// the card inside it.
fn is_backdrop(ev: &web::Event, overlay_id: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.id() == overlay_id)
        .unwrap_or(false)
}

/// Show the welcome modal shortly after load, unless this browser session
/// already dismissed it.
pub fn schedule_welcome(app: AppHandles) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let shown = {
            let flags = app.flags.borrow();
            app.session.borrow_mut().show_welcome(&*flags)
        };
        log::info!("[welcome] shown={}", shown);
        if let (true, Some(document)) = (shown, dom::window_document()) {
            overlay::show_welcome(&document);
            dom::focus_by_id(&document, WELCOME_CPF_ID);
        }
    }) as Box<dyn FnMut()>);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        WELCOME_DELAY_MS,
    );
    closure.forget();
}

pub fn wire_welcome(document: &web::Document, app: AppHandles) {
    let app_start = app.clone();
    dom::add_click_listener(document, WELCOME_START_ID, move || dismiss_welcome(&app_start));

    if let Some(el) = document.get_element_by_id(WELCOME_OVERLAY_ID) {
        let app_backdrop = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if is_backdrop(&ev, WELCOME_OVERLAY_ID) {
                dismiss_welcome(&app_backdrop);
            }
        }) as Box<dyn FnMut(web::Event)>);
        _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(el) = document.get_element_by_id(WELCOME_CPF_ID) {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            let value = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .map(|el| dom::control_value(&el))
                .unwrap_or_default();
            app.session.borrow_mut().welcome_mut().set_cpf(value);
        }) as Box<dyn FnMut(web::Event)>);
        _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_closing(document: &web::Document, app: AppHandles) {
    let app_ok = app.clone();
    dom::add_click_listener(document, CLOSING_OK_ID, move || dismiss_closing(&app_ok));

    if let Some(el) = document.get_element_by_id(CLOSING_OVERLAY_ID) {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if is_backdrop(&ev, CLOSING_OVERLAY_ID) {
                dismiss_closing(&app);
            }
        }) as Box<dyn FnMut(web::Event)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}


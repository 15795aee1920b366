//! The symptom panel element: rendering and delegated control events.

use crate::constants::PANEL_ID;
use crate::core::SymptomForm;
use crate::dom;
use crate::markup::{self, PanelAction};
use crate::overlay;
use crate::ui::{self, AppHandles};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replace the panel contents with `form`, or hide it when there is none.
pub fn render(document: &web::Document, form: Option<&SymptomForm>, focus: Option<&str>) {
    let Some(el) = document.get_element_by_id(PANEL_ID) else {
        log::warn!("missing #{}", PANEL_ID);
        return;
    };
    match form {
        Some(form) => {
            el.set_inner_html(&markup::render_panel(form));
            overlay::show(document, PANEL_ID);
            if let Some(id) = focus {
                dom::focus_by_id(document, id);
            }
        }
        None => {
            overlay::hide(document, PANEL_ID);
            el.set_inner_html("");
        }
    }
}

/// One listener per event type on the panel root; controls are found by
/// their `data-action` attribute so re-rendering never needs re-wiring.
pub fn wire(document: &web::Document, app: AppHandles) {
    let Some(el) = document.get_element_by_id(PANEL_ID) else {
        log::warn!("missing #{}", PANEL_ID);
        return;
    };
    for event_type in ["click", "change", "input"] {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handle_event(&app, &ev);
        }) as Box<dyn FnMut(web::Event)>);
        _ = el.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn decode(ev: &web::Event) -> Option<PanelAction> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let control = target.closest("[data-action]").ok().flatten()?;
    let action = control.get_attribute("data-action")?;
    PanelAction::parse(
        &ev.type_(),
        &action,
        control.get_attribute("data-index").as_deref(),
        control.get_attribute("data-option").as_deref(),
        &dom::control_value(&control),
    )
}

fn handle_event(app: &AppHandles, ev: &web::Event) {
    let Some(action) = decode(ev) else {
        return;
    };
    log::debug!("[form] {:?}", action);
    let result = markup::apply_action(&mut app.session.borrow_mut(), action);
    match result {
        Ok(effect) => {
            if let Some(document) = dom::window_document() {
                ui::apply_effect(&document, &app.session.borrow(), &effect);
            }
        }
        Err(e) => log::warn!("[form] rejected: {}", e),
    }
}

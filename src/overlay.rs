use crate::constants::{
    CLOSING_BODY_ID, CLOSING_OVERLAY_ID, CLOSING_TITLE_ID, HIDDEN_CLASS, WELCOME_OVERLAY_ID,
};
use crate::core::ClosingMessage;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "true");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn show_welcome(document: &web::Document) {
    show(document, WELCOME_OVERLAY_ID);
}

pub fn hide_welcome(document: &web::Document) {
    hide(document, WELCOME_OVERLAY_ID);
}

/// Fill in the thank-you text and show the confirmation.
pub fn show_closing(document: &web::Document, message: &ClosingMessage) {
    set_text(document, CLOSING_TITLE_ID, &message.title());
    set_text(document, CLOSING_BODY_ID, &message.body());
    show(document, CLOSING_OVERLAY_ID);
}

pub fn hide_closing(document: &web::Document) {
    hide(document, CLOSING_OVERLAY_ID);
}

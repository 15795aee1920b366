//! Mirrors session transitions into the DOM.

use crate::constants::PANEL_ID;
use crate::core::{IntakeSession, Transition};
use crate::markup::{self, PanelEffect};
use crate::overlay;
use crate::panel;
use crate::storage::BrowserSession;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles every listener closes over.
#[derive(Clone)]
pub struct AppHandles {
    pub session: Rc<RefCell<IntakeSession>>,
    pub flags: Rc<RefCell<BrowserSession>>,
}

impl AppHandles {
    pub fn new(session: IntakeSession, flags: BrowserSession) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            flags: Rc::new(RefCell::new(flags)),
        }
    }
}

pub fn apply(document: &web::Document, session: &IntakeSession, transition: &Transition) {
    match transition {
        Transition::Ignored => {}
        Transition::RegionSelected { fresh_form, .. } => {
            if *fresh_form || overlay::is_hidden(document, PANEL_ID) {
                panel::render(document, session.form(), Some(&markup::item_id(0)));
            }
        }
        Transition::Deselected | Transition::FormClosed => {
            panel::render(document, None, None);
        }
        Transition::WelcomeDismissed => overlay::hide_welcome(document),
        Transition::ClosingOpened(_) => overlay::show_closing(document, session.closing_message()),
        Transition::ClosingDismissed => {
            overlay::hide_closing(document);
            panel::render(document, None, None);
        }
    }
}

pub fn apply_effect(document: &web::Document, session: &IntakeSession, effect: &PanelEffect) {
    match effect {
        PanelEffect::Rerender { focus } => panel::render(document, session.form(), focus.as_deref()),
        PanelEffect::Stored => {}
        PanelEffect::Transition(t) => apply(document, session, t),
    }
}

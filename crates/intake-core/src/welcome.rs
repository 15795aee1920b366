use crate::constants::{WELCOME_SEEN_KEY, WELCOME_SEEN_VALUE};
use std::collections::HashMap;

/// Per-tab key/value flags (the browser's `sessionStorage` on the web).
pub trait SessionFlags {
    fn get_flag(&self, key: &str) -> Option<String>;
    fn set_flag(&mut self, key: &str, value: &str);
}

impl SessionFlags for HashMap<String, String> {
    fn get_flag(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn set_flag(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Debug, Default)]
pub struct WelcomeConfig {
    /// Show the modal only once per browser session.
    pub once_per_session: bool,
}

/// Welcome / identification modal shown before the body map.
#[derive(Clone, Debug, Default)]
pub struct WelcomeState {
    config: WelcomeConfig,
    visible: bool,
    cpf: String,
}

impl WelcomeState {
    pub fn new(config: WelcomeConfig) -> Self {
        Self {
            config,
            visible: false,
            cpf: String::new(),
        }
    }

    pub fn config(&self) -> &WelcomeConfig {
        &self.config
    }

    pub fn should_show(&self, flags: &impl SessionFlags) -> bool {
        !(self.config.once_per_session
            && flags.get_flag(WELCOME_SEEN_KEY).as_deref() == Some(WELCOME_SEEN_VALUE))
    }

    /// Show unless already seen this session; returns the new visibility.
    pub fn show(&mut self, flags: &impl SessionFlags) -> bool {
        self.visible = self.should_show(flags);
        self.visible
    }

    /// Hide and remember the dismissal when configured. Returns false when
    /// the modal was not visible.
    pub fn dismiss(&mut self, flags: &mut impl SessionFlags) -> bool {
        if !self.visible {
            return false;
        }
        if self.config.once_per_session {
            flags.set_flag(WELCOME_SEEN_KEY, WELCOME_SEEN_VALUE);
        }
        self.visible = false;
        log::info!("[welcome] dismissed");
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn set_cpf(&mut self, cpf: impl Into<String>) {
        self.cpf = cpf.into();
    }
}

use crate::core::SessionFlags;
use web_sys as web;

/// `sessionStorage`-backed flags. When storage is unavailable (some privacy
/// modes) reads miss and writes are dropped.
pub struct BrowserSession {
    storage: Option<web::Storage>,
}

impl BrowserSession {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[welcome] sessionStorage unavailable");
        }
        Self { storage }
    }
}

impl SessionFlags for BrowserSession {
    fn get_flag(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_flag(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            _ = storage.set_item(key, value);
        }
    }
}

/// Keys the intake overlays react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakeKey {
    Escape,
    Enter,
    Space,
}

impl IntakeKey {
    /// Map a `KeyboardEvent.key` value.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Escape),
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_browser_key_names() {
        assert_eq!(IntakeKey::from_key("Escape"), Some(IntakeKey::Escape));
        assert_eq!(IntakeKey::from_key("Esc"), Some(IntakeKey::Escape));
        assert_eq!(IntakeKey::from_key("Enter"), Some(IntakeKey::Enter));
        assert_eq!(IntakeKey::from_key(" "), Some(IntakeKey::Space));
        assert_eq!(IntakeKey::from_key("Spacebar"), Some(IntakeKey::Space));
        assert_eq!(IntakeKey::from_key("a"), None);
        assert_eq!(IntakeKey::from_key("Tab"), None);
    }
}

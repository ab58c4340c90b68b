//! Persisted user settings abstraction.

use crate::render::Language;

/// User-tunable settings that should survive restart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PersistedSettings {
    pub language: Language,
    pub auto_update: bool,
}

impl PersistedSettings {
    pub const fn new(language: Language, auto_update: bool) -> Self {
        Self {
            language,
            auto_update,
        }
    }
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self::new(Language::English, true)
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    fn load(&mut self) -> Result<Option<PersistedSettings>, Self::Error>;
    fn save(&mut self, settings: &PersistedSettings) -> Result<(), Self::Error>;
}

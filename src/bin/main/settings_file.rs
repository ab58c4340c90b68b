use std::{fs, io, path::PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use smartlearn_core::{
    render::Language,
    settings::{PersistedSettings, SettingsStore},
};

#[derive(Debug, thiserror::Error)]
pub(super) enum SettingsFileError {
    #[error("no platform config directory")]
    NoConfigDir,
    #[error("settings io: {0}")]
    Io(#[from] io::Error),
    #[error("settings encode: {0}")]
    Encode(#[from] ron::Error),
    #[error("settings decode: {0}")]
    Decode(#[from] ron::error::SpannedError),
}

/// On-disk settings document. Kept separate from the core type so the
/// file format can evolve without touching the state machine.
#[derive(Debug, Deserialize, Serialize)]
struct SettingsFile {
    language: String,
    auto_update: bool,
}

impl From<&PersistedSettings> for SettingsFile {
    fn from(settings: &PersistedSettings) -> Self {
        Self {
            language: match settings.language {
                Language::English => "english".to_owned(),
                Language::Turkish => "turkish".to_owned(),
            },
            auto_update: settings.auto_update,
        }
    }
}

impl SettingsFile {
    fn to_persisted(&self) -> PersistedSettings {
        // Unrecognized language tags fall back to the default.
        let language = match self.language.as_str() {
            "turkish" => Language::Turkish,
            _ => Language::English,
        };
        PersistedSettings::new(language, self.auto_update)
    }
}

/// RON file under the platform config directory.
pub(super) struct RonSettingsStore {
    path: PathBuf,
}

impl RonSettingsStore {
    pub(super) fn open() -> Result<Self, SettingsFileError> {
        let dir = dirs::config_dir()
            .ok_or(SettingsFileError::NoConfigDir)?
            .join("smartlearn");
        fs::create_dir_all(&dir)?;
        let path = dir.join("settings.ron");
        debug!("settings file: {}", path.display());
        Ok(Self { path })
    }
}

impl SettingsStore for RonSettingsStore {
    type Error = SettingsFileError;

    fn load(&mut self) -> Result<Option<PersistedSettings>, Self::Error> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let file: SettingsFile = ron::from_str(&text)?;
        Ok(Some(file.to_persisted()))
    }

    fn save(&mut self, settings: &PersistedSettings) -> Result<(), Self::Error> {
        let text = ron::ser::to_string_pretty(
            &SettingsFile::from(settings),
            ron::ser::PrettyConfig::default(),
        )?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

use log::warn;
use smartlearn_core::settings::{PersistedSettings, SettingsStore};

use super::SETTINGS_SAVE_DEBOUNCE_MS;
use super::settings_file::RonSettingsStore;

/// Debounced settings writer: edits made in quick succession collapse
/// into a single save.
pub(super) struct SettingsSyncState {
    last_saved: PersistedSettings,
    pending: Option<(PersistedSettings, u64)>,
}

impl SettingsSyncState {
    pub(super) fn new(initial: PersistedSettings) -> Self {
        Self {
            last_saved: initial,
            pending: None,
        }
    }

    pub(super) fn track_current(&mut self, current: PersistedSettings, now_ms: u64) {
        if current == self.last_saved {
            return;
        }

        match self.pending.as_mut() {
            Some((pending, changed_at_ms)) => {
                if *pending != current {
                    *pending = current;
                    *changed_at_ms = now_ms;
                }
            }
            None => {
                self.pending = Some((current, now_ms));
            }
        }
    }

    pub(super) fn flush_if_due(&mut self, store: Option<&mut RonSettingsStore>, now_ms: u64) {
        let Some((candidate, changed_at_ms)) = self.pending else {
            return;
        };

        if now_ms.saturating_sub(changed_at_ms) < SETTINGS_SAVE_DEBOUNCE_MS {
            return;
        }

        match store {
            Some(store) => match store.save(&candidate) {
                Ok(()) => {
                    self.last_saved = candidate;
                    self.pending = None;
                }
                Err(err) => {
                    // Keep the change pending and retry on a later flush.
                    warn!("settings save failed, retrying: {err}");
                    self.pending = Some((candidate, now_ms));
                }
            },
            None => {
                self.last_saved = candidate;
                self.pending = None;
            }
        }
    }
}

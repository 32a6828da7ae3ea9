//! Settings store
//!
//! Four independent booleans, each with its own key and default. There is
//! no cross-field invariant; each is read and written on its own.

use crate::data::storage::KvBackend;
use crate::error::Result;
use std::sync::Arc;

const NOTIFICATIONS_KEY: &str = "settings.notifications";
const PUSH_KEY: &str = "settings.push";
const VIBRATION_KEY: &str = "settings.vibration";
const SOUND_EFFECTS_KEY: &str = "settings.soundEffects";

/// The user-facing boolean settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Notifications,
    Push,
    Vibration,
    SoundEffects,
}

impl Toggle {
    pub const ALL: [Toggle; 4] = [
        Toggle::Notifications,
        Toggle::Push,
        Toggle::Vibration,
        Toggle::SoundEffects,
    ];

    /// Storage key for this toggle
    pub fn key(self) -> &'static str {
        match self {
            Toggle::Notifications => NOTIFICATIONS_KEY,
            Toggle::Push => PUSH_KEY,
            Toggle::Vibration => VIBRATION_KEY,
            Toggle::SoundEffects => SOUND_EFFECTS_KEY,
        }
    }

    /// Value reported when nothing has been stored yet
    pub fn default_on(self) -> bool {
        matches!(self, Toggle::Notifications | Toggle::SoundEffects)
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Toggle::Notifications => "Notifications",
            Toggle::Push => "Push",
            Toggle::Vibration => "Vibration",
            Toggle::SoundEffects => "Sound Effects",
        }
    }
}

/// Boolean settings over the shared backend
pub struct SettingsStore {
    backend: Arc<dyn KvBackend>,
}

impl SettingsStore {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self { backend }
    }

    /// Current value, falling back to the toggle's default when unset
    pub fn get(&self, toggle: Toggle) -> Result<bool> {
        Ok(self
            .backend
            .get_bool(toggle.key())?
            .unwrap_or(toggle.default_on()))
    }

    pub fn set(&self, toggle: Toggle, value: bool) -> Result<()> {
        self.backend.set_bool(toggle.key(), value)
    }
}

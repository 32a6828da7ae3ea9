//! Data persistence
//!
//! The preference store: favorites, profile, settings, and the onboarding
//! flag, all over one shared durable key-value backend.

pub mod favorites;
pub mod onboarding;
pub mod profile;
pub mod settings;
pub mod storage;

pub use favorites::Favorites;
pub use onboarding::Onboarding;
pub use profile::{Profile, ProfileStore};
pub use settings::{SettingsStore, Toggle};
pub use storage::{config_dir, data_path, ensure_config_dir, JsonFileBackend, KvBackend};

use crate::error::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// All preference namespaces over one shared backend
///
/// Constructed once at process start and passed by handle to whoever needs
/// it; there is no global instance.
pub struct Preferences {
    pub favorites: Favorites,
    pub profile: ProfileStore,
    pub settings: SettingsStore,
    pub onboarding: Onboarding,
}

impl Preferences {
    /// Open the store at the default per-user location
    pub fn open() -> Result<Self> {
        Ok(Self::with_backend(Arc::new(JsonFileBackend::open()?)))
    }

    /// Open the store at a specific file path
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_backend(Arc::new(JsonFileBackend::open_at(
            path,
        )?)))
    }

    /// Build the namespaces over an injected backend
    pub fn with_backend(backend: Arc<dyn KvBackend>) -> Self {
        Self {
            favorites: Favorites::new(backend.clone()),
            profile: ProfileStore::new(backend.clone()),
            settings: SettingsStore::new(backend.clone()),
            onboarding: Onboarding::new(backend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("wildatlas_prefs_test_{}.json", id))
    }

    #[test]
    fn test_namespaces_share_one_file() {
        let path = temp_path();

        {
            let prefs = Preferences::open_at(&path).unwrap();
            prefs.favorites.add("banff_canada").unwrap();
            prefs.profile.save(Some("Ada"), Some(2)).unwrap();
            prefs.settings.set(Toggle::Push, true).unwrap();
            prefs.onboarding.set_completed(true).unwrap();
        }

        {
            let prefs = Preferences::open_at(&path).unwrap();
            assert_eq!(prefs.favorites.ids().unwrap(), vec!["banff_canada"]);
            assert_eq!(prefs.profile.get().unwrap().display_name, "Ada");
            assert!(prefs.settings.get(Toggle::Push).unwrap());
            assert!(prefs.onboarding.has_completed().unwrap());
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_layout_uses_documented_keys() {
        let path = temp_path();

        let prefs = Preferences::open_at(&path).unwrap();
        prefs.favorites.add("banff_canada").unwrap();
        prefs.profile.save(Some("Ada"), Some(2)).unwrap();
        prefs.settings.set(Toggle::SoundEffects, false).unwrap();
        prefs.onboarding.set_completed(true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"favorites.reserveIds\""));
        assert!(content.contains("\"userProfile.displayName\""));
        assert!(content.contains("\"userProfile.avatarId\""));
        assert!(content.contains("\"settings.soundEffects\""));
        assert!(content.contains("\"hasCompletedOnboarding\""));

        let _ = fs::remove_file(&path);
    }
}

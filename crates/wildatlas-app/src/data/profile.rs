//! Profile store
//!
//! Display name and avatar id. Validation is handled by normalization and
//! substitution, never surfaced as an error: an empty name is stored as the
//! default literal, and an out-of-range avatar id is dropped on write but
//! substituted on read without rewriting the stored value.

use crate::config::profile::{AVATAR_ID_MAX, AVATAR_ID_MIN, DEFAULT_DISPLAY_NAME};
use crate::data::storage::KvBackend;
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard};

/// Storage keys for the profile fields
const DISPLAY_NAME_KEY: &str = "userProfile.displayName";
const AVATAR_ID_KEY: &str = "userProfile.avatarId";

/// A profile as callers see it, with normalization already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub avatar_id: i64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            avatar_id: AVATAR_ID_MIN,
        }
    }
}

/// The local user profile
pub struct ProfileStore {
    backend: Arc<dyn KvBackend>,
    guard: Mutex<()>,
}

impl ProfileStore {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self {
            backend,
            guard: Mutex::new(()),
        }
    }

    /// Stored profile with read-time normalization
    ///
    /// An out-of-range stored avatar id reads as the default; the raw
    /// stored value stays whatever it was.
    pub fn get(&self) -> Result<Profile> {
        let display_name = self
            .backend
            .get_string(DISPLAY_NAME_KEY)?
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());
        let avatar_id = self
            .backend
            .get_i64(AVATAR_ID_KEY)?
            .filter(|id| avatar_id_in_range(*id))
            .unwrap_or(AVATAR_ID_MIN);
        Ok(Profile {
            display_name,
            avatar_id,
        })
    }

    /// Save either field; `None` leaves the corresponding stored field untouched
    pub fn save(&self, display_name: Option<&str>, avatar_id: Option<i64>) -> Result<()> {
        let _guard = self.lock();
        if let Some(name) = display_name {
            self.write_display_name(name)?;
        }
        if let Some(id) = avatar_id {
            self.write_avatar_id(id)?;
        }
        Ok(())
    }

    pub fn save_display_name(&self, name: &str) -> Result<()> {
        let _guard = self.lock();
        self.write_display_name(name)
    }

    pub fn save_avatar_id(&self, id: i64) -> Result<()> {
        let _guard = self.lock();
        self.write_avatar_id(id)
    }

    /// Remove both fields, reverting subsequent reads to the defaults
    pub fn clear(&self) -> Result<()> {
        let _guard = self.lock();
        self.backend.remove(DISPLAY_NAME_KEY)?;
        self.backend.remove(AVATAR_ID_KEY)
    }

    fn write_display_name(&self, name: &str) -> Result<()> {
        let stored = if name.is_empty() {
            DEFAULT_DISPLAY_NAME
        } else {
            name
        };
        self.backend.set_string(DISPLAY_NAME_KEY, stored)
    }

    // Out-of-range ids are silently dropped, not clamped
    fn write_avatar_id(&self, id: i64) -> Result<()> {
        if avatar_id_in_range(id) {
            self.backend.set_i64(AVATAR_ID_KEY, id)?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.guard.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn avatar_id_in_range(id: i64) -> bool {
    (AVATAR_ID_MIN..=AVATAR_ID_MAX).contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::storage::JsonFileBackend;
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("wildatlas_profile_test_{}.json", id))
    }

    fn backend_at(path: &PathBuf) -> Arc<JsonFileBackend> {
        Arc::new(JsonFileBackend::open_at(path).unwrap())
    }

    #[test]
    fn test_defaults_on_fresh_store() {
        let path = temp_path();
        let profile = ProfileStore::new(backend_at(&path));

        assert_eq!(profile.get().unwrap(), Profile::default());
        assert_eq!(profile.get().unwrap().display_name, "Username");
        assert_eq!(profile.get().unwrap().avatar_id, 1);
    }

    #[test]
    fn test_save_both_fields() {
        let path = temp_path();
        let profile = ProfileStore::new(backend_at(&path));

        profile.save(Some("Ada"), Some(3)).unwrap();

        let p = profile.get().unwrap();
        assert_eq!(p.display_name, "Ada");
        assert_eq!(p.avatar_id, 3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_save_leaves_other_field() {
        let path = temp_path();
        let profile = ProfileStore::new(backend_at(&path));

        profile.save(Some("Ada"), Some(2)).unwrap();
        profile.save(None, Some(4)).unwrap();
        assert_eq!(profile.get().unwrap().display_name, "Ada");
        assert_eq!(profile.get().unwrap().avatar_id, 4);

        profile.save(Some("Grace"), None).unwrap();
        assert_eq!(profile.get().unwrap().display_name, "Grace");
        assert_eq!(profile.get().unwrap().avatar_id, 4);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_empty_name_stored_as_default_literal() {
        let path = temp_path();
        let backend = backend_at(&path);
        let profile = ProfileStore::new(backend.clone());

        profile.save(Some(""), None).unwrap();

        assert_eq!(profile.get().unwrap().display_name, "Username");
        // Normalization happens on write: the literal is what is stored
        assert_eq!(
            backend.get_string(DISPLAY_NAME_KEY).unwrap(),
            Some("Username".to_string())
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_out_of_range_avatar_not_stored() {
        let path = temp_path();
        let backend = backend_at(&path);
        let profile = ProfileStore::new(backend.clone());

        profile.save_avatar_id(2).unwrap();
        profile.save(None, Some(0)).unwrap();
        profile.save(None, Some(5)).unwrap();

        assert_eq!(profile.get().unwrap().avatar_id, 2);
        assert_eq!(backend.get_i64(AVATAR_ID_KEY).unwrap(), Some(2));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_out_of_range_stored_value_normalized_on_read_only() {
        let path = temp_path();
        let backend = backend_at(&path);
        let profile = ProfileStore::new(backend.clone());

        // Simulate a value written by something that skipped validation
        backend.set_i64(AVATAR_ID_KEY, 99).unwrap();

        assert_eq!(profile.get().unwrap().avatar_id, 1);
        // Reading did not rewrite the raw value
        assert_eq!(backend.get_i64(AVATAR_ID_KEY).unwrap(), Some(99));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_avatar_boundaries() {
        let path = temp_path();
        let profile = ProfileStore::new(backend_at(&path));

        profile.save_avatar_id(1).unwrap();
        assert_eq!(profile.get().unwrap().avatar_id, 1);

        profile.save_avatar_id(4).unwrap();
        assert_eq!(profile.get().unwrap().avatar_id, 4);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_clear_reverts_to_defaults() {
        let path = temp_path();
        let backend = backend_at(&path);
        let profile = ProfileStore::new(backend.clone());

        profile.save(Some("Ada"), Some(3)).unwrap();
        profile.clear().unwrap();

        assert_eq!(profile.get().unwrap(), Profile::default());
        assert_eq!(backend.get(DISPLAY_NAME_KEY).unwrap(), None);
        assert_eq!(backend.get(AVATAR_ID_KEY).unwrap(), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_survives_reopen() {
        let path = temp_path();

        {
            let profile = ProfileStore::new(backend_at(&path));
            profile.save(Some("Ada"), Some(2)).unwrap();
        }

        {
            let profile = ProfileStore::new(backend_at(&path));
            let p = profile.get().unwrap();
            assert_eq!(p.display_name, "Ada");
            assert_eq!(p.avatar_id, 2);
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unicode_display_name() {
        let path = temp_path();
        let profile = ProfileStore::new(backend_at(&path));

        profile.save_display_name("Наталія 🌿").unwrap();
        assert_eq!(profile.get().unwrap().display_name, "Наталія 🌿");

        let _ = fs::remove_file(&path);
    }
}

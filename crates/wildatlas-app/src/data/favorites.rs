//! Favorites store
//!
//! An ordered, duplicate-free list of reserve ids persisted under a single
//! key. Insertion order is what the favorites screen displays.

use crate::data::storage::KvBackend;
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard};
use wildatlas::catalog::{CatalogSource, Reserve};

/// Storage key for the favorite reserve ids
const FAVORITE_IDS_KEY: &str = "favorites.reserveIds";

/// User-chosen favorite reserves
///
/// Every read-modify-write sequence runs under a namespace lock, so two
/// interleaved toggles (rapid double-tap) never lose an update.
pub struct Favorites {
    backend: Arc<dyn KvBackend>,
    guard: Mutex<()>,
}

impl Favorites {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self {
            backend,
            guard: Mutex::new(()),
        }
    }

    /// Favorite ids in insertion order; empty if never written
    pub fn ids(&self) -> Result<Vec<String>> {
        Ok(self
            .backend
            .get_string_list(FAVORITE_IDS_KEY)?
            .unwrap_or_default())
    }

    /// Membership test
    pub fn is_favorite(&self, reserve_id: &str) -> Result<bool> {
        Ok(self.ids()?.iter().any(|id| id == reserve_id))
    }

    /// Append `reserve_id` if absent; no-op when already present
    pub fn add(&self, reserve_id: &str) -> Result<()> {
        let _guard = self.lock();
        let mut ids = self.ids()?;
        if !ids.iter().any(|id| id == reserve_id) {
            ids.push(reserve_id.to_string());
            self.backend.set_string_list(FAVORITE_IDS_KEY, &ids)?;
        }
        Ok(())
    }

    /// Remove `reserve_id` if present; no-op when absent
    pub fn remove(&self, reserve_id: &str) -> Result<()> {
        let _guard = self.lock();
        let mut ids = self.ids()?;
        let before = ids.len();
        ids.retain(|id| id != reserve_id);
        if ids.len() != before {
            self.backend.set_string_list(FAVORITE_IDS_KEY, &ids)?;
        }
        Ok(())
    }

    /// Flip membership as one read-modify-write
    ///
    /// Returns true when the id is now a favorite.
    pub fn toggle(&self, reserve_id: &str) -> Result<bool> {
        let _guard = self.lock();
        let mut ids = self.ids()?;
        let before = ids.len();
        ids.retain(|id| id != reserve_id);
        let now_favorite = ids.len() == before;
        if now_favorite {
            ids.push(reserve_id.to_string());
        }
        self.backend.set_string_list(FAVORITE_IDS_KEY, &ids)?;
        Ok(now_favorite)
    }

    /// Number of favorites
    pub fn count(&self) -> Result<usize> {
        Ok(self.ids()?.len())
    }

    /// Reset to empty
    pub fn clear(&self) -> Result<()> {
        let _guard = self.lock();
        self.backend.set_string_list(FAVORITE_IDS_KEY, &[])
    }

    /// Join favorites with their catalog records, preserving insertion order
    ///
    /// Ids that no longer resolve in the catalog are skipped.
    pub fn reserves<'a>(&self, catalog: &'a dyn CatalogSource) -> Result<Vec<&'a Reserve>> {
        Ok(self
            .ids()?
            .iter()
            .filter_map(|id| catalog.reserve(id))
            .collect())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.guard.lock().unwrap_or_else(|e| e.into_inner())
    }
}

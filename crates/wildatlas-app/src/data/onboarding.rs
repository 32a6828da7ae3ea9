//! Onboarding flag

use crate::data::storage::KvBackend;
use crate::error::Result;
use std::sync::Arc;

const COMPLETED_KEY: &str = "hasCompletedOnboarding";

/// Whether the first-run intro has been finished on this install
pub struct Onboarding {
    backend: Arc<dyn KvBackend>,
}

impl Onboarding {
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self { backend }
    }

    pub fn has_completed(&self) -> Result<bool> {
        Ok(self.backend.get_bool(COMPLETED_KEY)?.unwrap_or(false))
    }

    pub fn set_completed(&self, completed: bool) -> Result<()> {
        self.backend.set_bool(COMPLETED_KEY, completed)
    }
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
        temp_dir().join(format!("wildatlas_onboarding_test_{}.json", id))
    }

    #[test]
    fn test_defaults_to_false() {
        let path = temp_path();
        let onboarding = Onboarding::new(Arc::new(JsonFileBackend::open_at(&path).unwrap()));
        assert!(!onboarding.has_completed().unwrap());
    }

    #[test]
    fn test_set_and_reset_survive_reopen() {
        let path = temp_path();

        {
            let onboarding = Onboarding::new(Arc::new(JsonFileBackend::open_at(&path).unwrap()));
            onboarding.set_completed(true).unwrap();
        }
        {
            let onboarding = Onboarding::new(Arc::new(JsonFileBackend::open_at(&path).unwrap()));
            assert!(onboarding.has_completed().unwrap());
            onboarding.set_completed(false).unwrap();
        }
        {
            let onboarding = Onboarding::new(Arc::new(JsonFileBackend::open_at(&path).unwrap()));
            assert!(!onboarding.has_completed().unwrap());
        }

        let _ = fs::remove_file(&path);
    }
}

//! Storage layer for preference persistence
//!
//! A flat key-value port plus the JSON-file backend production code uses.
//! Every mutation is flushed to disk before the call returns.

use crate::config::app::NAME;
use crate::error::{AppError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Preferences data file name
const PREFS_FILE: &str = "preferences.json";

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(NAME))
        .ok_or_else(|| AppError::Storage(
            "Could not determine config directory. HOME environment variable may not be set.".to_string()
        ))
}

/// Ensure the config directory exists, creating it if necessary
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir()?;
    create_dir_if_needed(&dir)?;
    Ok(dir)
}

/// Get path to a specific data file in the default config directory
pub fn data_path(filename: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join(filename))
}

/// Create a directory if it doesn't exist, with proper error handling
fn create_dir_if_needed(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot create directory {:?}", path)
                }
                ErrorKind::NotFound => {
                    format!("Cannot create directory {:?}: parent path does not exist", path)
                }
                _ => {
                    format!("Failed to create directory {:?}: {}", path, e)
                }
            };
            Err(AppError::Storage(msg))
        }
    }
}

/// Read file contents with proper error handling
fn read_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            ErrorKind::PermissionDenied => Err(AppError::Storage(format!(
                "Permission denied: cannot read {:?}",
                path
            ))),
            _ => Err(AppError::Storage(format!("Failed to read {:?}: {}", path, e))),
        },
    }
}

/// Write file contents with proper error handling
fn write_file(path: &Path, content: &str) -> Result<()> {
    match fs::write(path, content) {
        Ok(()) => Ok(()),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot write to {:?}", path)
                }
                ErrorKind::NotFound => {
                    format!("Cannot write to {:?}: parent directory does not exist", path)
                }
                ErrorKind::ReadOnlyFilesystem => {
                    format!("Cannot write to {:?}: filesystem is read-only", path)
                }
                _ => {
                    format!("Failed to write to {:?}: {}", path, e)
                }
            };
            Err(AppError::Storage(msg))
        }
    }
}

// =============================================================================
// Key-value port
// =============================================================================

/// Durable flat key-value store
///
/// Keys are dotted string names; values are JSON primitives (bool, integer,
/// string, or list of strings). A stored value of the wrong type reads as
/// absent, so callers always fall back to their documented default.
pub trait KvBackend: Send + Sync {
    /// Raw value for a key, if any
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store a value; durable before this returns
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Delete a key; no-op if absent
    fn remove(&self, key: &str) -> Result<()>;

    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.get(key)?.and_then(|v| v.as_bool()))
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set(key, Value::Bool(value))
    }

    fn get_i64(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.get(key)?.and_then(|v| v.as_i64()))
    }

    fn set_i64(&self, key: &str, value: i64) -> Result<()> {
        self.set(key, Value::from(value))
    }

    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key)?.and_then(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        }))
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, Value::String(value.to_string()))
    }

    /// A list that is present but contains any non-string entry reads as absent
    fn get_string_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        match self.get(key)? {
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => out.push(s),
                        _ => return Ok(None),
                    }
                }
                Ok(Some(out))
            }
            _ => Ok(None),
        }
    }

    fn set_string_list(&self, key: &str, values: &[String]) -> Result<()> {
        self.set(
            key,
            Value::Array(values.iter().map(|s| Value::String(s.clone())).collect()),
        )
    }
}

// =============================================================================
// JSON-file backend
// =============================================================================

/// Key-value store backed by a single flat JSON object file
///
/// The whole map is loaded at open and rewritten on every mutation, under
/// an internal lock so concurrent key operations never interleave a write.
/// Fine for a preference-sized data set.
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    map: Mutex<Map<String, Value>>,
}

impl JsonFileBackend {
    /// Open the preferences file at the default config location
    pub fn open() -> Result<Self> {
        ensure_config_dir()?;
        let path = data_path(PREFS_FILE)?;
        Self::open_at(path)
    }

    /// Open a preferences file at a specific path
    ///
    /// A missing or empty file starts the store empty. A present but
    /// unparseable file is an error.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let map = match read_file(&path)? {
            Some(content) if !content.trim().is_empty() => {
                serde_json::from_str::<Map<String, Value>>(&content)
                    .map_err(|e| AppError::Storage(format!("Failed to parse {:?}: {}", path, e)))?
            }
            _ => Map::new(),
        };
        tracing::debug!(path = %path.display(), keys = map.len(), "opened preference store");
        Ok(Self {
            path,
            map: Mutex::new(map),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_if_needed(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(map)
            .map_err(|e| AppError::Storage(format!("Failed to serialize preferences: {}", e)))?;
        write_file(&self.path, &content)
    }
}

impl KvBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), value);
        self.persist(&map)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.map.lock().unwrap_or_else(|e| e.into_inner());
        if map.remove(key).is_some() {
            self.persist(&map)?;
        }
        Ok(())
    }
}

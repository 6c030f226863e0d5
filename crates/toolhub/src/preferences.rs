//! Persisted user preferences.
//!
//! The only preference is the display language, stored under
//! [`LANGUAGE_KEY`]. It is read once at startup and written whenever the
//! language is toggled.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::i18n::Language;

/// Key under which the display language is stored.
pub const LANGUAGE_KEY: &str = "language";

/// Errors raised by a [`PreferenceStore`].
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preferences at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preferences at '{path}' are not a JSON object of strings: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key/value store that survives reloads.
pub trait PreferenceStore {
    /// Read a value, returning `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// An in-memory store. Values live as long as the store itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store backed by a JSON object in a file.
///
/// A missing file reads as an empty store; the file and its parent
/// directories are created on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| PreferenceError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(&values).map_err(|source| {
            PreferenceError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

/// Read the stored display language.
///
/// Returns `None` when nothing usable is stored. Unreadable stores and
/// unrecognized codes are logged and treated as unset.
pub fn stored_language(store: &impl PreferenceStore) -> Option<Language> {
    let code = match store.get(LANGUAGE_KEY) {
        Ok(code) => code?,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable language preference");
            return None;
        }
    };
    let language = Language::parse(&code);
    if language.is_none() {
        tracing::warn!(code = %code, "ignoring unsupported stored language");
    }
    language
}

/// Persist the display language.
pub fn store_language(
    store: &mut impl PreferenceStore,
    language: Language,
) -> Result<(), PreferenceError> {
    store.set(LANGUAGE_KEY, language.code())
}

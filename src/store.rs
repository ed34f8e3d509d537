//! Named-entry persistence
//!
//! A flat list of `{Name, Value}` string pairs kept in a single JSON file.
//! The whole file is read at open and rewritten on every flush. The store
//! knows nothing about what the entries mean.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// A single named value
///
/// `value` is `None` when the entry exists but was never set. Such entries are
/// kept on flush but read back as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
}

impl ConfigEntry {
    /// Create an entry with a value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// File-backed store of named string values
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    entries: Vec<ConfigEntry>,
}

impl ConfigStore {
    /// Open the store at `path`, creating an empty file if none exists
    ///
    /// Empty or malformed content yields an empty store rather than an error,
    /// which covers the first run. Failure to create or read the file is
    /// returned to the caller.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::io(&path, e))?;

        let content = fs::read(&path).map_err(|e| StoreError::io(&path, e))?;
        let entries = Self::parse(&path, &content);
        log::debug!("Opened store {} ({} entries)", path.display(), entries.len());

        Ok(Self { path, entries })
    }

    fn parse(path: &Path, content: &[u8]) -> Vec<ConfigEntry> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Vec::new();
        }

        // Invalid UTF-8 is rejected by the JSON parser like any other syntax error.
        let parsed: Vec<ConfigEntry> = match serde_json::from_slice(content) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "Ignoring malformed store file {}: {}",
                    path.display(),
                    e
                );
                return Vec::new();
            }
        };

        // Names are unique; a hand-edited file may still repeat one.
        let mut entries: Vec<ConfigEntry> = Vec::with_capacity(parsed.len());
        for entry in parsed {
            if entries.iter().any(|e| e.name == entry.name) {
                log::warn!("Dropping duplicate store entry '{}'", entry.name);
                continue;
            }
            entries.push(entry);
        }
        entries
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a value by name
    ///
    /// Returns `None` when the entry is missing or has no value. A stored
    /// empty string is returned as `Some("")`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.value.as_deref())
    }

    /// Insert or replace a value
    pub fn put(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.value = Some(value),
            None => self.entries.push(ConfigEntry::new(name, value)),
        }
    }

    /// All entries currently held in memory
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Write every entry to disk
    ///
    /// The content goes to a temporary sibling first and is renamed over the
    /// backing file, so a crash mid-write leaves the previous file intact.
    pub fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.entries)?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|e| StoreError::io(&tmp_path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        log::debug!(
            "Flushed {} entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        let mut tmp = self.path.clone();
        tmp.set_file_name(name);
        tmp
    }
}

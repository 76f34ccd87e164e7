// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON-file key-value store.
//!
//! The whole store lives in one JSON object. Each write rewrites the file
//! through a temporary sibling and a rename, so readers never see a
//! half-written file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::db::KeyValueStore;
use crate::error::Result;

/// Key-value store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all entries. A missing file is an empty store; an unreadable
    /// one is logged and treated as empty.
    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&data) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Store file is not a JSON object, starting empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

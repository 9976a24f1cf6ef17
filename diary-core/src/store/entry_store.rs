//! The `EntryStore` struct: one plain text file per dated entry inside a single directory.
use super::entry_key::EntryKey;
use super::store_paths::{entry_file, scan_dir_for_entry_keys};
use crate::config::Config;
use crate::errors::{StoreError, StoreResult};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The central struct for all entry operations.
///
/// Every entry lives at `{root}/diary_<date>.txt`. The store keeps no state besides the root
/// directory, so each call goes straight to the filesystem and holds its file handle only for
/// the duration of the call.
#[derive(Debug, Clone)]
pub struct EntryStore {
    root: PathBuf,
}

impl EntryStore {
    /// Creates a new `EntryStore` from a specific `Config`.
    ///
    /// This also ensures that the entries directory exists.
    pub fn with_config(config: &Config) -> StoreResult<Self> {
        Self::open(&config.entries_dir)
    }

    /// Opens (and creates, if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(&root, e))?;
        debug!(root = %root.display(), "entry store ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file an entry for `date` is (or would be) stored in.
    pub fn path_for(&self, date: &str) -> StoreResult<PathBuf> {
        let key = EntryKey::parse(date)?;
        Ok(entry_file(&self.root, &key))
    }

    pub fn exists(&self, date: &str) -> StoreResult<bool> {
        Ok(self.path_for(date)?.is_file())
    }

    /// Writes a new entry. Never overwrites: fails with [`StoreError::AlreadyExists`] when the
    /// date already has a file.
    pub fn create(&self, date: &str, content: &str) -> StoreResult<PathBuf> {
        let key = EntryKey::parse(date)?;
        let path = entry_file(&self.root, &key);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => StoreError::AlreadyExists {
                    key: key.to_string(),
                },
                _ => StoreError::io(&path, e),
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| StoreError::io(&path, e))?;

        debug!(%key, path = %path.display(), bytes = content.len(), "created entry");
        Ok(path)
    }

    /// Returns the full text of an entry.
    pub fn read(&self, date: &str) -> StoreResult<String> {
        let key = EntryKey::parse(date)?;
        let path = entry_file(&self.root, &key);

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound {
                key: key.to_string(),
            },
            _ => StoreError::io(&path, e),
        })?;

        debug!(%key, bytes = content.len(), "read entry");
        Ok(content)
    }

    /// Adds a newline and `content` to the end of an existing entry.
    pub fn append(&self, date: &str, content: &str) -> StoreResult<()> {
        let key = EntryKey::parse(date)?;
        let path = entry_file(&self.root, &key);

        // No `create(true)`: appending never brings an entry into existence.
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StoreError::NotFound {
                    key: key.to_string(),
                },
                _ => StoreError::io(&path, e),
            })?;
        write!(file, "\n{content}").map_err(|e| StoreError::io(&path, e))?;

        debug!(%key, bytes = content.len(), "appended to entry");
        Ok(())
    }

    /// Removes an entry. Returns `false` when there was nothing to remove.
    pub fn delete(&self, date: &str) -> StoreResult<bool> {
        let key = EntryKey::parse(date)?;
        let path = entry_file(&self.root, &key);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(%key, "deleted entry");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    /// Every stored entry key, sorted.
    pub fn list(&self) -> StoreResult<Vec<EntryKey>> {
        let mut keys =
            scan_dir_for_entry_keys(&self.root).map_err(|e| StoreError::io(&self.root, e))?;
        keys.sort();
        debug!(count = keys.len(), "listed entries");
        Ok(keys)
    }
}

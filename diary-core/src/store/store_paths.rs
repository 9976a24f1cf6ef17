use super::entry_key::EntryKey;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::warn;

static ENTRY_FILE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^diary_(.+)\.txt$").unwrap());

/// `diary_2024-05-01.txt`
pub fn entry_file_name(key: &EntryKey) -> String {
    format!("diary_{key}.txt")
}

pub fn entry_file(root: &Path, key: &EntryKey) -> PathBuf {
    root.join(entry_file_name(key))
}

/// Recovers the key from an entry file name. Names that don't follow the
/// `diary_<key>.txt` pattern, or whose key would not be accepted, give `None`.
pub fn key_from_file_name(name: &str) -> Option<EntryKey> {
    let caps = ENTRY_FILE_NAME.captures(name)?;
    EntryKey::parse(caps.get(1)?.as_str()).ok()
}

/// Collects the keys of every entry file directly under `root`.
pub fn scan_dir_for_entry_keys(root: &Path) -> io::Result<Vec<EntryKey>> {
    let mut keys = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let p = entry.path();
        if !p.is_file() {
            continue;
        }
        let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %p.display(), "skipping file with a non UTF-8 name");
            continue;
        };
        if let Some(key) = key_from_file_name(name) {
            keys.push(key);
        }
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_round_trips_through_key() {
        let key = EntryKey::parse("2024-01-01").unwrap();
        let name = entry_file_name(&key);
        assert_eq!(name, "diary_2024-01-01.txt");
        assert_eq!(key_from_file_name(&name), Some(key));
    }

    #[test]
    fn unrelated_names_are_not_keys() {
        assert_eq!(key_from_file_name("notes.txt"), None);
        assert_eq!(key_from_file_name("diary_2024-01-01.md"), None);
        assert_eq!(key_from_file_name("diary_.txt"), None);
        assert_eq!(key_from_file_name("diary_a b.txt"), None);
    }
}

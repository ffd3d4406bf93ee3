use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Key holding the last buffer text.
pub(crate) const EDITOR_CODE_KEY: &str = "editorCode";

/// Errors raised while reading or writing the local store.
#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("storage IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat string key/value store persisted as a JSON object.
#[derive(Debug, Clone, Default)]
pub(crate) struct LocalStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the store at the default location, starting empty when the
    /// file is missing or unreadable.
    pub(crate) fn open() -> Self {
        let path = store_path();
        match Self::load_from_path(&path) {
            Ok(store) => store,
            Err(err) => {
                log::warn!("local store at {} ignored: {err}", path.display());
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            },
        }
    }

    pub(crate) fn load_from_path(path: &Path) -> Result<Self, StorageError> {
        let entries = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                BTreeMap::new()
            },
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub(crate) fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    /// Write all entries to disk atomically.
    pub(crate) fn save(&self) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, payload.as_bytes())?;

        Ok(())
    }
}

fn store_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("quill")
            .join("storage.json");
    }

    std::env::temp_dir().join("quill").join("storage.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{EDITOR_CODE_KEY, LocalStore, StorageError};

    #[test]
    fn given_saved_buffer_when_store_reopened_then_text_is_restored() {
        let root = test_temp_dir("round_trip");
        let path = root.join("nested").join("storage.json");

        let mut store = LocalStore::load_from_path(&path)
            .expect("missing store should load empty");
        assert_eq!(store.get(EDITOR_CODE_KEY), None);

        store.set(EDITOR_CODE_KEY, String::from("let x = 1;\n"));
        store.save().expect("store should save");

        let reopened =
            LocalStore::load_from_path(&path).expect("store should load");
        assert_eq!(reopened.get(EDITOR_CODE_KEY), Some("let x = 1;\n"));
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_corrupt_json_when_loaded_then_json_error_is_returned() {
        let root = test_temp_dir("corrupt");
        let path = root.join("storage.json");
        fs::write(&path, "{ not json").expect("payload should be written");

        let result = LocalStore::load_from_path(&path);

        assert!(matches!(result, Err(StorageError::Json(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "quill-storage-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}

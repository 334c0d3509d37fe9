use super::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

const APP_DIR: &str = "storefront";
const STORAGE_FILE: &str = "storage.json";

/// Documents above this size are refused
pub const MAX_DOCUMENT_BYTES: usize = 64 * 1024;

type Document = BTreeMap<String, String>;

/// Key/value store persisted as a single JSON object on disk.
///
/// Every write rewrites the whole document through a temporary file and a
/// rename, so a crash mid-write leaves the previous document in place.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `<data dir>/storefront/storage.json`, when the platform has a data dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_DIR).join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Document::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Document::new()),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Err(StorageError::AccessDenied(self.path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_document(&self, document: &Document) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(document)?;
        if content.len() > MAX_DOCUMENT_BYTES {
            return Err(StorageError::QuotaExceeded {
                size: content.len(),
                limit: MAX_DOCUMENT_BYTES,
            });
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_document()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut document = self.read_document()?;
        if document.remove(key).is_some() {
            self.write_document(&document)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("nested").join(STORAGE_FILE))
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.get("selectedTheme").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopening() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).set("selectedTheme", "theme2").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(
            reopened.get("selectedTheme").unwrap().as_deref(),
            Some("theme2")
        );
    }

    #[test]
    fn test_remove_deletes_only_that_key() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.remove("a").unwrap();
        store.remove("never-set").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_document_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORAGE_FILE);
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("a"), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_oversized_document_is_refused() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let result = store.set("blob", &"x".repeat(MAX_DOCUMENT_BYTES + 1));
        assert!(matches!(result, Err(StorageError::QuotaExceeded { .. })));
        assert_eq!(store.get("blob").unwrap(), None);
    }
}

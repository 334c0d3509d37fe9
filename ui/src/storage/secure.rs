use super::KeyValueStore;
use server::security::sanitize_html;
use std::sync::Arc;

/// Failure-tolerant front for a [`KeyValueStore`].
///
/// Keys and values are passed through `sanitize_html` before they reach the
/// backend. Backend errors are logged and swallowed: reads yield `None`,
/// writes and removals are dropped. Without a backend every operation is a
/// no-op.
#[derive(Clone, Default)]
pub struct SecureStorage {
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl std::fmt::Debug for SecureStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureStorage")
            .field("available", &self.is_available())
            .finish()
    }
}

impl SecureStorage {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A wrapper with no persistence capability behind it
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn set_item(&self, key: &str, value: &str) {
        let Some(backend) = &self.backend else {
            return;
        };
        let key = sanitize_html(key);
        let value = sanitize_html(value);
        if let Err(e) = backend.set(&key, &value) {
            log::error!("Failed to save '{key}' to storage: {e}");
        }
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        let backend = self.backend.as_ref()?;
        let key = sanitize_html(key);
        match backend.get(&key) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to read '{key}' from storage: {e}");
                None
            }
        }
    }

    pub fn remove_item(&self, key: &str) {
        let Some(backend) = &self.backend else {
            return;
        };
        let key = sanitize_html(key);
        if let Err(e) = backend.remove(&key) {
            log::error!("Failed to remove '{key}' from storage: {e}");
        }
    }
}

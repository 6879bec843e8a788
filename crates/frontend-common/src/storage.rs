//! `Storage` over `window.localStorage`

use dashboard_core::{CoreError, CoreResult, Storage};

/// Raw string storage in `window.localStorage`
///
/// Values are stored as-is, not JSON encoded, so tokens written by other
/// tabs or tools are read back unchanged.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// The window's local storage, if the browser grants access to it
    pub fn open() -> Option<Self> {
        let inner = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("localStorage.setItem({key}) failed: {e:?}")))
    }

    fn remove_item(&self, key: &str) {
        if let Err(e) = self.inner.remove_item(key) {
            tracing::warn!(key, error = ?e, "localStorage.removeItem failed");
        }
    }
}

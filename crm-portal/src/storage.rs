//! Key/value storage used for session data.
//!
//! Components never talk to `window.sessionStorage` directly; they go through
//! [`KeyValueStore`] so tests can swap in [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{PortalError, PortalResult};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> PortalResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PortalResult<()>;
    fn remove(&self, key: &str) -> PortalResult<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageScope {
    /// Cleared when the tab closes (`sessionStorage`).
    Session,
    /// Survives browser restarts (`localStorage`).
    Durable,
}

/// Browser Web Storage backend.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    scope: StorageScope,
}

impl BrowserStorage {
    pub fn session() -> Self {
        Self { scope: StorageScope::Session }
    }

    pub fn durable() -> Self {
        Self { scope: StorageScope::Durable }
    }

    pub fn scope(&self) -> StorageScope {
        self.scope
    }

    #[cfg(target_arch = "wasm32")]
    fn backend(&self) -> PortalResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(PortalError::StorageUnavailable)?;
        let storage = match self.scope {
            StorageScope::Session => window.session_storage(),
            StorageScope::Durable => window.local_storage(),
        };
        storage.map_err(js_error)?.ok_or(PortalError::StorageUnavailable)
    }

    // Web Storage only exists inside a browser.
    #[cfg(not(target_arch = "wasm32"))]
    fn backend(&self) -> PortalResult<web_sys::Storage> {
        Err(PortalError::StorageUnavailable)
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> PortalError {
    PortalError::Storage(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        self.backend()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        self.backend()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        self.backend()?.remove_item(key).map_err(js_error)
    }
}

/// In-memory store for tests and non-browser renderers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.to_string(), v.to_string())));
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.set("auth_role", "super-admin").unwrap();
        assert_eq!(store.get("auth_role").unwrap().as_deref(), Some("super-admin"));
        store.remove("auth_role").unwrap();
        assert_eq!(store.get("auth_role").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = MemoryStore::with_entries([("theme", "dark")]);
        assert!(store.remove("auth_token").is_ok());
        assert_eq!(store.len(), 1);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_browser_storage_unavailable_outside_browser() {
        let store = BrowserStorage::session();
        assert!(matches!(store.get("auth_token"), Err(PortalError::StorageUnavailable)));
        assert!(matches!(BrowserStorage::durable().remove("x"), Err(PortalError::StorageUnavailable)));
    }
}

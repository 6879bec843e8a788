//! Persisted session credential

use crate::error::CoreResult;
use crate::role::Role;
use crate::token::{Claims, decode_claims};
use std::cell::RefCell;
use std::collections::HashMap;

/// Default storage key of the bearer token
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// String key-value storage, shaped like the browser `Storage` API
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> CoreResult<()>;
    fn remove_item(&self, key: &str);
}

/// In-memory storage for tests and hosts without a browser
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Access to the credential of the current session
///
/// There is exactly one authoritative credential per session. Guards and HTTP
/// middleware only ever talk to this trait, never to the storage beneath it.
pub trait SessionStore {
    /// The stored credential, if any
    fn credential(&self) -> Option<String>;

    /// Persist a new credential, replacing any previous one
    fn set_credential(&self, credential: &str) -> CoreResult<()>;

    /// Forget the stored credential
    fn clear(&self);

    /// Role of the current session, if it can be determined
    fn current_role(&self) -> Option<Role>;
}

/// Session backed by a raw bearer token under a single storage key
#[derive(Debug)]
pub struct TokenSession<S> {
    storage: S,
    key: String,
}

impl<S: Storage> TokenSession<S> {
    /// Create a session using the default `token` key
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Decoded claims of the stored token
    pub fn claims(&self) -> Option<Claims> {
        self.credential().as_deref().and_then(decode_claims)
    }
}

impl<S: Storage> SessionStore for TokenSession<S> {
    fn credential(&self) -> Option<String> {
        self.storage
            .get_item(&self.key)
            .filter(|token| !token.is_empty())
    }

    fn set_credential(&self, credential: &str) -> CoreResult<()> {
        self.storage.set_item(&self.key, credential)
    }

    fn clear(&self) {
        tracing::debug!(key = %self.key, "Clearing session token");
        self.storage.remove_item(&self.key);
    }

    fn current_role(&self) -> Option<Role> {
        self.claims().and_then(|claims| claims.role)
    }
}

//! Durable session flag persisted across page reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth lifecycle persists exactly one marker (`moviesauth`) in browser
//! `localStorage`. All access goes through the `KeyValueStore` capability so
//! tests and native builds swap in an in-memory store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The single durable entry owned by the session store.
pub const SESSION_KEY: &str = "moviesauth";

/// Minimal string key/value storage capability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed store. When the medium is unavailable (native
/// builds, or a browser context without storage) every read is absent and
/// every write is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Shared in-memory store for tests and non-browser use.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Wraps the durable `moviesauth` entry.
///
/// `read` is `true` only for the exact `"true"` marker; absence or any other
/// value is `false`. `write(false)` removes the entry outright rather than
/// storing a live `"false"` value alongside absence.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn read(&self) -> bool {
        self.store.get(SESSION_KEY).as_deref() == Some("true")
    }

    pub fn write(&self, authenticated: bool) {
        if authenticated {
            self.store.set(SESSION_KEY, "true");
        } else {
            self.store.remove(SESSION_KEY);
        }
    }
}

//! # `localStorage` token store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. The
//! token survives reloads under a single key (default `"token"`, see
//! [`crate::AuthConfig`]).
//!
//! Every call re-acquires `window.localStorage`; the browser hands back the same
//! object each time. Errors (private mode, quota, disabled storage) are logged
//! and otherwise ignored.

use crate::token::{check_write, TokenStore};

/// `window.localStorage`-backed TokenStore.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        Self::storage()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        let outcome = Self::storage().map(|storage| storage.set_item(&self.key, token));
        check_write(outcome, "the token write");
    }

    fn clear(&self) {
        let outcome = Self::storage().map(|storage| storage.remove_item(&self.key));
        check_write(outcome, "removing the token");
    }
}

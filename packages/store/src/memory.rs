use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(&token.into());
        store
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());

        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.set("def");
        assert_eq!(store.get().as_deref(), Some("def"));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn clones_share_the_slot() {
        let store = MemoryStore::with_token("shared");
        let other = store.clone();
        other.clear();
        assert!(store.get().is_none());
    }
}

//! Shared token store constructor for all platforms.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Everything else**: process memory via [`store::MemoryStore`]

use std::rc::Rc;

use store::{DashboardConfig, TokenStore};

/// Create the platform-appropriate token store, keyed by `auth.token_key`.
pub fn make_token_store(config: &DashboardConfig) -> Rc<dyn TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorageStore::new(config.auth.token_key.clone()))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::debug!("token key {:?} kept in memory", config.auth.token_key);
        Rc::new(store::MemoryStore::new())
    }
}

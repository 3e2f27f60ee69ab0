//! Client-side state for the admin dashboard: configuration, the bearer token
//! and what can be read out of it without talking to the server.

pub mod config;
pub mod session;
pub mod token;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::{ApiConfig, AuthConfig, ConfigError, DashboardConfig, UiConfig};
pub use session::{Claims, Session, TokenError};
pub use token::TokenStore;

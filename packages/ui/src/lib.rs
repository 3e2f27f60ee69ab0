//! This crate contains all shared UI for the dashboard: the auth context,
//! the page views and the widgets they are built from.

pub mod components;
pub mod forms;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod tokens;
pub use tokens::make_token_store;

pub mod views;

pub mod charts;
pub mod pagination;

pub mod toast;
pub use toast::{use_toast, ToastProvider, Toaster};

mod navbar;
pub use navbar::Header;

mod auth;
pub use auth::{
    sign_out, use_api, use_auth, use_config, use_error_reporter, AuthProvider, AuthState,
    ErrorReporter,
};

mod sidebar;
pub use sidebar::{NavItem, Sidebar};

//! Authentication context and hooks for the UI.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{DashboardConfig, Session};

use crate::toast::{use_toast, Toaster};
use crate::tokens::make_token_store;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// Decoded, unexpired token. `None` means signed out.
    pub session: Option<Session>,
    /// False until the stored token has been looked at.
    pub checked: bool,
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            checked: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: None,
            checked: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the admin logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared REST client. Cheap to clone into async handlers.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}

/// Provider component that owns the token store, the API client and the
/// authentication state. Wrap the router with this component.
#[component]
pub fn AuthProvider(config: DashboardConfig, children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    let api = use_context_provider(|| ApiClient::new(&config, make_token_store(&config)));
    use_context_provider(|| config.clone());

    // Decode the stored token on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            let session = Session::from_store(api.tokens(), store::session::now());
            match &session {
                Some(s) => tracing::info!("restored session for {}", s.display_name()),
                None => tracing::debug!("no stored session"),
            }
            auth_state.set(AuthState {
                session,
                checked: true,
            });
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Turns failed API calls into toasts. An expired session also signs the
/// admin out so the route guard sends them to the login page.
#[derive(Clone, Copy, PartialEq)]
pub struct ErrorReporter {
    toast: Toaster,
    auth: Signal<AuthState>,
}

impl ErrorReporter {
    pub fn report(&self, err: &ApiError, fallback: &str) {
        tracing::error!("{fallback}: {err}");
        self.toast.error(err.user_message(fallback));
        if err.is_unauthorized() {
            let mut auth = self.auth;
            auth.set(AuthState::signed_out());
        }
    }
}

pub fn use_error_reporter() -> ErrorReporter {
    ErrorReporter {
        toast: use_toast(),
        auth: use_auth(),
    }
}

/// Clear the token and the auth state.
pub fn sign_out(api: &ApiClient, mut auth: Signal<AuthState>) {
    api.logout();
    auth.set(AuthState::signed_out());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_unchecked() {
        let state = AuthState::default();
        assert!(!state.checked);
        assert!(!state.is_authenticated());
        assert!(AuthState::signed_out().checked);
    }
}

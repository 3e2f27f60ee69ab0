//! Public pages reachable without a session.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::{ForgotPasswordView, LoginView, SignupView};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // If already logged in, go straight to the dashboard
    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_signup: move |_| {
                nav.push(Route::Signup {});
            },
            on_forgot: move |_| {
                nav.push(Route::ForgotPassword {});
            },
        }
    }
}

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    rsx! {
        SignupView {
            on_success: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    let nav = use_navigator();

    rsx! {
        ForgotPasswordView {
            on_done: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

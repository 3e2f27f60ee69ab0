//! Email and password sign-in page.

use dioxus::prelude::*;
use store::Session;

use crate::auth::{use_api, use_auth, AuthState};
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::forms::{FieldErrors, LoginForm};

use super::VIEWS_CSS;

#[component]
pub fn LoginView(
    on_success: EventHandler<()>,
    on_signup: EventHandler<()>,
    on_forgot: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut general = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        general.set(None);
        loading.set(true);
        let api = api.clone();
        spawn(async move {
            let request = current.to_request();
            match api.login(&request.email, &request.password).await {
                Ok(token) => match Session::decode(&token) {
                    Ok(session) => {
                        auth.set(AuthState::signed_in(session));
                        on_success.call(());
                    }
                    Err(e) => {
                        tracing::warn!("login returned an unreadable token: {e}");
                        api.logout();
                        general.set(Some("Invalid credentials".to_string()));
                    }
                },
                Err(e) => general.set(Some(e.user_message("Invalid credentials"))),
            }
            loading.set(false);
        });
    };

    let err = move |field: &str| errors().get(field).map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Sign in to your account" }

                form { class: "auth-form", onsubmit: handle_login,
                    if let Some(message) = general() {
                        div { class: "auth-alert error", "{message}" }
                    }
                    FormField { label: "Email address", html_for: "login-email", error: err("email"),
                        Input {
                            id: "login-email",
                            r#type: "email",
                            value: form().email,
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                    FormField { label: "Password", html_for: "login-password", error: err("password"),
                        Input {
                            id: "login-password",
                            r#type: "password",
                            value: form().password,
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }
                    div { class: "auth-row",
                        button {
                            class: "link-btn",
                            r#type: "button",
                            onclick: move |_| on_forgot.call(()),
                            "Forgot password?"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "auth-footer",
                    "Don't have an account? "
                    button {
                        class: "link-btn",
                        r#type: "button",
                        onclick: move |_| on_signup.call(()),
                        "Sign up"
                    }
                }
            }
        }
    }
}

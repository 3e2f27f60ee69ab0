//! Admin registration page.

use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::forms::{FieldErrors, SignupForm};
use crate::toast::use_toast;

use super::VIEWS_CSS;

#[component]
pub fn SignupView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut form = use_signal(SignupForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut general = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
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
            match api.register(&current.to_request()).await {
                Ok(()) => {
                    toast.success("Account created successfully");
                    on_success.call(());
                }
                Err(e) => general.set(Some(e.user_message("Signup failed"))),
            }
            loading.set(false);
        });
    };

    let err = move |field: &str| errors().get(field).map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Create your account" }

                form { class: "auth-form", onsubmit: handle_signup,
                    if let Some(message) = general() {
                        div { class: "auth-alert error", "{message}" }
                    }
                    FormField { label: "Name", html_for: "signup-name", error: err("name"),
                        Input {
                            id: "signup-name",
                            value: form().name,
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    FormField { label: "Email address", html_for: "signup-email", error: err("email"),
                        Input {
                            id: "signup-email",
                            r#type: "email",
                            value: form().email,
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                    FormField { label: "Contact", html_for: "signup-contact", error: err("contact"),
                        Input {
                            id: "signup-contact",
                            value: form().contact,
                            oninput: move |evt: FormEvent| form.write().contact = evt.value(),
                        }
                    }
                    FormField { label: "Password", html_for: "signup-password", error: err("password"),
                        Input {
                            id: "signup-password",
                            r#type: "password",
                            value: form().password,
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }
                    FormField { label: "Confirm Password", html_for: "signup-confirm", error: err("confirm"),
                        Input {
                            id: "signup-confirm",
                            r#type: "password",
                            value: form().confirm,
                            oninput: move |evt: FormEvent| form.write().confirm = evt.value(),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing up..." } else { "Sign up" }
                    }
                }

                p { class: "auth-footer",
                    "Already have an account? "
                    button {
                        class: "link-btn",
                        r#type: "button",
                        onclick: move |_| on_login.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}

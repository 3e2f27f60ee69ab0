//! Password reset in three steps: request a code, verify it, choose a new password.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::forms::{FieldErrors, ResetForm, ResetStep};
use crate::toast::sleep;

use super::VIEWS_CSS;

const RESEND_COOLDOWN_SECS: u32 = 60;
const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[component]
pub fn ForgotPasswordView(on_done: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let api = use_api();
    let mut step = use_signal(ResetStep::default);
    let mut form = use_signal(ResetForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut general = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut timer = use_signal(|| 0u32);
    let mut countdown = use_signal(|| Option::<Task>::None);

    // Restarts the resend cooldown, replacing any countdown still running.
    let mut start_cooldown = move || {
        if let Some(task) = countdown.write().take() {
            task.cancel();
        }
        timer.set(RESEND_COOLDOWN_SECS);
        let task = spawn(async move {
            while timer() > 0 {
                sleep(Duration::from_secs(1)).await;
                timer -= 1;
            }
        });
        countdown.set(Some(task));
    };

    let mut begin = move |current_step: ResetStep| -> Option<ResetForm> {
        let current = form();
        let found = current.validate(current_step);
        if !found.is_empty() {
            errors.set(found);
            return None;
        }
        errors.set(FieldErrors::new());
        general.set(None);
        notice.set(None);
        loading.set(true);
        Some(current)
    };

    let send_api = api.clone();
    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(current) = begin(ResetStep::Email) else { return };
        let api = send_api.clone();
        spawn(async move {
            let email = current.email.trim().to_string();
            match api.send_otp(&email).await {
                Ok(()) => {
                    form.write().email = email.clone();
                    step.set(ResetStep::Otp);
                    start_cooldown();
                    notice.set(Some(format!("OTP sent to {email}")));
                }
                Err(e) => general.set(Some(e.user_message("Failed to send OTP. Please try again."))),
            }
            loading.set(false);
        });
    };

    let resend_api = api.clone();
    let handle_resend = move |_| {
        let email = form.peek().email.clone();
        general.set(None);
        notice.set(None);
        loading.set(true);
        let api = resend_api.clone();
        spawn(async move {
            match api.send_otp(&email).await {
                Ok(()) => {
                    start_cooldown();
                    notice.set(Some(format!("New OTP sent to {email}")));
                }
                Err(e) => general.set(Some(e.user_message("Failed to resend OTP. Please try again."))),
            }
            loading.set(false);
        });
    };

    let verify_api = api.clone();
    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(current) = begin(ResetStep::Otp) else { return };
        let api = verify_api.clone();
        spawn(async move {
            match api.verify_otp(&current.email, current.otp.trim()).await {
                Ok(()) => {
                    step.set(ResetStep::NewPassword);
                    notice.set(Some("OTP verified successfully!".to_string()));
                }
                Err(e) => {
                    let message = e.user_message("Invalid OTP. Please try again.");
                    errors.write().add("otp", &message);
                    general.set(Some(message));
                }
            }
            loading.set(false);
        });
    };

    let handle_reset = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(current) = begin(ResetStep::NewPassword) else { return };
        let api = api.clone();
        spawn(async move {
            match api.reset_password(&current.email, &current.password).await {
                Ok(()) => {
                    notice.set(Some("Password reset successfully! Redirecting to login...".to_string()));
                    loading.set(false);
                    sleep(REDIRECT_DELAY).await;
                    on_done.call(());
                    return;
                }
                Err(e) => general.set(Some(e.user_message("Failed to reset password. Please try again."))),
            }
            loading.set(false);
        });
    };

    let err = move |field: &str| errors().get(field).map(str::to_string);
    let heading = match step() {
        ResetStep::Email => "Forgot Password",
        ResetStep::Otp => "Verify OTP",
        ResetStep::NewPassword => "Reset Password",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "{heading}" }

                if let Some(message) = general() {
                    div { class: "auth-alert error", "{message}" }
                }
                if let Some(message) = notice() {
                    div { class: "auth-alert success", "{message}" }
                }

                match step() {
                    ResetStep::Email => rsx! {
                        form { class: "auth-form", onsubmit: handle_send,
                            FormField { label: "Email address", html_for: "reset-email", error: err("email"),
                                Input {
                                    id: "reset-email",
                                    r#type: "email",
                                    value: form().email,
                                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                                }
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "full",
                                r#type: "submit",
                                disabled: loading(),
                                if loading() { "Sending..." } else { "Get OTP" }
                            }
                        }
                    },
                    ResetStep::Otp => rsx! {
                        form { class: "auth-form", onsubmit: handle_verify,
                            FormField { label: "Enter OTP", html_for: "reset-otp", error: err("otp"),
                                Input {
                                    id: "reset-otp",
                                    class: "center",
                                    value: form().otp,
                                    oninput: move |evt: FormEvent| form.write().otp = evt.value(),
                                }
                            }
                            div { class: "auth-row",
                                if timer() > 0 {
                                    p { class: "auth-hint", "Resend OTP in {timer} seconds" }
                                } else {
                                    button {
                                        class: "link-btn",
                                        r#type: "button",
                                        disabled: loading(),
                                        onclick: handle_resend,
                                        "Resend OTP"
                                    }
                                }
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "full",
                                r#type: "submit",
                                disabled: loading(),
                                if loading() { "Verifying..." } else { "Verify OTP" }
                            }
                        }
                    },
                    ResetStep::NewPassword => rsx! {
                        form { class: "auth-form", onsubmit: handle_reset,
                            FormField { label: "New Password", html_for: "reset-password", error: err("password"),
                                Input {
                                    id: "reset-password",
                                    r#type: "password",
                                    value: form().password,
                                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                                }
                            }
                            FormField { label: "Confirm Password", html_for: "reset-confirm", error: err("confirm"),
                                Input {
                                    id: "reset-confirm",
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
                                if loading() { "Resetting..." } else { "Reset Password" }
                            }
                        }
                    },
                }

                p { class: "auth-footer",
                    "Remembered it? "
                    button {
                        class: "link-btn",
                        r#type: "button",
                        onclick: move |_| on_login.call(()),
                        "Back to login"
                    }
                }
            }
        }
    }
}

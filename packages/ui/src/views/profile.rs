use api::lenient::or_na;
use api::UserProfile;
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, use_error_reporter};
use crate::components::{Button, ButtonVariant, FormField, Input};
use crate::forms::{FieldErrors, ProfileForm};
use crate::icons::{FaPenToSquare, FaXmark};
use crate::toast::use_toast;
use crate::Icon;

/// The signed-in admin's own details, with an inline edit mode.
#[component]
pub fn ProfileView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let reporter = use_error_reporter();
    let toast = use_toast();

    let mut profile = use_signal(|| Option::<UserProfile>::None);
    let mut loading = use_signal(|| true);
    let mut editing = use_signal(|| false);
    let mut form = use_signal(ProfileForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);

    let fetch_api = api.clone();
    let _loader = use_resource(move || {
        let api = fetch_api.clone();
        let admin_id = auth.peek().session.as_ref().and_then(|s| s.admin_id());
        async move {
            let Some(admin_id) = admin_id else {
                toast.error("Admin ID not found");
                loading.set(false);
                return;
            };
            match api.fetch_profile(&admin_id).await {
                Ok(p) => profile.set(Some(p)),
                Err(e) => reporter.report(&e, "Failed to load profile data"),
            }
            loading.set(false);
        }
    });

    let handle_save = move |_| {
        let Some(current_profile) = profile() else {
            toast.error("Admin ID or user data not found");
            return;
        };
        let current = form();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        saving.set(true);
        let api = api.clone();
        spawn(async move {
            match api.update_profile(&current.to_update(current_profile.user_id)).await {
                Ok(()) => {
                    profile.set(Some(UserProfile {
                        name: current.name.trim().to_string(),
                        email: current.email.trim().to_string(),
                        contact: current.contact.trim().to_string(),
                        ..current_profile
                    }));
                    toast.success("Profile updated successfully");
                    editing.set(false);
                }
                Err(e) => reporter.report(&e, "Failed to update profile"),
            }
            saving.set(false);
        });
    };

    let err = move |field: &str| errors().get(field).map(str::to_string);

    rsx! {
        div { class: "page",
            div { class: "profile-card",
                div { class: "page-header",
                    h1 { class: "page-title", if editing() { "Update Profile" } else { "My Profile" } }
                    if profile().is_some() {
                        button {
                            class: "icon-btn",
                            title: if editing() { "Cancel Edit" } else { "Edit Profile" },
                            onclick: move |_| {
                                if editing() {
                                    editing.set(false);
                                } else if let Some(p) = profile() {
                                    form.set(ProfileForm::from_profile(&p));
                                    errors.set(FieldErrors::new());
                                    editing.set(true);
                                }
                            },
                            if editing() {
                                Icon { icon: FaXmark, width: 16, height: 16 }
                            } else {
                                Icon { icon: FaPenToSquare, width: 16, height: 16 }
                            }
                        }
                    }
                }

                if loading() {
                    p { class: "page-status", "Loading profile..." }
                } else if editing() {
                    FormField { label: "Name", html_for: "profile-name", error: err("name"),
                        Input {
                            id: "profile-name",
                            value: form().name,
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    FormField { label: "Email", html_for: "profile-email", error: err("email"),
                        Input {
                            id: "profile-email",
                            r#type: "email",
                            value: form().email,
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                    FormField { label: "Phone", html_for: "profile-contact", error: err("contact"),
                        Input {
                            id: "profile-contact",
                            value: form().contact,
                            oninput: move |evt: FormEvent| form.write().contact = evt.value(),
                        }
                    }
                    FormField { label: "New Password", html_for: "profile-password", error: err("new_password"),
                        Input {
                            id: "profile-password",
                            r#type: "password",
                            placeholder: "Leave blank to keep the current password",
                            value: form().new_password,
                            oninput: move |evt: FormEvent| form.write().new_password = evt.value(),
                        }
                    }
                    FormField { label: "Confirm Password", html_for: "profile-confirm", error: err("confirm"),
                        Input {
                            id: "profile-confirm",
                            r#type: "password",
                            value: form().confirm,
                            oninput: move |evt: FormEvent| form.write().confirm = evt.value(),
                        }
                    }
                    div { class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                        Button {
                            disabled: saving(),
                            onclick: handle_save,
                            if saving() { "Saving..." } else { "Save Profile" }
                        }
                    }
                } else if let Some(p) = profile() {
                    dl { class: "detail-list",
                        dt { "Name" }
                        dd { "{or_na(&p.name)}" }
                        dt { "Email" }
                        dd { "{or_na(&p.email)}" }
                        dt { "Phone" }
                        dd { "{or_na(&p.contact)}" }
                    }
                } else {
                    p { class: "page-status error", "Profile unavailable" }
                }
            }
        }
    }
}

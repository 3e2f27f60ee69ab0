use dioxus::prelude::*;

use super::{Button, ButtonVariant};
use crate::views::ModalOverlay;

/// "Are you sure?" modal used before deletes and logout.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay { on_close: move |_| on_cancel.call(()),
            div { class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                p { class: "modal-text", "{message}" }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Please wait..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}

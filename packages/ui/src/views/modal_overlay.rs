use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] title: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                if !title.is_empty() {
                    h2 { class: "modal-title", "{title}" }
                }
                {children}
            }
        }
    }
}

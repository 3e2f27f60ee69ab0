//! Toast notifications shown in the top-right corner.

use std::time::Duration;

use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// The visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Handle for raising toasts from event handlers and tasks.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
    duration: Duration,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut queue = self.queue;
        let id = queue.write().push(kind, message);
        let toaster = *self;
        spawn(async move {
            sleep(toaster.duration).await;
            toaster.dismiss(id);
        });
    }
}

pub fn use_toast() -> Toaster {
    use_context::<Toaster>()
}

/// Provides [`Toaster`] to `children` and renders the toast stack.
#[component]
pub fn ToastProvider(duration_secs: u64, children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    let toaster = use_context_provider(|| Toaster {
        queue,
        duration: Duration::from_secs(duration_secs.max(1)),
    });

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        {children}
        div { class: "toast-stack",
            for toast in queue().items {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    onclick: move |_| toaster.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_is_appended() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Client added successfully");
        let second = queue.push(ToastKind::Error, "Failed to delete client");
        assert_ne!(first, second);
        assert_eq!(queue.items.last().map(|t| t.kind), Some(ToastKind::Error));
        queue.dismiss(first);
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].id, second);
    }
}

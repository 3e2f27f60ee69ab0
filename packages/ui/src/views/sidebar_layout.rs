use dioxus::prelude::*;

use crate::auth::{sign_out, use_api, use_auth};
use crate::components::ConfirmDialog;
use crate::navbar::Header;
use crate::sidebar::{NavItem, Sidebar};
use crate::toast::use_toast;

use super::VIEWS_CSS;

/// Shared chrome around every protected page.
///
/// Platform packages provide navigation callbacks and an `Outlet` as children.
#[component]
pub fn SidebarLayoutView(
    /// Sidebar entry matching the current route.
    active: Option<NavItem>,
    /// The router outlet for child routes.
    children: Element,
    on_navigate: EventHandler<NavItem>,
    on_navigate_profile: EventHandler<()>,
    /// Called after the token has been cleared.
    on_logged_out: EventHandler<()>,
) -> Element {
    let mut sidebar_open = use_signal(|| true);
    let mut confirm_logout = use_signal(|| false);
    let auth = use_auth();
    let api = use_api();
    let toast = use_toast();

    let user_name = auth()
        .session
        .as_ref()
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| "Admin".to_string());

    let handle_logout = move |_| {
        sign_out(&api, auth);
        confirm_logout.set(false);
        toast.success("Logged out successfully");
        on_logged_out.call(());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "app-shell",
            Sidebar {
                active,
                open: sidebar_open(),
                on_navigate: move |item| on_navigate.call(item),
            }
            div {
                class: "app-main",
                Header {
                    user_name,
                    on_toggle_sidebar: move |_| sidebar_open.toggle(),
                    on_profile: move |_| on_navigate_profile.call(()),
                    on_logout: move |_| confirm_logout.set(true),
                }
                main {
                    class: "app-content",
                    {children}
                }
            }
        }

        if confirm_logout() {
            ConfirmDialog {
                title: "Confirm Logout",
                message: "Are you sure you want to logout?",
                confirm_label: "Logout",
                on_confirm: handle_logout,
                on_cancel: move |_| confirm_logout.set(false),
            }
        }
    }
}

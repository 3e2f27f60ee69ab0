use dioxus::prelude::*;

use crate::icons::{FaBars, FaCircleUser, FaRightFromBracket, FaUser};
use crate::Icon;

/// Top bar: sidebar toggle on the left, user menu on the right.
#[component]
pub fn Header(
    user_name: String,
    on_toggle_sidebar: EventHandler<()>,
    on_profile: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "header",
            button {
                class: "header-toggle",
                title: "Toggle sidebar",
                onclick: move |_| on_toggle_sidebar.call(()),
                Icon { icon: FaBars, width: 18, height: 18 }
            }
            div {
                class: "user-menu",
                button {
                    class: "user-menu-trigger",
                    onclick: move |_| menu_open.toggle(),
                    Icon { icon: FaCircleUser, width: 20, height: 20 }
                    span { "{user_name}" }
                }
                if menu_open() {
                    div {
                        class: "user-menu-dropdown",
                        button {
                            class: "user-menu-item",
                            onclick: move |_| {
                                menu_open.set(false);
                                on_profile.call(());
                            },
                            Icon { icon: FaUser, width: 14, height: 14 }
                            "Profile"
                        }
                        button {
                            class: "user-menu-item",
                            onclick: move |_| {
                                menu_open.set(false);
                                on_logout.call(());
                            },
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}

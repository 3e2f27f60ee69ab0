use dioxus::prelude::*;

use crate::icons::{FaBoxOpen, FaCubes, FaEnvelopeOpenText, FaGauge, FaUsers};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Pages reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Clients,
    Products,
    Packages,
    Enquiry,
}

impl NavItem {
    pub const ALL: [NavItem; 5] = [
        NavItem::Dashboard,
        NavItem::Clients,
        NavItem::Products,
        NavItem::Packages,
        NavItem::Enquiry,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Clients => "Clients",
            NavItem::Products => "Products",
            NavItem::Packages => "Packages",
            NavItem::Enquiry => "Enquiry",
        }
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item {
        NavItem::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
        NavItem::Clients => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavItem::Products => rsx! { Icon { icon: FaCubes, width: 16, height: 16 } },
        NavItem::Packages => rsx! { Icon { icon: FaBoxOpen, width: 16, height: 16 } },
        NavItem::Enquiry => rsx! { Icon { icon: FaEnvelopeOpenText, width: 16, height: 16 } },
    }
}

#[component]
pub fn Sidebar(
    /// Highlighted entry; `None` on pages outside the menu (profile).
    active: Option<NavItem>,
    open: bool,
    on_navigate: EventHandler<NavItem>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: if open { "sidebar" } else { "sidebar collapsed" },
            div { class: "sidebar-brand",
                span { class: "sidebar-logo", "L" }
                if open {
                    span { class: "sidebar-title", "Licensing Admin" }
                }
            }
            nav { class: "sidebar-menu",
                for item in NavItem::ALL {
                    button {
                        key: "{item.label()}",
                        class: if active == Some(item) { "sidebar-item active" } else { "sidebar-item" },
                        title: "{item.label()}",
                        onclick: move |_| on_navigate.call(item),
                        NavIcon { item }
                        if open {
                            span { "{item.label()}" }
                        }
                    }
                }
            }
        }
    }
}

//! Protected pages. Each one renders inside [`super::SidebarLayout`].

use dioxus::prelude::*;
use ui::views::{ClientsView, DashboardView, EnquiryView, PackagesView, ProductsView, ProfileView};

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
pub fn Clients() -> Element {
    rsx! { ClientsView {} }
}

#[component]
pub fn Products() -> Element {
    rsx! { ProductsView {} }
}

#[component]
pub fn Packages() -> Element {
    rsx! { PackagesView {} }
}

#[component]
pub fn Enquiry() -> Element {
    rsx! { EnquiryView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}

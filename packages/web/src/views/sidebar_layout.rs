use dioxus::prelude::*;

use ui::views::SidebarLayoutView;
use ui::{use_auth, NavItem};

use crate::Route;

fn route_for(item: NavItem) -> Route {
    match item {
        NavItem::Dashboard => Route::Dashboard {},
        NavItem::Clients => Route::Clients {},
        NavItem::Products => Route::Products {},
        NavItem::Packages => Route::Packages {},
        NavItem::Enquiry => Route::Enquiry {},
    }
}

fn nav_item_for(route: &Route) -> Option<NavItem> {
    match route {
        Route::Root {} | Route::Dashboard {} => Some(NavItem::Dashboard),
        Route::Clients {} => Some(NavItem::Clients),
        Route::Products {} => Some(NavItem::Products),
        Route::Packages {} => Some(NavItem::Packages),
        Route::Enquiry {} => Some(NavItem::Enquiry),
        _ => None,
    }
}

/// Layout for every protected route. Sends signed-out visitors to `/login`.
#[component]
pub fn SidebarLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    // Runs again whenever the session changes, including a 401 sign-out
    use_effect(move || {
        let state = auth();
        if state.checked && !state.is_authenticated() {
            tracing::info!("no session, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    let state = auth();
    if !state.checked || !state.is_authenticated() {
        return rsx! {};
    }

    rsx! {
        SidebarLayoutView {
            active: nav_item_for(&route),
            on_navigate: move |item| {
                nav.push(route_for(item));
            },
            on_navigate_profile: move |_| {
                nav.push(Route::Profile {});
            },
            on_logged_out: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_items_map_to_their_routes() {
        for item in NavItem::ALL {
            assert_eq!(nav_item_for(&route_for(item)), Some(item));
        }
        assert_eq!(nav_item_for(&Route::Profile {}), None);
    }
}

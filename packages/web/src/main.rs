use dioxus::prelude::*;

use store::DashboardConfig;
use ui::{AuthProvider, ToastProvider};
use views::{
    Clients, Dashboard, Enquiry, ForgotPassword, Login, Packages, Products, Profile,
    SidebarLayout, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/forgot")]
    ForgotPassword {},
    #[layout(SidebarLayout)]
        #[route("/")]
        Root {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/clients")]
        Clients {},
        #[route("/products")]
        Products {},
        #[route("/packages")]
        Packages {},
        #[route("/enquiry")]
        Enquiry {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const EMBEDDED_CONFIG: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to defaults when it is unusable.
fn load_config() -> DashboardConfig {
    let mut config = match DashboardConfig::from_toml(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{} is invalid, using defaults: {e}", DashboardConfig::filename());
            DashboardConfig::default()
        }
    };
    if let Some(url) = option_env!("DASHBOARD_API_URL") {
        config = config.with_base_url(url);
    }
    if let Err(e) = config.validate() {
        tracing::warn!("rejected dashboard config, using defaults: {e}");
        return DashboardConfig::default();
    }
    tracing::info!("dashboard API at {}", config.api_base());
    config
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider { duration_secs: config.ui.toast_duration_secs,
            AuthProvider { config,
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

/// Unknown paths land on the dashboard, which bounces to login when signed out.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));
    nav.replace(Route::Dashboard {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = DashboardConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.ui.page_size, 10);
        assert_eq!(config.auth.token_key, "token");
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Clients {}.to_string(), "/clients");
        assert_eq!(Route::ForgotPassword {}.to_string(), "/forgot");
        assert_eq!("/enquiry".parse::<Route>().ok(), Some(Route::Enquiry {}));
    }
}

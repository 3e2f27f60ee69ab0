use dioxus::prelude::*;

pub(crate) const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayoutView;

mod dashboard;
pub use dashboard::DashboardView;

mod clients;
pub use clients::ClientsView;

mod products;
pub use products::ProductsView;

mod packages;
pub use packages::PackagesView;

mod enquiry;
pub use enquiry::EnquiryView;

mod profile;
pub use profile::ProfileView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod forgot_password;
pub use forgot_password::ForgotPasswordView;

mod login;
pub use login::{ForgotPassword, Login, Signup};

mod pages;
pub use pages::{Clients, Dashboard, Enquiry, Packages, Products, Profile};

mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;

//! Wire records, request payloads and catalogs.

mod catalog;
mod client;
mod dashboard;
pub mod date;
mod enquiry;
pub mod lenient;
mod package;
mod product;
mod user;

pub use catalog::{BillingCycle, ClientStatus, EnquiryStatus, PackageTier, Platform, Timeline};
pub use client::{
    dedup_by_id, find_plan, find_product, Client, CreateClient, PlanOption, ProductOption,
    UpdateClient,
};
pub use dashboard::{ClientSplit, DashboardData, Metrics, MonthlyPoint};
pub(crate) use dashboard::{EnquiryRow, RevenueRow};
pub use enquiry::{Enquiry, NewEnquiry, UpdateEnquiry};
pub(crate) use enquiry::ConvertEnquiry;
pub use package::{CreatePackage, Package, UpdatePackage};
pub(crate) use package::DeletePackage;
pub use product::{CreateProduct, Product, UpdateProduct};
pub use user::{LoginRequest, SignupRequest, UpdateProfile, UserProfile};
pub(crate) use user::{LoginResponse, OtpReply, ResetPassword, SendOtp, VerifyOtp};

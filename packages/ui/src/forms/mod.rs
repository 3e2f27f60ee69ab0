//! Form models. Each form is a bag of strings bound to inputs, checked with
//! `validate()` and converted into the matching `api` payload.

mod account;
mod client;
mod enquiry;
mod package;
mod product;
pub mod validate;

pub use account::{LoginForm, ProfileForm, ResetForm, ResetStep, SignupForm};
pub use client::ClientForm;
pub use enquiry::{validate_start_date, EnquiryForm};
pub use package::PackageForm;
pub use product::ProductForm;
pub use validate::FieldErrors;

/// Whether a modal creates a record or edits an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

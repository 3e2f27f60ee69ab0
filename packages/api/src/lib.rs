//! # API crate: typed client for the licensing backend
//!
//! The dashboard is a thin presentation layer; every record lives on the REST
//! backend. This crate is the only place that knows its URLs, key casing and
//! response shapes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: bearer header, 401 handling, response envelope |
//! | [`error`] | [`ApiError`] and the toast text helper |
//! | [`models`] | Wire records, request payloads, catalogs, date helpers |
//! | [`auth`] | Login, registration, OTP password reset, logout |
//!
//! The remaining endpoint groups (`clients`, `products`, `packages`,
//! `enquiries`, `dashboard`, `profile`) add methods to [`ApiClient`] and
//! export nothing else.

pub mod auth;
pub mod client;
mod clients;
mod dashboard;
mod enquiries;
pub mod error;
pub mod models;
mod packages;
mod products;
mod profile;

pub use client::{ApiClient, ApiResult, Envelope};
pub use error::ApiError;
pub use models::*;

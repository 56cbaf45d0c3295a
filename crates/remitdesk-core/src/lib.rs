//! Domain layer for remitdesk.
//!
//! Holds the record shapes served by the admin API, the normalized error
//! types, configuration and the simulation switch, the session-storage logic,
//! and the traits that the infrastructure layer implements.

pub mod agent;
pub mod api;
pub mod auth;
pub mod business;
pub mod config;
pub mod currency;
pub mod error;
pub mod navigation;
pub mod repository;
pub mod session;
pub mod settlement;
pub mod transaction;
pub mod user;
pub mod virtual_account;

pub use api::{ApiError, ApiErrorKind, ApiResponse, ApiResult};
pub use error::RemitError;

/// A type alias for `Result<T, RemitError>`.
pub type Result<T> = std::result::Result<T, RemitError>;

//! REST backend access.
//!
//! - `client`: the public/private [`ApiClient`] pair and error normalization
//! - `auth_service`: [`remitdesk_core::auth::AuthService`] over `/auth/*`
//! - `admin_repository`: [`remitdesk_core::repository::AdminRepository`] over the entity endpoints

mod admin_repository;
mod auth_service;
mod client;

pub use admin_repository::HttpAdminRepository;
pub use auth_service::HttpAuthService;
pub use client::ApiClient;

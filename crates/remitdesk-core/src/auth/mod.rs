//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `dto`: request and response bodies for the auth endpoints
//! - `password`: password policy shared by signup and reset flows
//! - `service`: the [`AuthService`] trait implemented by the HTTP client and the simulator

mod dto;
pub mod password;
mod service;

pub use dto::{
    AuthPayload, AuthUser, ForgotPasswordRequest, LoginRequest, LogoutRequest, RegisterRequest,
    ResetPasswordRequest,
};
pub use service::AuthService;

/// Role assigned when the backend does not report one.
pub const DEFAULT_ROLE: &str = "admin";

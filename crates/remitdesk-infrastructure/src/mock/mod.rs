//! In-process simulators.
//!
//! Serve auth and admin data when no backend is configured. Both add a fixed
//! delay per call so the console behaves like it is talking to a network;
//! tests shorten it with `with_latency`.

mod auth;
mod data;
pub mod fixtures;

pub use auth::{
    FORGOT_PASSWORD_MESSAGE, INVALID_OTP_MESSAGE, MockAuthService, RESET_PASSWORD_MESSAGE,
};
pub use data::MockAdminRepository;

use std::time::Duration;

/// OTP accepted by the simulated login.
pub const MOCK_OTP: &str = "123456";

pub const AUTH_LATENCY: Duration = Duration::from_millis(800);
pub const LOGOUT_LATENCY: Duration = Duration::from_millis(300);
pub const DATA_LATENCY: Duration = Duration::from_millis(400);

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

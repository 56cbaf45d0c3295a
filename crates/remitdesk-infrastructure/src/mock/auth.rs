//! Simulated authentication.

use super::{AUTH_LATENCY, LOGOUT_LATENCY, MOCK_OTP, simulate_latency};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;
use remitdesk_core::auth::password::MIN_LENGTH;
use remitdesk_core::auth::{
    AuthPayload, AuthService, AuthUser, DEFAULT_ROLE, ForgotPasswordRequest, LoginRequest,
    LogoutRequest, RegisterRequest, ResetPasswordRequest,
};
use remitdesk_core::session::{SessionStorage, TokenClaims};
use remitdesk_core::{ApiError, ApiErrorKind, ApiResponse, ApiResult};
use serde_json::{Value, json};
use std::time::Duration;

pub const INVALID_OTP_MESSAGE: &str = "Invalid OTP. Use 123456 for mock login.";
pub const FORGOT_PASSWORD_MESSAGE: &str =
    "If an account exists with this email, you will receive a password reset link shortly.";
pub const RESET_PASSWORD_MESSAGE: &str =
    "Your password has been reset successfully. You can now log in.";

/// [`AuthService`] that accepts any credentials with the fixed OTP.
///
/// Successful login and registration synthesize a three-part token
/// (`mock.<base64 claims>.<random>`) and write it to the session store, just
/// as the real flow ends up doing.
#[derive(Debug, Clone)]
pub struct MockAuthService {
    storage: SessionStorage,
    latency: Duration,
    logout_latency: Duration,
}

impl MockAuthService {
    pub fn new(storage: SessionStorage) -> Self {
        Self {
            storage,
            latency: AUTH_LATENCY,
            logout_latency: LOGOUT_LATENCY,
        }
    }

    /// Uses `latency` for every call, logout included.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self.logout_latency = latency;
        self
    }

    /// Creates a session for `email` and stores it.
    fn open_session(&self, email: &str) -> (String, String) {
        let user_id = format!("mock_admin_{}", chrono::Utc::now().timestamp_millis());
        let token = mock_token(&user_id, email);
        if let Err(e) = self.storage.store_auth(&token, &user_id, DEFAULT_ROLE, email) {
            tracing::warn!("Mock session could not be stored: {}", e);
        }
        (user_id, token)
    }
}

/// `mock.<base64 {"sub","email"}>.<random base36>`
fn mock_token(user_id: &str, email: &str) -> String {
    let claims = TokenClaims {
        sub: user_id.to_string(),
        email: Some(email.to_string()),
    };
    let payload = serde_json::to_vec(&claims).unwrap_or_default();
    format!("mock.{}.{}", STANDARD.encode(payload), random_base36(11))
}

fn random_base36(len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, request: &LoginRequest) -> ApiResult<ApiResponse<AuthPayload>> {
        simulate_latency(self.latency).await;

        if request.email.trim().is_empty() || request.password.trim().is_empty() {
            return Err(ApiError::validation("Email and password are required."));
        }

        let otp = request.otp.as_deref().unwrap_or_default().trim();
        if otp != MOCK_OTP {
            return Err(
                ApiError::new(ApiErrorKind::Validation, Some(401), INVALID_OTP_MESSAGE)
                    .with_errors(vec![Value::from("OTP must be 123456")]),
            );
        }

        let (user_id, token) = self.open_session(&request.email);
        tracing::info!(user_id = %user_id, "Mock login succeeded");

        let payload = AuthPayload {
            user: Some(AuthUser {
                id: Some(user_id),
                email: Some(request.email.clone()),
                user_type: Some(DEFAULT_ROLE.to_string()),
                role: Some(DEFAULT_ROLE.to_string()),
            }),
            ..AuthPayload::default()
        };
        Ok(ApiResponse::success(payload, "Login successful", 200).with_token(token))
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<ApiResponse<AuthPayload>> {
        simulate_latency(self.latency).await;

        let (user_id, token) = self.open_session(&request.email);
        tracing::info!(user_id = %user_id, "Mock account created");

        let payload = AuthPayload {
            user: Some(AuthUser {
                id: Some(user_id),
                email: Some(request.email.clone()),
                user_type: Some(DEFAULT_ROLE.to_string()),
                role: None,
            }),
            ..AuthPayload::default()
        };
        Ok(ApiResponse::success(payload, "Account created successfully", 201).with_token(token))
    }

    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> ApiResult<ApiResponse<Value>> {
        simulate_latency(self.latency).await;

        if request.email.trim().is_empty() {
            return Err(ApiError::validation("Email is required."));
        }

        // Same answer for every address.
        let data = json!({
            "message": "If an account exists with this email, you will receive a reset link."
        });
        Ok(ApiResponse::success(data, FORGOT_PASSWORD_MESSAGE, 200))
    }

    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> ApiResult<ApiResponse<Value>> {
        simulate_latency(self.latency).await;

        if request.token.trim().is_empty() {
            return Err(ApiError::validation(
                "Invalid or expired reset link. Please request a new one.",
            ));
        }
        if request.new_password.chars().count() < MIN_LENGTH {
            return Err(ApiError::validation("Password must be at least 8 characters."));
        }

        Ok(ApiResponse::success(Value::Null, RESET_PASSWORD_MESSAGE, 200))
    }

    async fn logout(&self, _request: &LogoutRequest) -> ApiResult<ApiResponse<Value>> {
        simulate_latency(self.logout_latency).await;

        if let Err(e) = self.storage.clear_auth() {
            tracing::warn!("Mock logout could not clear session: {}", e);
        }
        Ok(ApiResponse::success(Value::Null, "Logged out successfully", 200))
    }
}

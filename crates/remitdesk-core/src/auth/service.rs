//! Auth service trait.

use super::dto::{
    AuthPayload, ForgotPasswordRequest, LoginRequest, LogoutRequest, RegisterRequest,
    ResetPasswordRequest,
};
use crate::api::{ApiResponse, ApiResult};
use async_trait::async_trait;
use serde_json::Value;

/// Backend (or simulated) authentication endpoints.
///
/// Implementations return `Err` with a normalized [`crate::ApiError`] for
/// every failure, including validation rejections from the simulator.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ApiResult<ApiResponse<AuthPayload>>;

    async fn register(&self, request: &RegisterRequest) -> ApiResult<ApiResponse<AuthPayload>>;

    /// Always reports success for a well-formed email, whether or not an
    /// account exists.
    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> ApiResult<ApiResponse<Value>>;

    async fn reset_password(&self, request: &ResetPasswordRequest)
    -> ApiResult<ApiResponse<Value>>;

    async fn logout(&self, request: &LogoutRequest) -> ApiResult<ApiResponse<Value>>;
}

//! Auth endpoints over HTTP.

use super::client::ApiClient;
use async_trait::async_trait;
use remitdesk_core::auth::{
    AuthPayload, AuthService, ForgotPasswordRequest, LoginRequest, LogoutRequest,
    RegisterRequest, ResetPasswordRequest,
};
use remitdesk_core::{ApiResponse, ApiResult};
use serde_json::Value;

/// [`AuthService`] backed by `/auth/*`.
///
/// Login, registration and the password-reset pair go through the public
/// client; logout carries the bearer token through the private one.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    public: ApiClient,
    private: ApiClient,
}

impl HttpAuthService {
    pub fn new(public: ApiClient, private: ApiClient) -> Self {
        Self { public, private }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, request: &LoginRequest) -> ApiResult<ApiResponse<AuthPayload>> {
        self.public.post(&["auth", "login"], Some(request)).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<ApiResponse<AuthPayload>> {
        self.public.post(&["auth", "register"], Some(request)).await
    }

    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> ApiResult<ApiResponse<Value>> {
        self.public
            .post(&["auth", "forgot-password"], Some(request))
            .await
    }

    async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> ApiResult<ApiResponse<Value>> {
        self.public
            .post(&["auth", "reset-password"], Some(request))
            .await
    }

    async fn logout(&self, request: &LogoutRequest) -> ApiResult<ApiResponse<Value>> {
        self.private.post(&["auth", "logout"], Some(request)).await
    }
}

//! Sign-in, sign-up, password reset and sign-out flows.
//!
//! Each flow validates locally, calls the composed [`AuthService`], updates
//! the session store and [`AuthState`], then navigates. Failures come back as
//! [`ApiError`]s whose `message` is ready to show.

use crate::auth_state::AuthState;
use remitdesk_core::auth::password::MIN_LENGTH;
use remitdesk_core::auth::{
    AuthPayload, AuthService, DEFAULT_ROLE, ForgotPasswordRequest, LoginRequest, LogoutRequest,
    RegisterRequest, ResetPasswordRequest,
};
use remitdesk_core::navigation::{DASHBOARD_PATH, LOGIN_PATH, Navigator};
use remitdesk_core::session::{SessionIdentity, SessionStorage};
use remitdesk_core::{ApiError, ApiResponse, ApiResult};
use std::sync::Arc;

pub const CREDENTIALS_REQUIRED_MESSAGE: &str = "Email and password are required.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please try again.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Unable to create account. Please try again.";
pub const TEMP_PASSWORD_TOO_SHORT_MESSAGE: &str =
    "Temporary password must be at least 8 characters.";
pub const PASSWORDS_DO_NOT_MATCH_MESSAGE: &str = "Passwords do not match.";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 8 characters.";
pub const INVALID_RESET_LINK_MESSAGE: &str =
    "Invalid or expired reset link. Please request a new one.";

/// Reset token sent when simulating a reset without a link.
const SIMULATED_RESET_TOKEN: &str = "mock";

/// Clears the loading flag when a flow ends, however it ends.
struct LoadingGuard<'a>(&'a AuthState);

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a AuthState) -> Self {
        state.set_loading(true);
        Self(state)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

pub struct AuthUseCase {
    service: Arc<dyn AuthService>,
    storage: SessionStorage,
    state: Arc<AuthState>,
    navigator: Arc<dyn Navigator>,
    use_mock: bool,
}

impl AuthUseCase {
    pub fn new(
        service: Arc<dyn AuthService>,
        storage: SessionStorage,
        state: Arc<AuthState>,
        navigator: Arc<dyn Navigator>,
        use_mock: bool,
    ) -> Self {
        Self {
            service,
            storage,
            state,
            navigator,
            use_mock,
        }
    }

    /// Signs in and navigates to the dashboard.
    ///
    /// Blank credentials are rejected before any request is made.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        otp: Option<&str>,
    ) -> ApiResult<SessionIdentity> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(ApiError::validation(CREDENTIALS_REQUIRED_MESSAGE));
        }

        let _loading = LoadingGuard::start(&self.state);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            otp: otp.map(str::to_string),
        };
        let response = self.service.login(&request).await?;

        let identity = self.establish_session(&response, email, INVALID_CREDENTIALS_MESSAGE)?;
        tracing::info!(user_id = %identity.user_id, role = %identity.role, "Signed in");
        Ok(identity)
    }

    /// Creates an account with a temporary password and signs in with it.
    pub async fn register(&self, email: &str, password: &str) -> ApiResult<SessionIdentity> {
        if password.chars().count() < MIN_LENGTH {
            return Err(ApiError::validation(TEMP_PASSWORD_TOO_SHORT_MESSAGE));
        }

        let _loading = LoadingGuard::start(&self.state);
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            first_name: None,
            last_name: None,
            user_type: None,
        };
        let response = self.service.register(&request).await?;

        let identity = self.establish_session(&response, email, SIGNUP_FAILED_MESSAGE)?;
        tracing::info!(user_id = %identity.user_id, "Account created");
        Ok(identity)
    }

    /// Requests a reset link. Returns the message to show.
    pub async fn forgot_password(&self, email: &str) -> ApiResult<String> {
        let _loading = LoadingGuard::start(&self.state);
        let response = self
            .service
            .forgot_password(&ForgotPasswordRequest {
                email: email.trim().to_string(),
            })
            .await?;
        Ok(response.message)
    }

    /// Sets a new password from a reset link and returns to the login screen.
    ///
    /// In simulation mode a missing token is tolerated.
    pub async fn reset_password(
        &self,
        token: Option<&str>,
        new_password: &str,
        confirm_password: &str,
    ) -> ApiResult<String> {
        if new_password != confirm_password {
            return Err(ApiError::validation(PASSWORDS_DO_NOT_MATCH_MESSAGE));
        }
        if new_password.chars().count() < MIN_LENGTH {
            return Err(ApiError::validation(PASSWORD_TOO_SHORT_MESSAGE));
        }
        let token = match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => token,
            None if self.use_mock => SIMULATED_RESET_TOKEN,
            None => return Err(ApiError::validation(INVALID_RESET_LINK_MESSAGE)),
        };

        let _loading = LoadingGuard::start(&self.state);
        let response = self
            .service
            .reset_password(&ResetPasswordRequest {
                token: token.to_string(),
                new_password: new_password.to_string(),
                confirm_password: Some(confirm_password.to_string()),
            })
            .await?;

        self.navigator.navigate(LOGIN_PATH);
        Ok(response.message)
    }

    /// Signs out and returns to the login screen.
    ///
    /// Against a real backend the logout endpoint is called first; its
    /// failure is logged and does not keep the operator signed in.
    pub async fn logout(&self) {
        let user_id = self.storage.user_id();
        if !self.use_mock && !user_id.is_empty() {
            if let Err(e) = self.service.logout(&LogoutRequest { user_id }).await {
                tracing::warn!("Backend logout failed: {}", e);
            }
        }

        self.state.logout();
        self.navigator.navigate(LOGIN_PATH);
        tracing::info!("Signed out");
    }

    /// Stores the session from a successful login/registration response,
    /// re-reads the auth flag from the store and opens the dashboard.
    ///
    /// An envelope flagged as an error counts as having no token.
    fn establish_session(
        &self,
        response: &ApiResponse<AuthPayload>,
        submitted_email: &str,
        failure_message: &str,
    ) -> ApiResult<SessionIdentity> {
        let payload = response.data.as_ref();
        let token = response
            .token
            .as_deref()
            .or_else(|| payload.and_then(|p| p.token.as_deref()))
            .filter(|t| !t.is_empty() && !response.error);

        let Some(token) = token else {
            let message = if response.message.is_empty() {
                failure_message.to_string()
            } else {
                response.message.clone()
            };
            return Err(ApiError::rejected(response.status.unwrap_or(200), message));
        };

        let identity = SessionIdentity {
            user_id: payload
                .and_then(AuthPayload::user_id)
                .unwrap_or(DEFAULT_ROLE)
                .to_string(),
            role: payload
                .and_then(AuthPayload::role)
                .unwrap_or(DEFAULT_ROLE)
                .to_string(),
            email: payload
                .and_then(AuthPayload::email)
                .unwrap_or(submitted_email)
                .to_string(),
        };
        if let Err(e) =
            self.storage
                .store_auth(token, &identity.user_id, &identity.role, &identity.email)
        {
            tracing::warn!("Failed to store session: {}", e);
        }

        if !self.state.hydrate() {
            tracing::warn!("Backend returned a token the session store does not accept");
            if let Err(e) = self.storage.clear_auth() {
                tracing::warn!("Failed to clear rejected session: {}", e);
            }
            return Err(ApiError::rejected(
                response.status.unwrap_or(200),
                failure_message,
            ));
        }
        self.navigator.navigate(DASHBOARD_PATH);
        Ok(identity)
    }
}

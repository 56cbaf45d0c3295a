//! HTTP client pair.
//!
//! [`ApiClient::public`] sends only the static headers and is used for the
//! unauthenticated auth endpoints. [`ApiClient::private`] also attaches the
//! stored bearer token and tears the session down when the backend answers
//! 401 or 403.
//!
//! Every failure leaves this module as an [`ApiError`]:
//!
//! | cause | kind | status | message |
//! |---|---|---|---|
//! | 401/403 on the private client | `SessionExpired` | the status | "Session expired. Please login again." |
//! | timeout | `Timeout` | none | "Request timeout. Please try again." |
//! | no response | `Network` | none | "Network error. Please check your connection." |
//! | other error status | `Rejected` | the status | body `message`, or "An error occurred" |
//! | undecodable success body | `Decode` | the status | "An error occurred" |

use remitdesk_core::api::GENERIC_ERROR_MESSAGE;
use remitdesk_core::config::EnvSettings;
use remitdesk_core::navigation::{LOGIN_PATH, Navigator};
use remitdesk_core::session::SessionStorage;
use remitdesk_core::{ApiError, ApiErrorKind, ApiResult, RemitError};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Credentials and the expiry hook of the private client.
#[derive(Clone)]
struct SessionBinding {
    storage: SessionStorage,
    navigator: Arc<dyn Navigator>,
}

impl SessionBinding {
    /// Forced logout: clear the store and send the operator to the login screen.
    fn expire(&self, status: StatusCode) {
        tracing::warn!(status = status.as_u16(), "Session rejected by backend, signing out");
        if let Err(e) = self.storage.clear_auth() {
            tracing::warn!("Failed to clear session after {}: {}", status, e);
        }
        self.navigator.navigate(LOGIN_PATH);
    }
}

/// JSON client bound to one backend base URL.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    locale: String,
    channel: String,
    session: Option<SessionBinding>,
}

impl ApiClient {
    /// Client for unauthenticated endpoints.
    pub fn public(settings: &EnvSettings) -> Result<Self, RemitError> {
        Self::build(settings, None)
    }

    /// Client for authenticated endpoints.
    ///
    /// Reads the token from `storage` on every request, so a login that
    /// happens after construction is picked up.
    pub fn private(
        settings: &EnvSettings,
        storage: SessionStorage,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, RemitError> {
        Self::build(settings, Some(SessionBinding { storage, navigator }))
    }

    fn build(settings: &EnvSettings, session: Option<SessionBinding>) -> Result<Self, RemitError> {
        let mut base_url = Url::parse(settings.api_url.trim())
            .map_err(|e| RemitError::config(format!("Invalid API URL '{}': {}", settings.api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(RemitError::config(format!(
                "API URL '{}' cannot be used as a base",
                settings.api_url
            )));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.api_timeout_secs))
            .build()
            .map_err(|e| RemitError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            locale: settings.locale.clone(),
            channel: settings.channel.clone(),
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_private(&self) -> bool {
        self.session.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        self.send::<(), T>(Method::GET, segments, None).await
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, segments, body).await
    }

    pub async fn patch<B, T>(&self, segments: &[&str], body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, segments, Some(body)).await
    }

    /// Builds `<base>/<segment>/<segment>...`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::network("API URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        match &self.session {
            Some(binding) => binding
                .storage
                .request_headers_with_bearer(&self.locale, &self.channel),
            None => vec![
                ("Content-Type", "application/json".to_string()),
                ("lg", self.locale.clone()),
                ("ch", self.channel.clone()),
            ],
        }
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!(method = %method, path = url.path(), "Sending request");

        let mut request = self.http.request(method, url);
        for (name, value) in self.headers() {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await.map_err(transport_error)?;
            let bytes: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
            return serde_json::from_slice(bytes).map_err(|e| {
                ApiError::new(ApiErrorKind::Decode, Some(status.as_u16()), GENERIC_ERROR_MESSAGE)
                    .with_errors(vec![Value::from(e.to_string())])
            });
        }

        if let Some(binding) = &self.session {
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                binding.expire(status);
                return Err(ApiError::session_expired(status.as_u16()));
            }
        }

        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok());
        tracing::debug!(status = status.as_u16(), "Request rejected");
        Err(ApiError::from_body(status.as_u16(), body))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("private", &self.is_private())
            .finish()
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::timeout(err.to_string())
    } else {
        ApiError::network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remitdesk_core::navigation::NoopNavigator;

    fn settings(url: &str) -> EnvSettings {
        EnvSettings {
            api_url: url.to_string(),
            ..EnvSettings::default()
        }
    }

    #[test]
    fn test_endpoint_joins_segments_under_base_path() {
        let client = ApiClient::public(&settings("https://api.remit.test/v1")).unwrap();

        let url = client.endpoint(&["users", "42", "approve-kyc"]).unwrap();
        assert_eq!(url.as_str(), "https://api.remit.test/v1/users/42/approve-kyc");

        let url = client.endpoint(&["users", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "https://api.remit.test/v1/users/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        for url in ["", "not a url", "mailto:ops@remit.test"] {
            let err = ApiClient::public(&settings(url)).unwrap_err();
            assert!(matches!(err, RemitError::Config(_)), "url {:?}", url);
        }
    }

    #[test]
    fn test_private_client_headers_follow_store() {
        let storage = SessionStorage::in_memory();
        let client = ApiClient::private(
            &settings("https://api.remit.test"),
            storage.clone(),
            Arc::new(NoopNavigator),
        )
        .unwrap();
        assert!(client.headers().iter().all(|(name, _)| *name != "Authorization"));

        storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();
        assert!(client
            .headers()
            .contains(&("Authorization", "Bearer a.b.c".to_string())));
    }
}

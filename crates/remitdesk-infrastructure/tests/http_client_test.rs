//! Contract tests for the HTTP client pair and the HTTP-backed services.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET | `/users` | `list_users_*`, `private_client_*` |
//! | GET | `/users/{id}` | `find_user_*` |
//! | POST | `/users/{id}/approve-kyc` | `apply_*` |
//! | PATCH | `/transactions/{id}/status` | `apply_*` |
//! | POST | `/auth/login` | `login_*` |

use remitdesk_core::auth::{AuthService, LoginRequest};
use remitdesk_core::config::EnvSettings;
use remitdesk_core::navigation::Navigator;
use remitdesk_core::repository::{AdminAction, AdminRepository};
use remitdesk_core::session::SessionStorage;
use remitdesk_core::transaction::TransactionStatus;
use remitdesk_core::{ApiErrorKind, api};
use remitdesk_infrastructure::{ApiClient, HttpAdminRepository, HttpAuthService};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}

struct Harness {
    storage: SessionStorage,
    navigator: Arc<RecordingNavigator>,
    repository: HttpAdminRepository,
    auth: HttpAuthService,
}

fn settings(url: &str, timeout_secs: u64) -> EnvSettings {
    EnvSettings {
        api_url: url.to_string(),
        api_timeout_secs: timeout_secs,
        ..EnvSettings::default()
    }
}

fn harness_for(url: &str, timeout_secs: u64) -> Harness {
    let settings = settings(url, timeout_secs);
    let storage = SessionStorage::in_memory();
    let navigator = Arc::new(RecordingNavigator::default());
    let public = ApiClient::public(&settings).unwrap();
    let private = ApiClient::private(&settings, storage.clone(), navigator.clone()).unwrap();

    Harness {
        storage,
        navigator,
        repository: HttpAdminRepository::new(private.clone()),
        auth: HttpAuthService::new(public, private),
    }
}

fn harness(server: &MockServer) -> Harness {
    harness_for(&server.uri(), 5)
}

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "firstName": "Chidi",
        "lastName": "Okafor",
        "email": "chidi.okafo@example.com",
        "kycStatus": "Tier 2 Verified"
    })
}

// ── GET /users ───────────────────────────────────────────────────────

#[tokio::test]
async fn list_users_unwraps_envelope_and_sends_static_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("lg", "en"))
        .and(header("ch", "web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": false,
            "data": [user_json("1"), user_json("2")],
            "message": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = harness(&server).repository.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].id, "2");
}

#[tokio::test]
async fn private_client_attaches_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("Authorization", "Bearer a.b.c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server);
    h.storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();

    assert!(h.repository.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn private_client_unauthorized_clears_session_and_navigates_to_login() {
    for status in [401, 403] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let h = harness(&server);
        h.storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();

        let err = h.repository.list_users().await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::SessionExpired);
        assert_eq!(err.status, Some(status));
        assert_eq!(err.message, api::SESSION_EXPIRED_MESSAGE);
        assert!(!h.storage.check_token());
        assert!(h.storage.identity().is_none());
        assert_eq!(h.navigator.visited(), vec!["/".to_string()]);
    }
}

#[tokio::test]
async fn rejected_status_carries_body_message_and_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": true,
            "message": "Search term too short",
            "errors": ["search"]
        })))
        .mount(&server)
        .await;

    let err = harness(&server).repository.list_users().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Rejected);
    assert_eq!(err.status, Some(422));
    assert_eq!(err.message, "Search term too short");
    assert_eq!(err.errors, vec![json!("search")]);
    assert!(err.data.is_some());
}

#[tokio::test]
async fn rejected_status_without_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = harness(&server).repository.list_users().await.unwrap_err();
    assert_eq!(err.message, api::GENERIC_ERROR_MESSAGE);
    assert_eq!(err.errors, vec![json!(api::GENERIC_ERROR_MESSAGE)]);
    assert!(err.data.is_none());
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "nope"})))
        .mount(&server)
        .await;

    let err = harness(&server).repository.list_users().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
    assert_eq!(err.status, Some(200));
}

#[tokio::test]
async fn slow_backend_is_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = harness_for(&server.uri(), 1)
        .repository
        .list_users()
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Timeout);
    assert_eq!(err.message, api::TIMEOUT_MESSAGE);
    assert!(err.is_no_response());
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let h = harness_for(&format!("http://127.0.0.1:{}", port), 5);
    let err = h.repository.list_users().await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.message, api::NETWORK_ERROR_MESSAGE);
    assert_eq!(err.status, None);
    assert!(h.navigator.visited().is_empty());
}

// ── GET /users/{id} ──────────────────────────────────────────────────

#[tokio::test]
async fn find_user_404_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": user_json("1")})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let h = harness(&server);
    assert_eq!(h.repository.find_user("1").await.unwrap().unwrap().id, "1");
    assert!(h.repository.find_user("999").await.unwrap().is_none());
}

// ── mutations ────────────────────────────────────────────────────────

#[tokio::test]
async fn apply_posts_to_action_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/3/approve-kyc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "KYC approved"})))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = harness(&server)
        .repository
        .apply(&AdminAction::ApproveKyc {
            user_id: "3".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(receipt.message, "KYC approved");
    assert!(!receipt.simulated);
}

#[tokio::test]
async fn apply_patches_transaction_status_with_empty_reply() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/transactions/123457/status"))
        .and(body_json(json!({"status": "Completed"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = harness(&server)
        .repository
        .apply(&AdminAction::UpdateTransactionStatus {
            transaction_id: "123457".to_string(),
            status: TransactionStatus::Completed,
        })
        .await
        .unwrap();

    assert_eq!(receipt.status, "Completed");
    assert_eq!(receipt.message, "transactions 123457 updated");
}

// ── POST /auth/login ─────────────────────────────────────────────────

#[tokio::test]
async fn login_goes_through_public_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "ops@remit.test", "password": "pw", "otp": "1"})))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid credentials",
            "errors": []
        })))
        .mount(&server)
        .await;

    let h = harness(&server);
    h.storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();

    let err = h
        .auth
        .login(&LoginRequest {
            email: "ops@remit.test".to_string(),
            password: "pw".to_string(),
            otp: Some("1".to_string()),
        })
        .await
        .unwrap_err();

    // A 401 on the public client is a plain rejection: nothing is cleared.
    assert_eq!(err.kind, ApiErrorKind::Rejected);
    assert_eq!(err.message, "Invalid credentials");
    assert!(h.storage.check_token());
    assert!(h.navigator.visited().is_empty());
}

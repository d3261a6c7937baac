//! Integration tests for API handlers
//!
//! The router runs against an in-memory store and a canned range lookup,
//! so no database or network access is needed.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use crate::config::AppConfig;
use crate::routes::create_router;
use crate::state::AppState;
use passguard_core::breach::{BreachChecker, RangeLookup};
use passguard_core::domain::StatusCheck;
use passguard_core::store::StatusStore;
use passguard_core::{CoreError, Result};

// SHA-1("password") = 5BAA6 1E4C9B93F3F0682250B6CF8331B7EE68FD8
const PASSWORD_RANGE: &str =
    "1D2DA4053E34E76F6576ED1DA63134B5E2A:2\r\n1E4C9B93F3F0682250B6CF8331B7EE68FD8:9545824\r\n";

#[derive(Default)]
struct MemoryStore {
    checks: Mutex<Vec<StatusCheck>>,
    failing: bool,
}

#[async_trait]
impl StatusStore for MemoryStore {
    async fn insert(&self, check: &StatusCheck) -> Result<()> {
        if self.failing {
            return Err(CoreError::Database(sqlx::Error::PoolTimedOut));
        }
        self.checks.lock().unwrap().push(check.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        if self.failing {
            return Err(CoreError::Database(sqlx::Error::PoolTimedOut));
        }
        let checks = self.checks.lock().unwrap();
        Ok(checks.iter().take(limit as usize).cloned().collect())
    }
}

enum Canned {
    Body(&'static str),
    Unavailable,
}

struct CannedLookup {
    response: Canned,
    calls: AtomicUsize,
}

impl CannedLookup {
    fn new(response: Canned) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl RangeLookup for CannedLookup {
    async fn fetch_range(&self, _prefix: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.response {
            Canned::Body(body) => Ok(body.to_string()),
            Canned::Unavailable => Err(CoreError::DependencyUnavailable(
                "request timed out".to_string(),
            )),
        }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://localhost/test".to_string(),
        db_name: None,
        cors_origins: None,
        hibp_api_url: "http://localhost".to_string(),
        hibp_timeout_secs: 1,
        hibp_user_agent: "test".to_string(),
    }
}

fn app_with(store: Arc<MemoryStore>, lookup: Arc<CannedLookup>) -> Router {
    let state = AppState::from_parts(store, BreachChecker::new(lookup), test_config());
    create_router(state)
}

fn default_app() -> Router {
    app_with(
        Arc::new(MemoryStore::default()),
        CannedLookup::new(Canned::Body(PASSWORD_RANGE)),
    )
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{"client_name": "probe"}"#;
        let req: passguard_core::domain::StatusCheckCreate = serde_json::from_str(json).unwrap();
        assert_eq!(req.client_name, "probe");
    }

    #[test]
    fn test_status_check_serializes_iso_timestamp() {
        let check = StatusCheck::new("probe");
        let json = serde_json::to_value(&check).unwrap();
        let ts = json["timestamp"].as_str().unwrap();
        let parsed = chrono::DateTime::parse_from_rfc3339(ts).unwrap();
        assert_eq!(parsed.with_timezone(&chrono::Utc), check.timestamp);
    }
}

#[cfg(test)]
mod status_tests {
    use super::*;

    #[tokio::test]
    async fn test_root() {
        let (status, body) = send(default_app(), "GET", "/api/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello World");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let store = Arc::new(MemoryStore::default());
        let lookup = CannedLookup::new(Canned::Body(""));

        let (status, created) = send(
            app_with(store.clone(), lookup.clone()),
            "POST",
            "/api/status",
            Some(json!({"client_name": "probe"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["client_name"], "probe");

        send(
            app_with(store.clone(), lookup.clone()),
            "POST",
            "/api/status",
            Some(json!({"client_name": "probe"})),
        )
        .await;

        let (status, listed) = send(app_with(store, lookup), "GET", "/api/status", None).await;
        assert_eq!(status, StatusCode::OK);

        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().any(|c| c["id"] == created["id"]));
        assert_ne!(listed[0]["id"], listed[1]["id"]);
    }

    #[tokio::test]
    async fn test_create_accepts_empty_name() {
        let (status, created) = send(
            default_app(),
            "POST",
            "/api/status",
            Some(json!({"client_name": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["client_name"], "");
    }

    #[tokio::test]
    async fn test_create_missing_field_is_bad_request() {
        let (status, _) = send(default_app(), "POST", "/api/status", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_store_failure_is_server_error() {
        let store = Arc::new(MemoryStore {
            failing: true,
            ..Default::default()
        });
        let app = app_with(store, CannedLookup::new(Canned::Body("")));

        let (status, body) = send(app, "GET", "/api/status", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "database_error");
    }
}

#[cfg(test)]
mod breach_tests {
    use super::*;

    #[tokio::test]
    async fn test_breached_password() {
        let (status, body) = send(
            default_app(),
            "POST",
            "/api/check-password-breach",
            Some(json!({"password": "password"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_breached"], true);
        assert_eq!(body["breach_count"], 9545824);
        assert_eq!(body["source"], "HaveIBeenPwned");
        assert!(body["message"].as_str().unwrap().contains("9,545,824"));
    }

    #[tokio::test]
    async fn test_unknown_password() {
        let (status, body) = send(
            default_app(),
            "POST",
            "/api/check-password-breach",
            Some(json!({"password": "Q7m!vR2#tL9@wK4$"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_breached"], false);
        assert_eq!(body["breach_count"], 0);
    }

    #[tokio::test]
    async fn test_empty_password_makes_no_lookup() {
        let lookup = CannedLookup::new(Canned::Body(PASSWORD_RANGE));
        let app = app_with(Arc::new(MemoryStore::default()), lookup.clone());

        let (status, body) = send(
            app,
            "POST",
            "/api/check-password-breach",
            Some(json!({"password": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Password cannot be empty");
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_503() {
        let app = app_with(
            Arc::new(MemoryStore::default()),
            CannedLookup::new(Canned::Unavailable),
        );

        let (status, body) = send(
            app,
            "POST",
            "/api/check-password-breach",
            Some(json!({"password": "password"})),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.get("is_breached").is_none());
        assert_eq!(body["message"], "Unable to check password breach database");
    }

    #[tokio::test]
    async fn test_malformed_range_is_500_without_password() {
        let app = app_with(
            Arc::new(MemoryStore::default()),
            CannedLookup::new(Canned::Body("1E4C9B93F3F0682250B6CF8331B7EE68FD8:lots")),
        );

        let (status, body) = send(
            app,
            "POST",
            "/api/check-password-breach",
            Some(json!({"password": "password"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("password\""));
        assert!(!body.to_string().contains("5BAA6"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/check-password-breach")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = default_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[cfg(test)]
mod server_tests {
    use super::*;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check_response() {
        let server = TestServer::new(default_app()).unwrap();
        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_password() {
        let server = TestServer::new(default_app()).unwrap();
        let response = server
            .post("/api/analyze-password")
            .json(&json!({"password": "password"}))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["strength"], "weak");
        assert_eq!(body["is_breached"], true);
        assert_eq!(body["length"], 8);
    }

    #[tokio::test]
    async fn test_analyze_empty_password() {
        let server = TestServer::new(default_app()).unwrap();
        let response = server
            .post("/api/analyze-password")
            .json(&json!({"password": ""}))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}

//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for building and sending requests through the full axum
//! router, plus helpers for signing in and reading JSON bodies.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{self, header, Method, Request, Response, StatusCode};
use axum::Router;
use console_server::api::{create_router, AppState};
use console_server::config::Config;
use console_server::permissions::RolePermissionMap;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

// ============================================================================
// Test App
// ============================================================================

/// A test application wrapping the full axum router.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a test app with the built-in role map and no login delay.
    pub fn new() -> Self {
        Self::with_config(Config::default_for_test())
    }

    /// Create a test app with a custom config.
    pub fn with_config(config: Config) -> Self {
        let roles = config.load_role_map().expect("Failed to load role map");
        Self::with_roles(config, roles)
    }

    /// Create a test app with a custom role map.
    pub fn with_roles(config: Config, roles: RolePermissionMap) -> Self {
        let state = AppState::new(config, roles);
        let router = create_router(state.clone());
        Self { router, state }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }

    /// Send a JSON body, optionally authenticated.
    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        let mut builder = Self::request(Method::POST, uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = builder
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.oneshot(request).await
    }

    /// Send an authenticated GET.
    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        let mut builder = Self::request(Method::GET, uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = builder.body(Body::empty()).expect("Failed to build request");
        self.oneshot(request).await
    }

    /// Sign in and return the session token.
    pub async fn login(&self, admin_type: &str, role: &str) -> String {
        let response = self
            .post_json(
                "/auth/login",
                None,
                json!({
                    "username": "test_user",
                    "password": "hunter2",
                    "admin_type": admin_type,
                    "role": role,
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK, "login as {admin_type}:{role}");
        let body = body_to_json(response).await;
        body["token"]
            .as_str()
            .expect("login response has token")
            .to_string()
    }
}

// ============================================================================
// Body helpers
// ============================================================================

/// Collect a response body and parse it as JSON.
pub async fn body_to_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response as JSON: {e}\nBody: {preview}")
    })
}

/// Extract the permission tokens from a session body.
pub fn permission_tokens(session: &Value) -> Vec<String> {
    session["permissions"]
        .as_array()
        .expect("session has permissions")
        .iter()
        .map(|p| p.as_str().expect("permission is a string").to_string())
        .collect()
}

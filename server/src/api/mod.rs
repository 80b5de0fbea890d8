//! API Router and Application State
//!
//! Central routing configuration and shared state.

pub mod access;
mod error;

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderValue,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    auth::{self, require_auth, require_permission, SessionStore},
    config::Config,
    permissions::{PermissionName, RolePermissionMap},
};

pub use error::{ApiError, ApiResult};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Role grants, read-only after startup
    pub roles: Arc<RolePermissionMap>,
    /// Active sessions
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, roles: RolePermissionMap) -> Self {
        let sessions = SessionStore::new(config.session_ttl());
        Self {
            config: Arc::new(config),
            roles: Arc::new(roles),
            sessions: Arc::new(sessions),
        }
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = match &config.cors_allowed_origins {
        Some(origins) => AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        ),
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    // Role catalog (requires owner:roles:view)
    let role_routes = Router::new()
        .route("/api/permissions", get(access::list_permissions))
        .route("/api/roles", get(access::list_roles))
        .route("/api/roles/{admin_type}/{role}", get(access::get_role))
        .layer(from_fn(require_permission(
            PermissionName::OwnerRolesView.token(),
        )));

    // Protected routes that require a session
    let protected_routes = Router::new()
        .route("/api/me", get(access::get_me))
        .route("/api/me/modules", get(access::get_modules))
        .route("/api/access/check", post(access::check_access))
        .merge(role_routes)
        .layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Auth routes (pass state for middleware)
        .nest("/auth", auth::router(state.clone()))
        .merge(protected_routes)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        // State
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
    /// Number of stored sessions
    sessions: usize,
    /// Number of registered roles
    roles: usize,
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        sessions: state.sessions.len(),
        roles: state.roles.len(),
    })
}

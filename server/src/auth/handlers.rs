//! Authentication HTTP Handlers
//!
//! Login is simulated: any well-formed username and non-empty password are
//! accepted after a configurable delay. The returned token is an opaque
//! session id, not a signed credential.

use std::sync::LazyLock;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use console_common::{AdminType, SessionUser, UserProfile};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::error::{AuthError, AuthResult};
use crate::api::AppState;
use crate::permissions::{Permission, Session};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Username validation regex.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.]{3,32}$").unwrap());

/// Login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username (3-32 lowercase alphanumeric, `_` or `.`).
    #[validate(regex(path = *USERNAME_REGEX))]
    pub username: String,
    /// Password (any non-empty value is accepted).
    #[validate(length(min = 1, max = 128))]
    pub password: String,
    /// Admin type to sign in as.
    pub admin_type: String,
    /// Role within the admin type.
    #[validate(length(min = 1, max = 64))]
    pub role: String,
    /// Display name (optional, defaults to username).
    #[validate(length(max = 64))]
    pub display_name: Option<String>,
}

/// Context switch request.
#[derive(Debug, Deserialize, Validate)]
pub struct SwitchContextRequest {
    /// Admin type to switch to.
    pub admin_type: String,
    /// Role within the new admin type.
    #[validate(length(min = 1, max = 64))]
    pub role: String,
}

/// Session as exposed to API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub user: UserProfile,
    pub admin_type: AdminType,
    pub role: String,
    pub permissions: Vec<Permission>,
    /// Whether the session holds the super-admin token.
    pub super_admin: bool,
    pub established_at: DateTime<Utc>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            user: UserProfile::from(&session.user),
            admin_type: session.admin_type,
            role: session.role.clone(),
            permissions: session.permissions.clone(),
            super_admin: session.is_super_admin(),
            established_at: session.established_at,
        }
    }
}

/// Login response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    pub session: SessionView,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_admin_type(value: &str) -> AuthResult<AdminType> {
    value
        .parse()
        .map_err(|e: console_common::Error| AuthError::Validation(e.to_string()))
}

// ============================================================================
// Handlers
// ============================================================================

/// Sign in as a role within an admin type.
///
/// POST /auth/login
#[tracing::instrument(skip(state, body), fields(username = %body.username, role = %body.role))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>> {
    body.validate()?;
    let admin_type = parse_admin_type(&body.admin_type)?;

    let delay = state.config.mock_login_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let user = SessionUser {
        id: Uuid::now_v7(),
        display_name: body
            .display_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| body.username.clone()),
        username: body.username,
        signed_in_at: Utc::now(),
    };

    let session = Session::establish(user, admin_type, &body.role, &state.roles);
    if session.permissions.is_empty() {
        tracing::info!(admin_type = %admin_type, "Login rejected: role grants nothing");
        return Err(AuthError::UnknownRole(session.role_key().to_string()));
    }

    state.sessions.insert(session.clone());
    tracing::info!(
        session_id = %session.id,
        admin_type = %admin_type,
        permissions = session.permissions.len(),
        "Session established"
    );

    Ok(Json(LoginResponse {
        token: session.id.to_string(),
        session: SessionView::from(&session),
    }))
}

/// Switch the current session to another admin type and role.
///
/// POST /auth/switch
#[tracing::instrument(skip(state, session, body), fields(session_id = %session.id))]
pub async fn switch_context(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<SwitchContextRequest>,
) -> AuthResult<Json<SessionView>> {
    body.validate()?;
    let admin_type = parse_admin_type(&body.admin_type)?;

    let switched = session.switch_context(admin_type, &body.role, &state.roles);
    if switched.permissions.is_empty() {
        return Err(AuthError::UnknownRole(switched.role_key().to_string()));
    }

    if !state.sessions.replace(switched.clone()) {
        return Err(AuthError::InvalidSession);
    }

    tracing::info!(
        from = %session.role_key(),
        to = %switched.role_key(),
        "Session context switched"
    );

    Ok(Json(SessionView::from(&switched)))
}

/// End the current session.
///
/// POST /auth/logout
#[tracing::instrument(skip(state, session), fields(session_id = %session.id))]
pub async fn logout(State(state): State<AppState>, session: Session) -> StatusCode {
    state.sessions.remove(session.id);
    tracing::info!("Session ended");
    StatusCode::NO_CONTENT
}

//! Access control endpoints.
//!
//! Session introspection, navigation, ad-hoc permission checks and the
//! read-only role catalog.

use axum::extract::{Path, State};
use axum::Json;
use console_common::AdminType;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::auth::SessionView;
use crate::navigation::{self, Module};
use crate::permissions::{Permission, PermissionName, RoleKey, Session};

// ============================================================================
// Request/Response Types
// ============================================================================

/// How the `required` list of an access check is combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Exactly one token must be listed and granted.
    Single,
    /// At least one listed token must be granted.
    #[default]
    Any,
    /// Every listed token must be granted.
    All,
}

#[derive(Debug, Deserialize)]
pub struct AccessCheckRequest {
    pub required: Vec<String>,
    #[serde(default)]
    pub mode: CheckMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessCheckResponse {
    pub allowed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModulesResponse {
    pub admin_type: AdminType,
    pub modules: Vec<Module>,
}

/// Catalog entry for a registered permission.
#[derive(Debug, Serialize, Deserialize)]
pub struct PermissionEntry {
    pub name: PermissionName,
    pub token: String,
    pub description: String,
    pub wildcard: bool,
}

/// Permissions granted by one role.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoleGrant {
    pub admin_type: String,
    pub role: String,
    pub permissions: Vec<Permission>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/me
pub async fn get_me(session: Session) -> Json<SessionView> {
    Json(SessionView::from(&session))
}

/// Sidebar for the session's admin type, filtered by its permissions.
///
/// GET /api/me/modules
#[tracing::instrument(skip(session), fields(session_id = %session.id))]
pub async fn get_modules(session: Session) -> Json<ModulesResponse> {
    let catalog = navigation::catalog(session.admin_type);
    let modules = navigation::visible_modules(&catalog, &session);

    Json(ModulesResponse {
        admin_type: session.admin_type,
        modules,
    })
}

/// Evaluate a permission requirement against the current session.
///
/// POST /api/access/check
#[tracing::instrument(skip(session, body), fields(session_id = %session.id, mode = ?body.mode))]
pub async fn check_access(
    session: Session,
    Json(body): Json<AccessCheckRequest>,
) -> ApiResult<Json<AccessCheckResponse>> {
    let allowed = match body.mode {
        CheckMode::Single => {
            let [required] = body.required.as_slice() else {
                return Err(ApiError::Validation(
                    "single mode requires exactly one permission".to_string(),
                ));
            };
            session.has_permission(required)
        }
        CheckMode::Any => session.has_any_permission(&body.required),
        CheckMode::All => session.has_all_permissions(&body.required),
    };

    tracing::debug!(allowed, required = ?body.required, "Access checked");
    Ok(Json(AccessCheckResponse { allowed }))
}

/// The registered permission catalog.
///
/// GET /api/permissions
pub async fn list_permissions() -> Json<Vec<PermissionEntry>> {
    let entries = PermissionName::all()
        .iter()
        .map(|name| PermissionEntry {
            name: *name,
            token: name.token().to_string(),
            description: name.description().to_string(),
            wildcard: name.is_wildcard(),
        })
        .collect();

    Json(entries)
}

/// Every registered role and its grants.
///
/// GET /api/roles
pub async fn list_roles(State(state): State<AppState>) -> Json<Vec<RoleGrant>> {
    let grants = state
        .roles
        .roles()
        .into_iter()
        .map(|key| role_grant(&state, key))
        .collect();

    Json(grants)
}

/// Grants of one role. Unregistered roles grant nothing.
///
/// GET /api/roles/{admin_type}/{role}
pub async fn get_role(
    State(state): State<AppState>,
    Path((admin_type, role)): Path<(String, String)>,
) -> Json<RoleGrant> {
    Json(role_grant(&state, &RoleKey::new(admin_type, role)))
}

fn role_grant(state: &AppState, key: &RoleKey) -> RoleGrant {
    RoleGrant {
        admin_type: key.admin_type.clone(),
        role: key.role.clone(),
        permissions: state.roles.get(key).map(<[Permission]>::to_vec).unwrap_or_default(),
    }
}

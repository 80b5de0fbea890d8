//! Session-scoped permission checks.
//!
//! A `Session` carries the permission snapshot derived for a user at login
//! or context switch. It is passed explicitly to every check; there is no
//! ambient "current user".

use chrono::{DateTime, Utc};
use console_common::{AdminType, SessionUser};
use thiserror::Error;
use uuid::Uuid;

use super::evaluator;
use super::registry::Permission;
use super::roles::{RoleKey, RolePermissionMap};

/// Token that grants every check on a session, regardless of what is
/// required.
pub const SUPER_ADMIN_PERMISSION: &str = "owner:*";

/// Permission check errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Session lacks the required permission.
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    /// Session satisfies none of the listed permissions.
    #[error("Missing any of: {}", .0.join(", "))]
    MissingAny(Vec<String>),
}

/// An authenticated console session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque session identifier.
    pub id: Uuid,
    /// The signed-in user.
    pub user: SessionUser,
    /// Active admin type.
    pub admin_type: AdminType,
    /// Active role within `admin_type`.
    pub role: String,
    /// Snapshot of the role's grants taken when the context was established.
    pub permissions: Vec<Permission>,
    /// When the current context was established.
    pub established_at: DateTime<Utc>,
}

impl Session {
    /// Derive a session for `user` acting as `role` within `admin_type`.
    ///
    /// The role's grants are copied once; an unregistered role yields an
    /// empty snapshot.
    #[must_use]
    pub fn establish(
        user: SessionUser,
        admin_type: AdminType,
        role: &str,
        roles: &RolePermissionMap,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            user,
            admin_type,
            role: role.to_string(),
            permissions: roles.permissions_for(admin_type.as_str(), role),
            established_at: Utc::now(),
        }
    }

    /// Switch to another admin type and role, keeping the session id and
    /// user. The permission snapshot is re-derived.
    #[must_use]
    pub fn switch_context(
        &self,
        admin_type: AdminType,
        role: &str,
        roles: &RolePermissionMap,
    ) -> Self {
        Self {
            id: self.id,
            user: self.user.clone(),
            admin_type,
            role: role.to_string(),
            permissions: roles.permissions_for(admin_type.as_str(), role),
            established_at: Utc::now(),
        }
    }

    /// The role key this session acts under.
    #[must_use]
    pub fn role_key(&self) -> RoleKey {
        RoleKey::new(self.admin_type.as_str(), self.role.as_str())
    }

    /// Whether the snapshot holds the literal super-admin token.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.permissions.iter().any(|p| p == SUPER_ADMIN_PERMISSION)
    }

    /// Check a single required permission.
    #[must_use]
    pub fn has_permission(&self, required: &str) -> bool {
        self.is_super_admin() || evaluator::has_permission(&self.permissions, required)
    }

    /// Check that at least one of `required` is granted.
    ///
    /// Super admins pass even when `required` is empty.
    #[must_use]
    pub fn has_any_permission<R: AsRef<str>>(&self, required: &[R]) -> bool {
        self.is_super_admin() || evaluator::has_any_permission(&self.permissions, required)
    }

    /// Check that every one of `required` is granted.
    #[must_use]
    pub fn has_all_permissions<R: AsRef<str>>(&self, required: &[R]) -> bool {
        self.is_super_admin() || evaluator::has_all_permissions(&self.permissions, required)
    }

    /// Require a single permission, for route and action guards.
    pub fn require_permission(&self, required: &str) -> Result<(), PermissionError> {
        if self.has_permission(required) {
            Ok(())
        } else {
            tracing::debug!(
                session_id = %self.id,
                role = %self.role_key(),
                required,
                "Permission denied"
            );
            Err(PermissionError::MissingPermission(required.to_string()))
        }
    }

    /// Require at least one of `required`.
    pub fn require_any_permission<R: AsRef<str>>(
        &self,
        required: &[R],
    ) -> Result<(), PermissionError> {
        if self.has_any_permission(required) {
            Ok(())
        } else {
            let required: Vec<String> = required.iter().map(|r| r.as_ref().to_string()).collect();
            tracing::debug!(
                session_id = %self.id,
                role = %self.role_key(),
                ?required,
                "Permission denied"
            );
            Err(PermissionError::MissingAny(required))
        }
    }
}

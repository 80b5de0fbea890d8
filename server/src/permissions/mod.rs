//! Permission system types and utilities.
//!
//! Role-based access control for the console:
//! - Registry: the closed catalog of permission tokens
//! - Roles: which tokens each `(admin type, role)` pair grants
//! - Evaluator: exact and trailing-wildcard matching over token sets
//! - Session: per-user snapshot with the super-admin fast path

pub mod evaluator;
pub mod registry;
pub mod roles;
pub mod session;

pub use evaluator::{has_all_permissions, has_any_permission, has_permission, matches_permission};
pub use registry::{Permission, PermissionName};
pub use roles::{permissions_for_role, RoleKey, RoleMapError, RolePermissionMap};
pub use session::{PermissionError, Session, SUPER_ADMIN_PERMISSION};

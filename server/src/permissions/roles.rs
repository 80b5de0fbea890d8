//! Role to permission mapping.
//!
//! Each `(admin type, role)` pair maps to the permissions that role grants.
//! Lookups for pairs that are not registered yield no permissions rather
//! than an error.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

use console_common::AdminType;
use thiserror::Error;

use super::registry::{self, Permission, PermissionName};

/// Composite lookup key for a role within an admin type.
///
/// The admin type is kept as a string so that unknown values can still be
/// looked up (and simply find nothing).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleKey {
    pub admin_type: String,
    pub role: String,
}

impl RoleKey {
    pub fn new(admin_type: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            admin_type: admin_type.into(),
            role: role.into(),
        }
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.admin_type, self.role)
    }
}

/// Errors raised when loading or validating a grant table.
#[derive(Debug, Error)]
pub enum RoleMapError {
    /// Top-level key is not a known admin type.
    #[error("Unknown admin type: {0}")]
    UnknownAdminType(String),

    /// A role grants a token that is not in the registry.
    #[error("Role {role} grants unregistered permission '{permission}'")]
    UnknownPermission { role: RoleKey, permission: String },

    /// A role grants a permission from another admin type's namespace.
    #[error("Role {role} grants '{permission}' outside its namespace")]
    ForeignNamespace { role: RoleKey, permission: String },

    /// The grant table could not be parsed.
    #[error("Invalid role map: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only mapping from role to granted permissions.
#[derive(Debug, Clone, Default)]
pub struct RolePermissionMap {
    grants: HashMap<RoleKey, Vec<Permission>>,
}

static BUILTIN: LazyLock<RolePermissionMap> = LazyLock::new(RolePermissionMap::builtin);

/// Permissions granted to `role` within `admin_type` by the built-in table.
///
/// Returns an empty list when the pair is not registered.
#[must_use]
pub fn permissions_for_role(admin_type: &str, role: &str) -> Vec<Permission> {
    BUILTIN.permissions_for(admin_type, role)
}

impl RolePermissionMap {
    /// The grant table shipped with the console.
    #[must_use]
    pub fn builtin() -> Self {
        use PermissionName as P;

        let table: &[(AdminType, &str, &[PermissionName])] = &[
            (AdminType::Brand, "admin", &[P::BrandAll]),
            (
                AdminType::Brand,
                "manager",
                &[
                    P::BrandDashboardView,
                    P::BrandAnalyticsView,
                    P::BrandCampaignsView,
                    P::BrandCampaignsManage,
                    P::BrandCouponsView,
                    P::BrandCouponsManage,
                    P::BrandTeamView,
                    P::BrandBillingView,
                ],
            ),
            (
                AdminType::Brand,
                "marketer",
                &[
                    P::BrandDashboardView,
                    P::BrandAnalyticsView,
                    P::BrandCampaignsView,
                    P::BrandCampaignsManage,
                    P::BrandCouponsView,
                ],
            ),
            (
                AdminType::Brand,
                "viewer",
                &[
                    P::BrandDashboardView,
                    P::BrandAnalyticsView,
                    P::BrandCampaignsView,
                    P::BrandCouponsView,
                ],
            ),
            (AdminType::Agency, "admin", &[P::AgencyAll]),
            (
                AdminType::Agency,
                "manager",
                &[
                    P::AgencyDashboardView,
                    P::AgencyBrandsAll,
                    P::AgencyTemplatesView,
                    P::AgencyTemplatesManage,
                    P::AgencyTeamView,
                    P::AgencyReportsView,
                ],
            ),
            (
                AdminType::Agency,
                "designer",
                &[
                    P::AgencyDashboardView,
                    P::AgencyBrandsView,
                    P::AgencyTemplatesView,
                    P::AgencyTemplatesManage,
                ],
            ),
            (AdminType::Owner, "super_admin", &[P::OwnerAll]),
            (
                AdminType::Owner,
                "admin",
                &[
                    P::OwnerDashboardView,
                    P::OwnerTenantsView,
                    P::OwnerTenantsManage,
                    P::OwnerUsersView,
                    P::OwnerUsersManage,
                    P::OwnerRolesView,
                    P::OwnerCouponsView,
                    P::OwnerCouponsManage,
                    P::OwnerFaqsView,
                    P::OwnerFaqsManage,
                    P::OwnerSubscriptionsView,
                    P::OwnerSubscriptionsManage,
                    P::OwnerBillingView,
                ],
            ),
            (
                AdminType::Owner,
                "support",
                &[
                    P::OwnerDashboardView,
                    P::OwnerTenantsView,
                    P::OwnerUsersView,
                    P::OwnerFaqsView,
                    P::OwnerFaqsManage,
                    P::OwnerSubscriptionsView,
                ],
            ),
        ];

        let grants = table
            .iter()
            .map(|(admin_type, role, perms)| {
                (
                    RoleKey::new(admin_type.as_str(), *role),
                    perms.iter().copied().map(Permission::from).collect(),
                )
            })
            .collect();

        Self { grants }
    }

    /// Parse a grant table of the form
    /// `{"<admin_type>": {"<role>": ["<token>", ...]}}`.
    ///
    /// Every token must be registered and belong to the role's admin type.
    pub fn from_json(json: &str) -> Result<Self, RoleMapError> {
        let raw: BTreeMap<String, BTreeMap<String, Vec<String>>> = serde_json::from_str(json)?;

        let mut grants = HashMap::new();
        for (admin_type, roles) in raw {
            admin_type
                .parse::<AdminType>()
                .map_err(|_| RoleMapError::UnknownAdminType(admin_type.clone()))?;

            for (role, tokens) in roles {
                let key = RoleKey::new(admin_type.clone(), role);
                let perms = tokens.into_iter().map(Permission::from).collect();
                grants.insert(key, perms);
            }
        }

        let map = Self { grants };
        map.validate()?;
        Ok(map)
    }

    /// Check referential integrity of every grant.
    pub fn validate(&self) -> Result<(), RoleMapError> {
        for (key, perms) in &self.grants {
            if key.admin_type.parse::<AdminType>().is_err() {
                return Err(RoleMapError::UnknownAdminType(key.admin_type.clone()));
            }

            for perm in perms {
                if !registry::is_registered(perm.as_str()) {
                    return Err(RoleMapError::UnknownPermission {
                        role: key.clone(),
                        permission: perm.to_string(),
                    });
                }

                let namespace = perm.as_str().split(':').next().unwrap_or_default();
                if namespace != key.admin_type {
                    return Err(RoleMapError::ForeignNamespace {
                        role: key.clone(),
                        permission: perm.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Permissions granted to `role` within `admin_type`.
    #[must_use]
    pub fn permissions_for(&self, admin_type: &str, role: &str) -> Vec<Permission> {
        self.get(&RoleKey::new(admin_type, role))
            .map(<[Permission]>::to_vec)
            .unwrap_or_default()
    }

    /// Borrow the grant list for `key`, if registered.
    #[must_use]
    pub fn get(&self, key: &RoleKey) -> Option<&[Permission]> {
        self.grants.get(key).map(Vec::as_slice)
    }

    /// All registered roles, sorted by admin type then role.
    #[must_use]
    pub fn roles(&self) -> Vec<&RoleKey> {
        let mut keys: Vec<&RoleKey> = self.grants.keys().collect();
        keys.sort();
        keys
    }

    /// Roles registered for one admin type.
    #[must_use]
    pub fn roles_for(&self, admin_type: AdminType) -> Vec<&RoleKey> {
        self.roles()
            .into_iter()
            .filter(|key| key.admin_type == admin_type.as_str())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

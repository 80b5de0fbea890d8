//! Permission registry.
//!
//! The closed catalog of permission tokens known to the console. Tokens are
//! namespaced by admin type and resource, e.g. `brand:billing:view`, or end in
//! a wildcard segment, e.g. `owner:*`.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Grammar for a permission token: two or more colon-separated segments,
/// the last of which may be `*`.
static TOKEN_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9_]+(?::[a-z0-9_]+)*:(?:[a-z0-9_]+|\*)$")
        .expect("permission token grammar is a valid regex")
});

macro_rules! permission_catalog {
    ($( $(#[$meta:meta])* $name:ident => $token:literal, $desc:literal; )+) => {
        /// Symbolic name of a registered permission.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum PermissionName {
            $( $(#[$meta])* $name, )+
        }

        impl PermissionName {
            /// Returns the token string for this permission.
            #[must_use]
            pub const fn token(&self) -> &'static str {
                match self {
                    $( Self::$name => $token, )+
                }
            }

            /// Returns a human-readable description of the permission.
            #[must_use]
            pub const fn description(&self) -> &'static str {
                match self {
                    $( Self::$name => $desc, )+
                }
            }

            /// Returns every registered permission, in catalog order.
            #[must_use]
            pub const fn all() -> &'static [Self] {
                &[ $( Self::$name, )+ ]
            }
        }
    };
}

permission_catalog! {
    // === Brand ===
    /// Every brand permission
    BrandAll => "brand:*", "Full access to the brand console";
    BrandDashboardView => "brand:dashboard:view", "View the brand dashboard";
    BrandAnalyticsView => "brand:analytics:view", "View brand analytics";
    BrandCampaignsView => "brand:campaigns:view", "View campaigns";
    BrandCampaignsManage => "brand:campaigns:manage", "Create and edit campaigns";
    BrandCouponsView => "brand:coupons:view", "View brand coupons";
    BrandCouponsManage => "brand:coupons:manage", "Create and edit brand coupons";
    BrandTeamView => "brand:team:view", "View brand team members";
    BrandTeamManage => "brand:team:manage", "Invite and remove brand team members";
    BrandBillingView => "brand:billing:view", "View brand invoices and plan";
    BrandBillingManage => "brand:billing:manage", "Change brand plan and payment method";
    BrandSettingsManage => "brand:settings:manage", "Edit brand settings";

    // === Agency ===
    /// Every agency permission
    AgencyAll => "agency:*", "Full access to the agency console";
    AgencyDashboardView => "agency:dashboard:view", "View the agency dashboard";
    /// Every action on managed brands
    AgencyBrandsAll => "agency:brands:*", "Full access to managed brands";
    AgencyBrandsView => "agency:brands:view", "View managed brands";
    AgencyBrandsManage => "agency:brands:manage", "Edit managed brands";
    AgencyBrandsDelete => "agency:brands:delete", "Remove managed brands";
    AgencyTemplatesView => "agency:templates:view", "View templates";
    AgencyTemplatesManage => "agency:templates:manage", "Create and edit templates";
    AgencyTeamView => "agency:team:view", "View agency team members";
    AgencyTeamManage => "agency:team:manage", "Invite and remove agency team members";
    AgencyBillingView => "agency:billing:view", "View agency invoices";
    AgencyReportsView => "agency:reports:view", "View cross-brand reports";

    // === Owner ===
    /// Every platform owner permission
    OwnerAll => "owner:*", "Full platform access";
    OwnerDashboardView => "owner:dashboard:view", "View the platform dashboard";
    OwnerTenantsView => "owner:tenants:view", "View tenants";
    OwnerTenantsManage => "owner:tenants:manage", "Create, suspend and edit tenants";
    OwnerUsersView => "owner:users:view", "View platform users";
    OwnerUsersManage => "owner:users:manage", "Edit and deactivate platform users";
    OwnerRolesView => "owner:roles:view", "View roles and their permissions";
    OwnerRolesManage => "owner:roles:manage", "Edit roles and their permissions";
    OwnerCouponsView => "owner:coupons:view", "View platform coupons";
    OwnerCouponsManage => "owner:coupons:manage", "Create and edit platform coupons";
    OwnerFaqsView => "owner:faqs:view", "View FAQ entries";
    OwnerFaqsManage => "owner:faqs:manage", "Create and edit FAQ entries";
    OwnerSubscriptionsView => "owner:subscriptions:view", "View subscriptions";
    OwnerSubscriptionsManage => "owner:subscriptions:manage", "Change and cancel subscriptions";
    OwnerBillingView => "owner:billing:view", "View platform revenue and invoices";
    OwnerBillingManage => "owner:billing:manage", "Issue refunds and adjust invoices";
    OwnerSettingsManage => "owner:settings:manage", "Edit platform settings";
}

impl PermissionName {
    /// Whether this permission is a wildcard grant.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.token().ends_with(":*")
    }
}

impl fmt::Display for PermissionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Look up the symbolic name of a registered token.
#[must_use]
pub fn lookup(token: &str) -> Option<PermissionName> {
    PermissionName::all()
        .iter()
        .copied()
        .find(|name| name.token() == token)
}

/// Whether `token` is part of the catalog.
#[must_use]
pub fn is_registered(token: &str) -> bool {
    lookup(token).is_some()
}

/// Whether `token` follows the `segment(":"segment)+` grammar.
#[must_use]
pub fn is_well_formed(token: &str) -> bool {
    TOKEN_GRAMMAR.is_match(token)
}

/// A permission token as carried by sessions and role grants.
///
/// Tokens are opaque strings compared by value. A token outside the
/// catalog is still representable; it simply never matches anything
/// but itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this token ends in the `:*` wildcard segment.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.0.ends_with(":*")
    }

    /// The catalog entry for this token, if any.
    #[must_use]
    pub fn name(&self) -> Option<PermissionName> {
        lookup(&self.0)
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PermissionName> for Permission {
    fn from(name: PermissionName) -> Self {
        Self(Cow::Borrowed(name.token()))
    }
}

impl From<&'static str> for Permission {
    fn from(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }
}

impl From<String> for Permission {
    fn from(token: String) -> Self {
        Self(Cow::Owned(token))
    }
}

impl PartialEq<str> for Permission {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Permission {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

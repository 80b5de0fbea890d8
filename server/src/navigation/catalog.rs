//! Built-in sidebar for each admin type.

use console_common::AdminType;

use super::module::Module;

/// The full, unfiltered sidebar for `admin_type`.
#[must_use]
pub fn catalog(admin_type: AdminType) -> Vec<Module> {
    match admin_type {
        AdminType::Brand => brand(),
        AdminType::Agency => agency(),
        AdminType::Owner => owner(),
    }
}

fn brand() -> Vec<Module> {
    vec![
        Module::link("brand.dashboard", "Dashboard", "/brand")
            .requires_any(&["brand:dashboard:view"]),
        Module::link("brand.analytics", "Analytics", "/brand/analytics")
            .requires_any(&["brand:analytics:view"]),
        Module::group(
            "brand.marketing",
            "Marketing",
            vec![
                Module::link("brand.campaigns", "Campaigns", "/brand/campaigns")
                    .requires_any(&["brand:campaigns:view", "brand:campaigns:manage"]),
                Module::link("brand.coupons", "Coupons", "/brand/coupons")
                    .requires_any(&["brand:coupons:view", "brand:coupons:manage"]),
            ],
        ),
        Module::link("brand.team", "Team", "/brand/team")
            .requires_any(&["brand:team:view", "brand:team:manage"]),
        Module::link("brand.billing", "Billing", "/brand/billing")
            .requires_any(&["brand:billing:view", "brand:billing:manage"]),
        Module::link("brand.settings", "Settings", "/brand/settings")
            .requires_any(&["brand:settings:manage"]),
        Module::link("brand.components", "Components", "/components"),
    ]
}

fn agency() -> Vec<Module> {
    vec![
        Module::link("agency.dashboard", "Dashboard", "/agency")
            .requires_any(&["agency:dashboard:view"]),
        Module::group(
            "agency.brands",
            "Brands",
            vec![
                Module::link("agency.brands.list", "All brands", "/agency/brands")
                    .requires_any(&["agency:brands:view"]),
                Module::link("agency.brands.new", "Onboard brand", "/agency/brands/new")
                    .requires_all(&["agency:brands:view", "agency:brands:manage"]),
            ],
        ),
        Module::link("agency.templates", "Templates", "/agency/templates")
            .requires_any(&["agency:templates:view", "agency:templates:manage"]),
        Module::link("agency.reports", "Reports", "/agency/reports")
            .requires_any(&["agency:reports:view"]),
        Module::link("agency.team", "Team", "/agency/team")
            .requires_any(&["agency:team:view", "agency:team:manage"]),
        Module::link("agency.billing", "Billing", "/agency/billing")
            .requires_any(&["agency:billing:view"]),
        Module::link("agency.components", "Components", "/components"),
    ]
}

fn owner() -> Vec<Module> {
    vec![
        Module::link("owner.dashboard", "Dashboard", "/owner")
            .requires_any(&["owner:dashboard:view"]),
        Module::link("owner.tenants", "Tenants", "/owner/tenants")
            .requires_any(&["owner:tenants:view", "owner:tenants:manage"]),
        Module::group(
            "owner.access",
            "Access control",
            vec![
                Module::link("owner.users", "Users", "/owner/users")
                    .requires_any(&["owner:users:view", "owner:users:manage"]),
                Module::link("owner.roles", "Roles", "/owner/roles")
                    .requires_any(&["owner:roles:view", "owner:roles:manage"]),
            ],
        ),
        Module::group(
            "owner.commerce",
            "Commerce",
            vec![
                Module::link("owner.subscriptions", "Subscriptions", "/owner/subscriptions")
                    .requires_any(&["owner:subscriptions:view", "owner:subscriptions:manage"]),
                Module::link("owner.coupons", "Coupons", "/owner/coupons")
                    .requires_any(&["owner:coupons:view", "owner:coupons:manage"]),
                Module::link("owner.billing", "Billing", "/owner/billing")
                    .requires_any(&["owner:billing:view", "owner:billing:manage"]),
            ],
        ),
        Module::link("owner.faqs", "FAQs", "/owner/faqs")
            .requires_any(&["owner:faqs:view", "owner:faqs:manage"]),
        Module::link("owner.settings", "Settings", "/owner/settings")
            .requires_any(&["owner:settings:manage"]),
        Module::link("owner.components", "Components", "/components"),
    ]
}

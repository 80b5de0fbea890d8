//! End-to-end scenarios over the public permission API.
//!
//! Run with: `cargo test --test rbac_scenarios_test`

use console_server::permissions::{
    has_all_permissions, has_any_permission, has_permission, matches_permission,
    permissions_for_role, registry, Permission, PermissionName,
};

const NOTHING: &[&str] = &[];

#[test]
fn test_super_admin_grants_owner_namespace() {
    let granted = permissions_for_role("owner", "super_admin");
    assert_eq!(granted, vec![Permission::from("owner:*")]);
    assert!(has_permission(&granted, "owner:billing:manage"));
    assert!(!has_permission(&granted, "agency:dashboard:view"));
}

#[test]
fn test_marketer_cannot_manage_team() {
    let granted = permissions_for_role("brand", "marketer");
    assert!(granted.contains(&Permission::from("brand:dashboard:view")));
    assert!(!granted.contains(&Permission::from("brand:team:manage")));
    assert!(!has_permission(&granted, "brand:team:manage"));
}

#[test]
fn test_all_requires_every_grant() {
    let granted = ["agency:brands:view", "agency:brands:manage"];
    let required = ["agency:brands:view", "agency:brands:manage"];
    assert!(has_all_permissions(&granted, &required));
    assert!(!has_all_permissions(&["agency:brands:view"], &required));
}

#[test]
fn test_resource_wildcard() {
    assert!(matches_permission("agency:brands:*", "agency:brands:delete"));
    assert!(!matches_permission("agency:brands:*", "agency:templates:view"));
}

#[test]
fn test_empty_requirement_sets() {
    for perm in PermissionName::all() {
        let granted = [perm.token()];
        assert!(!has_any_permission(&granted, NOTHING));
        assert!(has_all_permissions(&granted, NOTHING));
    }
}

#[test]
fn test_every_builtin_role_grants_registered_tokens() {
    for admin_type in ["brand", "agency", "owner"] {
        for role in ["admin", "manager", "marketer", "viewer", "designer", "super_admin", "support"] {
            for perm in permissions_for_role(admin_type, role) {
                assert!(
                    registry::is_registered(perm.as_str()),
                    "{admin_type}:{role} grants unregistered {perm}"
                );
            }
        }
    }
}

#[test]
fn test_wildcard_grants_cover_concrete_tokens() {
    let concrete: Vec<&str> = PermissionName::all()
        .iter()
        .filter(|p| !p.is_wildcard())
        .map(|p| p.token())
        .collect();

    for wildcard in PermissionName::all().iter().filter(|p| p.is_wildcard()) {
        let prefix = wildcard.token().trim_end_matches('*');
        for token in &concrete {
            assert_eq!(
                matches_permission(wildcard.token(), token),
                token.starts_with(prefix),
                "{wildcard} vs {token}"
            );
        }
    }
}

//! HTTP tests for session introspection, navigation, access checks and the
//! guarded role catalog.
//!
//! Run with: `cargo test --test access_http_test`

mod helpers;

use axum::http::StatusCode;
use console_server::config::Config;
use console_server::permissions::RolePermissionMap;
use helpers::{body_to_json, TestApp};
use serde_json::{json, Value};

fn module_keys(modules: &Value) -> Vec<String> {
    let mut keys = Vec::new();
    for module in modules.as_array().expect("modules array") {
        keys.push(module["key"].as_str().expect("module key").to_string());
        if let Some(children) = module.get("children") {
            keys.extend(module_keys(children));
        }
    }
    keys
}

async fn check(app: &TestApp, token: &str, body: Value) -> (StatusCode, Value) {
    let response = app.post_json("/api/access/check", Some(token), body).await;
    let status = response.status();
    (status, body_to_json(response).await)
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let body = body_to_json(app.get("/health", None).await).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["roles"], RolePermissionMap::builtin().len());
}

#[tokio::test]
async fn test_me_reports_session() {
    let app = TestApp::new();
    let token = app.login("agency", "designer").await;

    let body = body_to_json(app.get("/api/me", Some(&token)).await).await;
    assert_eq!(body["admin_type"], "agency");
    assert_eq!(body["role"], "designer");
    assert_eq!(body["super_admin"], false);
}

#[tokio::test]
async fn test_modules_filtered_for_marketer() {
    let app = TestApp::new();
    let token = app.login("brand", "marketer").await;

    let body = body_to_json(app.get("/api/me/modules", Some(&token)).await).await;
    assert_eq!(body["admin_type"], "brand");

    let keys = module_keys(&body["modules"]);
    assert!(keys.contains(&"brand.dashboard".to_string()));
    assert!(keys.contains(&"brand.campaigns".to_string()));
    assert!(!keys.contains(&"brand.team".to_string()));
    assert!(!keys.contains(&"brand.billing".to_string()));
}

#[tokio::test]
async fn test_modules_follow_context_switch() {
    let app = TestApp::new();
    let token = app.login("brand", "admin").await;

    let response = app
        .post_json(
            "/auth/switch",
            Some(&token),
            json!({"admin_type": "owner", "role": "support"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(app.get("/api/me/modules", Some(&token)).await).await;
    assert_eq!(body["admin_type"], "owner");
    let keys = module_keys(&body["modules"]);
    assert!(keys.iter().all(|k| k.starts_with("owner.")));
    assert!(!keys.contains(&"owner.roles".to_string()));
}

#[tokio::test]
async fn test_access_check_modes() {
    let app = TestApp::new();
    let token = app.login("agency", "manager").await;

    let (status, body) = check(
        &app,
        &token,
        json!({"required": ["agency:brands:delete"], "mode": "single"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], true);

    let (_, body) = check(
        &app,
        &token,
        json!({"required": ["agency:team:manage", "agency:team:view"], "mode": "any"}),
    )
    .await;
    assert_eq!(body["allowed"], true);

    let (_, body) = check(
        &app,
        &token,
        json!({"required": ["agency:team:manage", "agency:team:view"], "mode": "all"}),
    )
    .await;
    assert_eq!(body["allowed"], false);
}

#[tokio::test]
async fn test_access_check_empty_requirements() {
    let app = TestApp::new();
    let token = app.login("brand", "admin").await;

    let (_, body) = check(&app, &token, json!({"required": []})).await;
    assert_eq!(body["allowed"], false, "any over nothing is false");

    let (_, body) = check(&app, &token, json!({"required": [], "mode": "all"})).await;
    assert_eq!(body["allowed"], true, "all over nothing is vacuously true");
}

#[tokio::test]
async fn test_access_check_super_admin_fast_path() {
    let app = TestApp::new();
    let token = app.login("owner", "super_admin").await;

    let (_, body) = check(
        &app,
        &token,
        json!({"required": ["brand:team:manage"], "mode": "single"}),
    )
    .await;
    assert_eq!(body["allowed"], true);

    let (_, body) = check(&app, &token, json!({"required": []})).await;
    assert_eq!(body["allowed"], true);
}

#[tokio::test]
async fn test_access_check_single_requires_one_token() {
    let app = TestApp::new();
    let token = app.login("brand", "admin").await;

    let (status, body) = check(
        &app,
        &token,
        json!({"required": ["brand:team:view", "brand:team:manage"], "mode": "single"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_role_catalog_is_guarded() {
    let app = TestApp::new();
    let token = app.login("owner", "support").await;

    for uri in ["/api/roles", "/api/permissions", "/api/roles/brand/admin"] {
        let response = app.get(uri, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
        let body = body_to_json(response).await;
        assert_eq!(body["error"], "PERMISSION_DENIED");
    }

    let response = app.get("/api/roles", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_catalog_for_owner_admin() {
    let app = TestApp::new();
    let token = app.login("owner", "admin").await;

    let roles = body_to_json(app.get("/api/roles", Some(&token)).await).await;
    assert_eq!(
        roles.as_array().unwrap().len(),
        RolePermissionMap::builtin().len()
    );

    let grant = body_to_json(app.get("/api/roles/owner/super_admin", Some(&token)).await).await;
    assert_eq!(grant["permissions"], json!(["owner:*"]));

    let permissions = body_to_json(app.get("/api/permissions", Some(&token)).await).await;
    let owner_all = permissions
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["token"] == "owner:*")
        .expect("owner:* is registered");
    assert_eq!(owner_all["name"], "owner_all");
    assert_eq!(owner_all["wildcard"], true);
}

#[tokio::test]
async fn test_unknown_role_lookup_is_empty() {
    let app = TestApp::new();
    let token = app.login("owner", "super_admin").await;

    let response = app.get("/api/roles/reseller/admin", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let grant = body_to_json(response).await;
    assert_eq!(grant["admin_type"], "reseller");
    assert_eq!(grant["permissions"], json!([]));
}

#[tokio::test]
async fn test_custom_role_map() {
    let roles = RolePermissionMap::from_json(
        r#"{"owner": {"auditor": ["owner:roles:view", "owner:billing:view"]}}"#,
    )
    .unwrap();
    let app = TestApp::with_roles(Config::default_for_test(), roles);
    let token = app.login("owner", "auditor").await;

    let roles = body_to_json(app.get("/api/roles", Some(&token)).await).await;
    assert_eq!(roles.as_array().unwrap().len(), 1);

    // Built-in roles do not exist under a custom map
    let response = app
        .post_json(
            "/auth/login",
            None,
            json!({"username": "someone", "password": "pw", "admin_type": "owner", "role": "super_admin"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

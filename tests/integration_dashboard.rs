mod common;

use axum::http::StatusCode;
use common::{get, setup_test_app, setup_test_app_with_policy, token_for};
use eduportal_config::DefaultPolicy;
use eduportal_core::{Permission, Role};
use eduportal_models::SessionUser;

#[tokio::test]
async fn test_anonymous_redirects_to_login() {
    let response = get(setup_test_app(), "/dashboard/admin/users", None).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn test_anonymous_root_redirects_to_login() {
    let response = get(setup_test_app(), "/dashboard", None).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn test_admin_renders_user_management() {
    let token = token_for(&SessionUser::new(Role::Admin));

    let response = get(setup_test_app(), "/dashboard/admin/users", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["path"], "/dashboard/admin/users");
    assert_eq!(response.body["title"], "Users");
    assert_eq!(response.body["role"], "ADMIN");
    assert!(!response.body["navigation"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_faculty_redirects_to_unauthorized() {
    let token = token_for(&SessionUser::new(Role::Faculty));

    let response = get(setup_test_app(), "/dashboard/admin/users", Some(&token)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/unauthorized"));
}

#[tokio::test]
async fn test_admin_section_role_list_applies_before_rule() {
    // The grant satisfies the page rule, but students may not enter the section.
    let token = token_for(&SessionUser::new(Role::Student).with_permissions([Permission::ViewUser]));

    let response = get(setup_test_app(), "/dashboard/admin/users", Some(&token)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/unauthorized"));
}

#[tokio::test]
async fn test_hr_enters_admin_section_with_permission() {
    let token = token_for(&SessionUser::new(Role::Hr));

    let users = get(setup_test_app(), "/dashboard/admin/users", Some(&token)).await;
    assert_eq!(users.status, StatusCode::OK);

    let cms = get(setup_test_app(), "/dashboard/admin/cms", Some(&token)).await;
    assert_eq!(cms.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_system_section_requires_system_admin() {
    let admin = token_for(&SessionUser::new(Role::Admin));
    let root = token_for(&SessionUser::new(Role::SuperAdmin));

    let denied = get(setup_test_app(), "/dashboard/system", Some(&admin)).await;
    assert_eq!(denied.status, StatusCode::SEE_OTHER);
    assert_eq!(denied.location(), Some("/unauthorized"));

    let allowed = get(setup_test_app(), "/dashboard/system", Some(&root)).await;
    assert_eq!(allowed.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unregistered_view_is_not_found() {
    let token = token_for(&SessionUser::new(Role::Parent));

    let open = get(setup_test_app(), "/dashboard/events", Some(&token)).await;
    assert_eq!(open.status, StatusCode::NOT_FOUND);
    assert_eq!(open.body["error"], "No dashboard view at /dashboard/events");

    let closed = get(
        setup_test_app_with_policy(DefaultPolicy::Deny),
        "/dashboard/events",
        Some(&token),
    )
    .await;
    assert_eq!(closed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_subpath_is_not_found() {
    let root = token_for(&SessionUser::new(Role::SuperAdmin));

    let response = get(setup_test_app(), "/dashboard/leaves/approvals/42", Some(&root)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let anonymous = get(setup_test_app(), "/dashboard/admin/users/42", None).await;
    assert_eq!(anonymous.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_keeps_page_rule() {
    let student = token_for(&SessionUser::new(Role::Student));
    let denied = get(setup_test_app(), "/dashboard/leaves/approvals/", Some(&student)).await;
    assert_eq!(denied.status, StatusCode::SEE_OTHER);
    assert_eq!(denied.location(), Some("/unauthorized"));

    // HR may enter the admin section, but settings is for ADMIN only.
    let hr = token_for(&SessionUser::new(Role::Hr));
    let settings = get(setup_test_app(), "/dashboard/admin/settings/", Some(&hr)).await;
    assert_eq!(settings.status, StatusCode::SEE_OTHER);
    assert_eq!(settings.location(), Some("/unauthorized"));

    let admin = token_for(&SessionUser::new(Role::Admin));
    let rendered = get(setup_test_app(), "/dashboard/admin/settings/", Some(&admin)).await;
    assert_eq!(rendered.status, StatusCode::OK);
    assert_eq!(rendered.body["path"], "/dashboard/admin/settings");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = get(setup_test_app(), "/api-docs/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"].get("/api/navigation").is_some());
}

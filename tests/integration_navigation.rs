mod common;

use axum::http::StatusCode;
use common::{get, setup_test_app, token_for};
use eduportal_core::Role;
use eduportal_models::SessionUser;

fn paths(body: &serde_json::Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["path"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_anonymous_navigation_is_empty() {
    let response = get(setup_test_app(), "/api/navigation", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(paths(&response.body).is_empty());
}

#[tokio::test]
async fn test_invalid_token_navigation_is_empty() {
    let response = get(setup_test_app(), "/api/navigation", Some("bogus")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(paths(&response.body).is_empty());
}

#[tokio::test]
async fn test_student_navigation() {
    let token = token_for(&SessionUser::new(Role::Student));

    let response = get(setup_test_app(), "/api/navigation", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        paths(&response.body),
        vec![
            "/dashboard",
            "/dashboard/courses",
            "/dashboard/lms",
            "/dashboard/student",
            "/dashboard/profile",
        ]
    );
}

#[tokio::test]
async fn test_admin_sees_users_but_not_system() {
    let token = token_for(&SessionUser::new(Role::Admin));

    let response = get(setup_test_app(), "/api/navigation", Some(&token)).await;
    let paths = paths(&response.body);

    assert!(paths.contains(&"/dashboard/admin/users".to_string()));
    assert!(paths.contains(&"/dashboard/admin/settings".to_string()));
    assert!(!paths.contains(&"/dashboard/system".to_string()));
    assert!(!paths.contains(&"/dashboard/hr".to_string()));
}

#[tokio::test]
async fn test_navigation_items_carry_labels_and_icons() {
    let token = token_for(&SessionUser::new(Role::SuperAdmin));

    let response = get(setup_test_app(), "/api/navigation", Some(&token)).await;
    let first = &response.body["items"][0];

    assert_eq!(first["label"], "Overview");
    assert_eq!(first["path"], "/dashboard");
    assert_eq!(first["icon"], "home");
}

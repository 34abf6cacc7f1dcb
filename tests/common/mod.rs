use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use eduportal::router::init_router;
use eduportal::state::AppState;
use eduportal_auth::create_access_token;
use eduportal_config::{AccessConfig, CorsConfig, DefaultPolicy, JwtConfig};
use eduportal_models::SessionUser;
use http_body_util::BodyExt;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-at-least-32-chars".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state(policy: DefaultPolicy) -> AppState {
    AppState::new(
        test_jwt_config(),
        AccessConfig {
            default_policy: policy,
            ..AccessConfig::default()
        },
        CorsConfig::from_origins("http://localhost:5173"),
    )
}

pub fn setup_test_app() -> axum::Router {
    init_router(test_state(DefaultPolicy::Allow))
}

#[allow(dead_code)]
pub fn setup_test_app_with_policy(policy: DefaultPolicy) -> axum::Router {
    init_router(test_state(policy))
}

pub fn token_for(user: &SessionUser) -> String {
    create_access_token(user, &test_jwt_config()).unwrap()
}

pub async fn get(app: axum::Router, uri: &str, token: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    TestResponse {
        status,
        headers,
        body,
    }
}

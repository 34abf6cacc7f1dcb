use axum::{Json, extract::State, http::Uri};
use eduportal_core::AppError;
use eduportal_models::{DashboardView, ErrorResponse};
use eduportal_rbac::{dashboard_navigation, navigation::filter_navigation, normalize_path};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Render a guarded dashboard view
///
/// Reached only after the route guard lets the request through.
#[utoipa::path(
    get,
    path = "/dashboard/{path}",
    params(
        ("path" = String, Path, description = "Dashboard page, e.g. admin/users")
    ),
    responses(
        (status = 200, description = "View descriptor", body = DashboardView),
        (status = 303, description = "Redirect to the login or unauthorized page"),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No dashboard view at this path", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn render_view(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    uri: Uri,
) -> Result<Json<DashboardView>, AppError> {
    let path = normalize_path(uri.path()).to_string();
    let navigation = filter_navigation(&state.access, dashboard_navigation(), Some(&user));
    let title = dashboard_navigation()
        .into_iter()
        .find(|item| item.path == path)
        .map(|item| item.label);

    Ok(Json(DashboardView {
        path,
        title,
        role: user.role,
        navigation,
    }))
}

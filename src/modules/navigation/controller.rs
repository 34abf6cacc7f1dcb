use axum::{Json, extract::State};
use eduportal_models::NavigationResponse;
use eduportal_rbac::{dashboard_navigation, navigation::filter_navigation};
use tracing::instrument;

use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

/// Sidebar navigation for the caller
///
/// Anonymous callers get an empty list.
#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Navigation items the caller may open, in sidebar order", body = NavigationResponse),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Navigation"
)]
#[instrument(skip(state))]
pub async fn get_navigation(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
) -> Json<NavigationResponse> {
    let items = filter_navigation(&state.access, dashboard_navigation(), user.as_ref());
    Json(NavigationResponse { items })
}

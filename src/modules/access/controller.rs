use axum::{
    Json,
    extract::{Query, State},
};
use eduportal_models::{AccessCheckQuery, AccessCheckResponse};
use tracing::instrument;

use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

/// Check whether the caller may open a dashboard path
#[utoipa::path(
    get,
    path = "/api/access",
    params(AccessCheckQuery),
    responses(
        (status = 200, description = "Access decision for the path", body = AccessCheckResponse),
        (status = 400, description = "Missing path parameter"),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip(state))]
pub async fn check_access(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    Query(query): Query<AccessCheckQuery>,
) -> Json<AccessCheckResponse> {
    let decision = state.access.evaluate(&query.path, user.as_ref());

    Json(AccessCheckResponse {
        allowed: decision.is_allowed(),
        reason: decision.deny_reason().map(ToString::to_string),
        path: query.path,
    })
}

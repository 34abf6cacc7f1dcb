use axum::{Json, extract::State};
use eduportal_core::AppError;
use eduportal_models::{CurrentUserResponse, ErrorResponse};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Current user with effective permissions
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The signed-in user", body = CurrentUserResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<CurrentUserResponse>, AppError> {
    let effective = state.access.roles().effective_permissions(&user);

    Ok(Json(CurrentUserResponse {
        name: user.name,
        email: user.email,
        role: user.role,
        permissions: user.permissions.into_iter().collect(),
        effective_permissions: effective.into_iter().collect(),
    }))
}

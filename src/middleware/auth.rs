use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use eduportal_auth::session_user_from_token;
use eduportal_core::AppError;
use eduportal_models::SessionUser;
use eduportal_observability::track_token_rejected;

use crate::state::AppState;

/// Extractor that verifies the bearer token and yields the signed-in user.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionUser);

/// Like [`AuthUser`] but never rejects: a missing or invalid token yields
/// `None`, which every access check treats as anonymous.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<SessionUser>);

fn bearer_token(parts: &Parts) -> Result<Option<&str>, AppError> {
    let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(Some)
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format".to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?
            .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

        let user = session_user_from_token(token, &state.jwt_config).inspect_err(|_| {
            track_token_rejected("invalid_token");
        })?;

        Ok(AuthUser(user))
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match AuthUser::from_request_parts(parts, state).await {
            Ok(AuthUser(user)) => Ok(MaybeAuthUser(Some(user))),
            Err(e) => {
                tracing::debug!(error = %e.error, "Treating request as anonymous");
                Ok(MaybeAuthUser(None))
            }
        }
    }
}

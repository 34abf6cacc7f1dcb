//! JWT utilities for session tokens.
//!
//! The auth backend signs a token carrying the user's role and user-specific
//! permissions. The dashboard verifies it with the shared secret; a token
//! that fails verification is treated exactly like a 401 from the backend.
//!
//! # Example
//!
//! ```ignore
//! use eduportal_auth::{create_access_token, session_user_from_token};
//! use eduportal_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(&user, &config)?;
//! let restored = session_user_from_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use eduportal_config::JwtConfig;
use eduportal_core::AppError;
use eduportal_models::{SessionUser, UserPayload};

use crate::claims::Claims;

/// Creates a session token for `user`.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(user: &SessionUser, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;
    let payload = UserPayload::from(user);

    let claims = Claims {
        sub: payload.email,
        name: payload.name,
        role: payload.role,
        permissions: payload.permissions.unwrap_or_default(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a session token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or it is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}

/// Verifies a token and resolves it to a [`SessionUser`].
///
/// # Errors
///
/// Unauthorized if the token is invalid or names a role outside the registry.
pub fn session_user_from_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<SessionUser, AppError> {
    let claims = verify_token(token, jwt_config)?;
    SessionUser::try_from(claims.to_payload())
        .map_err(|e| AppError::unauthorized(format!("Invalid token role: {}", e)))
}

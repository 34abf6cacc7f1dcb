//! Authentication and access-check models.

use eduportal_core::{Permission, Role};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::users::UserPayload;

/// Response of the external auth backend on successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserResponse {
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Grants issued to this user directly.
    pub permissions: Vec<Permission>,
    /// Role permissions merged with the user's own grants.
    pub effective_permissions: Vec<Permission>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccessCheckQuery {
    /// Dashboard path to check, matched exactly
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessCheckResponse {
    pub path: String,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

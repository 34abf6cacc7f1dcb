//! JWT claim structure for session tokens.

use eduportal_models::UserPayload;
use serde::{Deserialize, Serialize};

/// Claims embedded in a session token.
///
/// Role and permissions travel as plain strings so a token minted by a newer
/// backend still decodes; validation against the registries happens when the
/// claims become a [`SessionUser`](eduportal_models::SessionUser).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User's email address (subject claim)
    pub sub: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Role name, e.g. `ADMIN`
    pub role: String,
    /// User-specific permission names
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn to_payload(&self) -> UserPayload {
        UserPayload {
            role: self.role.clone(),
            email: self.sub.clone(),
            name: self.name.clone(),
            permissions: Some(self.permissions.clone()),
        }
    }
}

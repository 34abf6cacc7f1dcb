//! Session-scoped user models.
//!
//! # Core Types
//!
//! - [`SessionUser`] - the signed-in user the access checks run against
//! - [`UserPayload`] - the lenient wire shape from the auth backend and
//!   persisted storage
//! - [`AuthStatus`] - what the guard sees: loading, anonymous, or a user

use std::collections::BTreeSet;

use eduportal_core::{Permission, Role, UnknownRole};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The signed-in user.
///
/// `permissions` holds only the server-issued, user-specific grants. Role
/// permissions are merged in at check time and never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserPayload")]
pub struct SessionUser {
    pub role: Role,
    pub permissions: BTreeSet<Permission>,
    pub name: String,
    pub email: String,
}

impl SessionUser {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            permissions: BTreeSet::new(),
            name: String::new(),
            email: String::new(),
        }
    }

    pub fn with_permissions<I>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        self.permissions.extend(permissions);
        self
    }

    pub fn with_identity(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.name = name.into();
        self.email = email.into();
        self
    }

    /// Whether the permission was granted to this user directly.
    pub fn has_granted_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }
}

/// User object as issued by the auth backend or read back from storage.
///
/// Only `role` is mandatory. Missing `permissions` means no user-specific
/// grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl TryFrom<UserPayload> for SessionUser {
    type Error = UnknownRole;

    /// Rejects unknown roles. Unknown permission names are dropped since no
    /// access rule can reference them.
    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        let role = payload.role.parse::<Role>()?;

        let permissions = payload
            .permissions
            .unwrap_or_default()
            .into_iter()
            .filter_map(|name| match name.parse::<Permission>() {
                Ok(permission) => Some(permission),
                Err(e) => {
                    warn!(error = %e, email = %payload.email, "Ignoring unknown permission");
                    None
                }
            })
            .collect();

        Ok(SessionUser {
            role,
            permissions,
            name: payload.name,
            email: payload.email,
        })
    }
}

impl From<&SessionUser> for UserPayload {
    fn from(user: &SessionUser) -> Self {
        UserPayload {
            role: user.role.as_str().to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            permissions: Some(
                user.permissions
                    .iter()
                    .map(|p| p.as_str().to_string())
                    .collect(),
            ),
        }
    }
}

/// Authentication status as observed by a guard at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus<'a> {
    /// Identity is still being restored; access must not be decided yet.
    Loading,
    Anonymous,
    Authenticated(&'a SessionUser),
}

impl<'a> AuthStatus<'a> {
    pub fn from_user(user: Option<&'a SessionUser>) -> Self {
        match user {
            Some(user) => AuthStatus::Authenticated(user),
            None => AuthStatus::Anonymous,
        }
    }

    pub fn user(&self) -> Option<&'a SessionUser> {
        match self {
            AuthStatus::Authenticated(user) => Some(user),
            AuthStatus::Loading | AuthStatus::Anonymous => None,
        }
    }
}

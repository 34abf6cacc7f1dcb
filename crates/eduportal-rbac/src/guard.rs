//! Route guard for protected views.
//!
//! A [`RouteGuard`] is configuration attached to a view: which roles may open
//! it, which permissions it needs, and optionally which registered path to
//! defer to. [`RouteGuard::evaluate`] is re-run on every request against the
//! current [`AuthStatus`]; nothing is cached between calls.
//!
//! # Example
//!
//! ```ignore
//! let guard = RouteGuard::new()
//!     .allow_roles([Role::Admin, Role::Hr])
//!     .require_permissions([Permission::ViewUser]);
//!
//! match guard.evaluate(AuthStatus::from_user(user.as_ref()), &access) {
//!     GuardOutcome::Render => render(),
//!     GuardOutcome::RedirectToLogin => redirect(login),
//!     GuardOutcome::RedirectToUnauthorized => redirect(unauthorized),
//!     GuardOutcome::Loading => placeholder(),
//! }
//! ```

use std::collections::BTreeSet;

use eduportal_core::{Permission, Role};
use eduportal_models::AuthStatus;
use tracing::debug;

use crate::evaluator::AccessControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Identity not known yet; show a placeholder.
    Loading,
    RedirectToLogin,
    RedirectToUnauthorized,
    Render,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGuard {
    pub allowed_roles: BTreeSet<Role>,
    pub required_permissions: BTreeSet<Permission>,
    pub route_path: Option<String>,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guard that only defers to the rule registered for `path`.
    pub fn for_path(path: impl Into<String>) -> Self {
        Self::new().route_path(path)
    }

    pub fn allow_roles<I>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        self.allowed_roles.extend(roles);
        self
    }

    pub fn require_permissions<I>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        self.required_permissions.extend(permissions);
        self
    }

    pub fn route_path(mut self, path: impl Into<String>) -> Self {
        self.route_path = Some(path.into());
        self
    }

    pub fn evaluate(&self, status: AuthStatus<'_>, access: &AccessControl) -> GuardOutcome {
        let user = match status {
            AuthStatus::Loading => return GuardOutcome::Loading,
            AuthStatus::Anonymous => return GuardOutcome::RedirectToLogin,
            AuthStatus::Authenticated(user) => user,
        };

        if !self.allowed_roles.is_empty()
            && !self.allowed_roles.contains(&user.role)
            && !user.is_super_admin()
        {
            debug!(role = %user.role, "Role not allowed by guard");
            return GuardOutcome::RedirectToUnauthorized;
        }

        if !self.required_permissions.is_empty()
            && !user.is_super_admin()
            && !access.roles().holds_any(user, &self.required_permissions)
        {
            debug!(role = %user.role, "Guard permissions not held");
            return GuardOutcome::RedirectToUnauthorized;
        }

        if self
            .route_path
            .as_deref()
            .is_some_and(|path| !access.can_access(path, Some(user)))
        {
            return GuardOutcome::RedirectToUnauthorized;
        }

        GuardOutcome::Render
    }
}

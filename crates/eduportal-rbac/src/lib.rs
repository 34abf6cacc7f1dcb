//! Role and permission based access control for the EduPortal dashboard.
//!
//! # Modules
//!
//! - [`role_permissions`] - role → permission grants
//! - [`rules`] - path → access rule table
//! - [`evaluator`] - the staged decision pipeline behind [`AccessControl`]
//! - [`navigation`] - sidebar catalog and filter
//! - [`guard`] - gate checks for protected views
//!
//! The free functions below run against the built-in maps with the default
//! (allow) policy for unregistered paths. Services that read
//! `ACCESS_DEFAULT_POLICY` should build their own [`AccessControl`].

use std::collections::BTreeSet;
use std::sync::LazyLock;

use eduportal_core::{Permission, Role};
use eduportal_models::{NavItem, SessionUser};

pub mod evaluator;
pub mod guard;
pub mod navigation;
pub mod role_permissions;
pub mod rules;

pub use evaluator::{AccessControl, Decision, DenyReason, Step};
pub use guard::{GuardOutcome, RouteGuard};
pub use navigation::dashboard_navigation;
pub use role_permissions::RolePermissionMap;
pub use rules::{AccessRule, RouteRules, normalize_path};

static DEFAULT_ACCESS: LazyLock<AccessControl> = LazyLock::new(AccessControl::default);

pub fn default_access() -> &'static AccessControl {
    &DEFAULT_ACCESS
}

pub fn permissions_for_role(role: Role) -> BTreeSet<Permission> {
    DEFAULT_ACCESS.permissions_for_role(role)
}

pub fn can_access(path: &str, user: Option<&SessionUser>) -> bool {
    DEFAULT_ACCESS.can_access(path, user)
}

pub fn filter_navigation<I>(items: I, user: Option<&SessionUser>) -> Vec<NavItem>
where
    I: IntoIterator<Item = NavItem>,
{
    navigation::filter_navigation(&DEFAULT_ACCESS, items, user)
}

//! Authorization evaluator.
//!
//! A decision is produced by running an ordered list of stages over the
//! request. Each stage either settles the outcome or passes to the next:
//!
//! 1. `authenticated` - no user denies
//! 2. `registered` - a path without a rule is settled by the default policy
//! 3. `role_requirement` - role must match, super admins are let through
//! 4. `permission_requirement` - at least one required permission, super
//!    admins are let through
//!
//! A request no stage settles is allowed.

use std::collections::BTreeSet;
use std::fmt;

use eduportal_config::{AccessConfig, DefaultPolicy};
use eduportal_core::{Permission, Role};
use eduportal_models::SessionUser;
use metrics::counter;
use tracing::debug;

use crate::role_permissions::RolePermissionMap;
use crate::rules::{AccessRule, RouteRules};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
    /// No rule for the path under a deny default.
    UnregisteredPath,
    RoleMismatch { required: Role, actual: Role },
    MissingPermissions { any_of: BTreeSet<Permission> },
}

impl DenyReason {
    pub fn as_label(&self) -> &'static str {
        match self {
            DenyReason::Unauthenticated => "unauthenticated",
            DenyReason::UnregisteredPath => "unregistered_path",
            DenyReason::RoleMismatch { .. } => "role_mismatch",
            DenyReason::MissingPermissions { .. } => "missing_permissions",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::Unauthenticated => f.write_str("not authenticated"),
            DenyReason::UnregisteredPath => f.write_str("no access rule for path"),
            DenyReason::RoleMismatch { required, actual } => {
                write!(f, "requires role {}, user is {}", required, actual)
            }
            DenyReason::MissingPermissions { any_of } => {
                let names: Vec<_> = any_of.iter().map(Permission::as_str).collect();
                write!(f, "requires one of {}", names.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn deny_reason(&self) -> Option<&DenyReason> {
        match self {
            Decision::Allowed => None,
            Decision::Denied(reason) => Some(reason),
        }
    }
}

/// Outcome of a single stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Allow,
    Deny(DenyReason),
    Continue,
}

/// Everything a stage may look at.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub path: &'a str,
    pub user: Option<&'a SessionUser>,
    pub rule: Option<&'a AccessRule>,
    pub policy: DefaultPolicy,
    pub roles: &'a RolePermissionMap,
}

pub type Stage = fn(&Request<'_>) -> Step;

/// Stages in evaluation order.
pub const STAGES: [(&str, Stage); 4] = [
    ("authenticated", authenticated),
    ("registered", registered),
    ("role_requirement", role_requirement),
    ("permission_requirement", permission_requirement),
];

pub fn authenticated(request: &Request<'_>) -> Step {
    match request.user {
        Some(_) => Step::Continue,
        None => Step::Deny(DenyReason::Unauthenticated),
    }
}

pub fn registered(request: &Request<'_>) -> Step {
    if request.rule.is_some() {
        return Step::Continue;
    }
    match request.policy {
        DefaultPolicy::Allow => {
            debug!(path = request.path, "No access rule, allowed by default policy");
            Step::Allow
        }
        DefaultPolicy::Deny => Step::Deny(DenyReason::UnregisteredPath),
    }
}

pub fn role_requirement(request: &Request<'_>) -> Step {
    let (Some(required), Some(user)) = (
        request.rule.and_then(AccessRule::required_role),
        request.user,
    ) else {
        return Step::Continue;
    };

    if user.role == required {
        Step::Continue
    } else if user.is_super_admin() {
        Step::Allow
    } else {
        Step::Deny(DenyReason::RoleMismatch {
            required,
            actual: user.role,
        })
    }
}

pub fn permission_requirement(request: &Request<'_>) -> Step {
    let (Some(required), Some(user)) = (
        request.rule.and_then(AccessRule::required_permissions),
        request.user,
    ) else {
        return Step::Continue;
    };

    if user.is_super_admin() || request.roles.holds_any(user, required) {
        Step::Allow
    } else {
        Step::Deny(DenyReason::MissingPermissions {
            any_of: required.clone(),
        })
    }
}

/// The role map, the route table and the default policy for unregistered
/// paths. Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AccessControl {
    roles: RolePermissionMap,
    routes: RouteRules,
    policy: DefaultPolicy,
}

impl AccessControl {
    pub fn new(roles: RolePermissionMap, routes: RouteRules, policy: DefaultPolicy) -> Self {
        Self {
            roles,
            routes,
            policy,
        }
    }

    /// Default role map and dashboard routes under the configured policy.
    pub fn from_config(config: &AccessConfig) -> Self {
        Self::new(
            RolePermissionMap::default(),
            RouteRules::dashboard(),
            config.default_policy,
        )
    }

    pub fn roles(&self) -> &RolePermissionMap {
        &self.roles
    }

    pub fn routes(&self) -> &RouteRules {
        &self.routes
    }

    pub fn policy(&self) -> DefaultPolicy {
        self.policy
    }

    pub fn permissions_for_role(&self, role: Role) -> BTreeSet<Permission> {
        self.roles.permissions_for_role(role)
    }

    pub fn evaluate(&self, path: &str, user: Option<&SessionUser>) -> Decision {
        let request = Request {
            path,
            user,
            rule: self.routes.get(path),
            policy: self.policy,
            roles: &self.roles,
        };

        let decision = STAGES
            .iter()
            .find_map(|(name, stage)| match stage(&request) {
                Step::Continue => None,
                Step::Allow => Some(Decision::Allowed),
                Step::Deny(reason) => {
                    debug!(path, stage = name, reason = %reason, "Access denied");
                    Some(Decision::Denied(reason))
                }
            })
            .unwrap_or(Decision::Allowed);

        let outcome = match &decision {
            Decision::Allowed => "allowed",
            Decision::Denied(reason) => reason.as_label(),
        };
        counter!("access_decisions_total", "outcome" => outcome).increment(1);

        decision
    }

    pub fn can_access(&self, path: &str, user: Option<&SessionUser>) -> bool {
        self.evaluate(path, user).is_allowed()
    }
}

impl Default for AccessControl {
    fn default() -> Self {
        Self::new(
            RolePermissionMap::default(),
            RouteRules::dashboard(),
            DefaultPolicy::Allow,
        )
    }
}

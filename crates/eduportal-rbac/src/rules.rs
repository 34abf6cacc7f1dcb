//! Route access rules.
//!
//! A [`RouteRules`] table maps an exact dashboard path to an [`AccessRule`].
//! Matching is literal apart from trailing slashes: `/dashboard/admin` says
//! nothing about `/dashboard/admin/users`, while `/dashboard/leaves/` is the
//! same page as `/dashboard/leaves`. Paths with no entry are resolved by the
//! evaluator's default policy.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use eduportal_core::{Permission, Role};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessRule {
    /// Any authenticated user.
    Public,
    /// Exactly this role (super admins bypass).
    Role { role: Role },
    /// At least one of these permissions, from the role or a direct grant.
    Permissions { any_of: BTreeSet<Permission> },
    /// The role check, then the permission check.
    Combined {
        role: Role,
        any_of: BTreeSet<Permission>,
    },
}

impl AccessRule {
    pub fn role(role: Role) -> Self {
        AccessRule::Role { role }
    }

    pub fn any_of<I>(permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        AccessRule::Permissions {
            any_of: permissions.into_iter().collect(),
        }
    }

    pub fn combined<I>(role: Role, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        AccessRule::Combined {
            role,
            any_of: permissions.into_iter().collect(),
        }
    }

    pub fn required_role(&self) -> Option<Role> {
        match self {
            AccessRule::Role { role } | AccessRule::Combined { role, .. } => Some(*role),
            AccessRule::Public | AccessRule::Permissions { .. } => None,
        }
    }

    /// The permission requirement, if any. An empty set is no requirement.
    pub fn required_permissions(&self) -> Option<&BTreeSet<Permission>> {
        match self {
            AccessRule::Permissions { any_of } | AccessRule::Combined { any_of, .. } => {
                Some(any_of).filter(|set| !set.is_empty())
            }
            AccessRule::Public | AccessRule::Role { .. } => None,
        }
    }
}

/// Drops trailing slashes so `/dashboard/hr/` looks up `/dashboard/hr`.
/// The root path stays `/`.
pub fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" if path.starts_with('/') => "/",
        trimmed => trimmed,
    }
}

fn join(permissions: &BTreeSet<Permission>) -> String {
    permissions
        .iter()
        .map(Permission::as_str)
        .collect::<Vec<_>>()
        .join(" | ")
}

impl fmt::Display for AccessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessRule::Public => f.write_str("public"),
            AccessRule::Role { role } => write!(f, "role {}", role),
            AccessRule::Permissions { any_of } => write!(f, "any of [{}]", join(any_of)),
            AccessRule::Combined { role, any_of } => {
                write!(f, "role {} and any of [{}]", role, join(any_of))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteRules {
    rules: BTreeMap<String, AccessRule>,
}

impl RouteRules {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, path: impl Into<String>, rule: AccessRule) -> Self {
        self.insert(path, rule);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, rule: AccessRule) -> Option<AccessRule> {
        self.rules.insert(path.into(), rule)
    }

    pub fn get(&self, path: &str) -> Option<&AccessRule> {
        self.rules.get(normalize_path(path))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.rules.contains_key(normalize_path(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AccessRule)> {
        self.rules.iter().map(|(path, rule)| (path.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Paths from `paths` with no rule, in input order, without duplicates.
    pub fn unregistered<'a, I>(&self, paths: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = BTreeSet::new();
        paths
            .into_iter()
            .filter(|path| !self.contains(path) && seen.insert(*path))
            .collect()
    }

    /// The institute dashboard table.
    pub fn dashboard() -> Self {
        use Permission::*;

        RouteRules::empty()
            .with_rule("/dashboard", AccessRule::Public)
            .with_rule("/dashboard/profile", AccessRule::Public)
            // Administration
            .with_rule("/dashboard/admin/users", AccessRule::any_of([ViewUser]))
            .with_rule("/dashboard/admin/users/new", AccessRule::any_of([AddUser]))
            .with_rule("/dashboard/admin/cms", AccessRule::any_of([ManageCms]))
            .with_rule(
                "/dashboard/admin/banners",
                AccessRule::any_of([ManageBanners, ManageCms]),
            )
            .with_rule("/dashboard/admin/media", AccessRule::any_of([ManageMedia]))
            .with_rule(
                "/dashboard/admin/courses",
                AccessRule::any_of([ManageCourses]),
            )
            .with_rule("/dashboard/admin/settings", AccessRule::role(Role::Admin))
            .with_rule("/dashboard/system", AccessRule::any_of([SystemAdmin]))
            // Academics
            .with_rule(
                "/dashboard/courses",
                AccessRule::any_of([ViewCourses, ManageCourses]),
            )
            .with_rule(
                "/dashboard/batches",
                AccessRule::any_of([ViewBatches, ManageBatches]),
            )
            .with_rule("/dashboard/lms", AccessRule::any_of([ViewLms, ManageLms]))
            .with_rule(
                "/dashboard/lms/manage",
                AccessRule::combined(Role::TechnicalHead, [ManageLms]),
            )
            // Leaves
            .with_rule(
                "/dashboard/leaves",
                AccessRule::any_of([ApplyLeave, ViewLeaves]),
            )
            .with_rule(
                "/dashboard/leaves/approvals",
                AccessRule::any_of([ApproveLeave]),
            )
            // Admissions and reporting
            .with_rule(
                "/dashboard/leads",
                AccessRule::any_of([ViewLeads, ManageLeads]),
            )
            .with_rule("/dashboard/reports", AccessRule::any_of([ViewReports]))
            // Role home pages
            .with_rule("/dashboard/hr", AccessRule::role(Role::Hr))
            .with_rule("/dashboard/faculty", AccessRule::role(Role::Faculty))
            .with_rule("/dashboard/student", AccessRule::role(Role::Student))
            .with_rule("/dashboard/parent", AccessRule::role(Role::Parent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let rules = RouteRules::dashboard();
        assert!(rules.get("/dashboard/admin/users").is_some());
        assert!(rules.get("/dashboard/admin").is_none());
        assert!(rules.get("/dashboard/admin/users/42").is_none());
    }

    #[test]
    fn test_trailing_slash_finds_same_rule() {
        let rules = RouteRules::dashboard();
        assert_eq!(
            rules.get("/dashboard/leaves/approvals/"),
            rules.get("/dashboard/leaves/approvals")
        );
        assert!(rules.contains("/dashboard/admin/settings//"));
        assert!(!rules.contains("/dashboard/admin/settings/extra"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/dashboard/hr/"), "/dashboard/hr");
        assert_eq!(normalize_path("/dashboard"), "/dashboard");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn test_required_role_and_permissions() {
        let rule = AccessRule::combined(Role::TechnicalHead, [Permission::ManageLms]);
        assert_eq!(rule.required_role(), Some(Role::TechnicalHead));
        assert_eq!(
            rule.required_permissions(),
            Some(&BTreeSet::from([Permission::ManageLms]))
        );

        assert_eq!(AccessRule::Public.required_role(), None);
        assert_eq!(AccessRule::Public.required_permissions(), None);
        assert_eq!(AccessRule::role(Role::Hr).required_permissions(), None);
    }

    #[test]
    fn test_empty_permission_set_is_no_requirement() {
        let rule = AccessRule::any_of([]);
        assert_eq!(rule.required_permissions(), None);
    }

    #[test]
    fn test_unregistered_paths() {
        let rules = RouteRules::empty().with_rule("/a", AccessRule::Public);
        assert_eq!(
            rules.unregistered(["/a", "/b", "/c", "/b"]),
            vec!["/b", "/c"]
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut rules = RouteRules::empty();
        assert_eq!(rules.insert("/x", AccessRule::Public), None);
        assert_eq!(
            rules.insert("/x", AccessRule::role(Role::Admin)),
            Some(AccessRule::Public)
        );
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(AccessRule::Public.to_string(), "public");
        assert_eq!(AccessRule::role(Role::Hr).to_string(), "role HR");
        assert_eq!(
            AccessRule::any_of([Permission::ViewLms, Permission::ManageLms]).to_string(),
            "any of [VIEW_LMS | MANAGE_LMS]"
        );
    }

    #[test]
    fn test_serializes_tagged() {
        let json = serde_json::to_string(&AccessRule::role(Role::Admin)).unwrap();
        assert_eq!(json, r#"{"kind":"role","role":"ADMIN"}"#);
    }

    #[test]
    fn test_dashboard_table_is_populated() {
        let rules = RouteRules::dashboard();
        assert!(!rules.is_empty());
        assert_eq!(
            rules.get("/dashboard/admin/settings"),
            Some(&AccessRule::role(Role::Admin))
        );
        assert!(rules.iter().all(|(path, _)| path.starts_with("/dashboard")));
    }
}

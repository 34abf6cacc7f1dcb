use std::fmt::Write as _;

use eduportal_core::{Permission, Role};
use eduportal_models::SessionUser;
use eduportal_rbac::{AccessControl, Decision};

pub fn roles(access: &AccessControl) -> String {
    let mut out = String::new();
    for role in Role::ALL {
        let _ = writeln!(
            out,
            "{:<20} {:<20} {} permissions",
            role.as_str(),
            role.display_name(),
            access.permissions_for_role(*role).len()
        );
    }
    out
}

/// Every permission grouped by category, or one role's grants.
pub fn permissions(access: &AccessControl, role: Option<Role>) -> String {
    let mut out = String::new();
    match role {
        Some(role) => {
            for permission in access.permissions_for_role(role) {
                let _ = writeln!(out, "{}", permission);
            }
        }
        None => {
            let mut category = "";
            for permission in Permission::ALL {
                if permission.category() != category {
                    category = permission.category();
                    let _ = writeln!(out, "[{}]", category);
                }
                let _ = writeln!(out, "  {}", permission);
            }
        }
    }
    out
}

pub fn routes(access: &AccessControl) -> String {
    let mut out = String::new();
    for (path, rule) in access.routes().iter() {
        let _ = writeln!(out, "{:<32} {}", path, rule);
    }
    let _ = writeln!(out, "unregistered paths: {}", access.policy());
    out
}

/// Runs one access check for a synthetic user.
pub fn check(access: &AccessControl, role: Role, extra: &[Permission], path: &str) -> (bool, String) {
    let user = SessionUser::new(role).with_permissions(extra.iter().copied());
    match access.evaluate(path, Some(&user)) {
        Decision::Allowed => (true, format!("ALLOWED {} -> {}", role, path)),
        Decision::Denied(reason) => (false, format!("DENIED {} -> {}: {}", role, path, reason)),
    }
}

/// Paths with no access rule among `paths`.
pub fn audit<'a>(access: &AccessControl, paths: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    access.routes().unregistered(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_lists_every_role() {
        let out = roles(&AccessControl::default());
        assert_eq!(out.lines().count(), Role::ALL.len());
        assert!(out.contains("SUPER_ADMIN"));
    }

    #[test]
    fn test_permissions_grouped_by_category() {
        let out = permissions(&AccessControl::default(), None);
        assert!(out.starts_with("[users]\n  VIEW_USER\n"));
        assert!(out.contains("[system]\n  SYSTEM_ADMIN\n"));
    }

    #[test]
    fn test_permissions_for_role() {
        let out = permissions(&AccessControl::default(), Some(Role::Parent));
        assert_eq!(out, "VIEW_COURSES\n");
    }

    #[test]
    fn test_check_reports_reason() {
        let access = AccessControl::default();

        let (allowed, line) = check(&access, Role::Faculty, &[], "/dashboard/admin/users");
        assert!(!allowed);
        assert!(line.contains("VIEW_USER"));

        let (allowed, _) = check(&access, Role::Faculty, &[Permission::ViewUser], "/dashboard/admin/users");
        assert!(allowed);
    }

    #[test]
    fn test_audit() {
        let access = AccessControl::default();
        assert_eq!(
            audit(&access, ["/dashboard", "/dashboard/secret"]),
            vec!["/dashboard/secret"]
        );
    }

    #[test]
    fn test_routes_mentions_policy() {
        let out = routes(&AccessControl::default());
        assert!(out.contains("/dashboard/admin/users"));
        assert!(out.ends_with("unregistered paths: allow\n"));
    }
}

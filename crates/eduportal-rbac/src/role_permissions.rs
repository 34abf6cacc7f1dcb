//! Role → permission map.
//!
//! Each role carries a default permission set. [`Role::SuperAdmin`] has no
//! stored set at all: its permissions are read from [`Permission::ALL`] on
//! every lookup, so it always holds whatever the registry defines.

use std::collections::{BTreeSet, HashMap};

use eduportal_core::{Permission, Role};
use eduportal_models::SessionUser;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RolePermissionMap {
    grants: HashMap<Role, BTreeSet<Permission>>,
}

impl RolePermissionMap {
    /// Every role present with no permissions.
    pub fn empty() -> Self {
        Self {
            grants: Role::ALL
                .iter()
                .map(|role| (*role, BTreeSet::new()))
                .collect(),
        }
    }

    /// Replaces the grants of `role`. Ignored for super admins.
    pub fn with_grants<I>(mut self, role: Role, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        if !role.is_super_admin() {
            self.grants.insert(role, permissions.into_iter().collect());
        }
        self
    }

    pub fn permissions_for_role(&self, role: Role) -> BTreeSet<Permission> {
        if role.is_super_admin() {
            return Permission::ALL.iter().copied().collect();
        }
        self.grants.get(&role).cloned().unwrap_or_default()
    }

    /// Lookup by wire name. Names outside the registry get nothing.
    pub fn permissions_for_role_name(&self, name: &str) -> BTreeSet<Permission> {
        match name.parse::<Role>() {
            Ok(role) => self.permissions_for_role(role),
            Err(e) => {
                debug!(error = %e, "No permissions for unregistered role");
                BTreeSet::new()
            }
        }
    }

    pub fn role_grants(&self, role: Role, permission: Permission) -> bool {
        role.is_super_admin()
            || self
                .grants
                .get(&role)
                .is_some_and(|granted| granted.contains(&permission))
    }

    /// Role permissions merged with the user's own grants.
    pub fn effective_permissions(&self, user: &SessionUser) -> BTreeSet<Permission> {
        let mut effective = self.permissions_for_role(user.role);
        effective.extend(user.permissions.iter().copied());
        effective
    }

    /// True when the user holds at least one of `required`, through the role
    /// or a direct grant.
    pub fn holds_any(&self, user: &SessionUser, required: &BTreeSet<Permission>) -> bool {
        required
            .iter()
            .any(|p| user.permissions.contains(p) || self.role_grants(user.role, *p))
    }
}

impl Default for RolePermissionMap {
    fn default() -> Self {
        use Permission::*;

        RolePermissionMap::empty()
            .with_grants(
                Role::Admin,
                [
                    ViewUser,
                    AddUser,
                    EditUser,
                    DeleteUser,
                    ManageCms,
                    ManageBanners,
                    ManageMedia,
                    ViewCourses,
                    ManageCourses,
                    ViewBatches,
                    ManageBatches,
                    ViewLeaves,
                    ApproveLeave,
                    ViewLeads,
                    ManageLeads,
                    ViewReports,
                ],
            )
            .with_grants(
                Role::TechnicalHead,
                [
                    ViewUser,
                    ViewCourses,
                    ManageCourses,
                    ViewBatches,
                    ApplyLeave,
                    ViewLeaves,
                    ApproveLeave,
                    ViewLms,
                    ManageLms,
                    ViewReports,
                ],
            )
            .with_grants(
                Role::Hr,
                [
                    ViewUser,
                    AddUser,
                    EditUser,
                    ApplyLeave,
                    ViewLeaves,
                    ApproveLeave,
                    ViewReports,
                ],
            )
            .with_grants(
                Role::Faculty,
                [ViewCourses, ViewBatches, ApplyLeave, ViewLms],
            )
            .with_grants(Role::Student, [ViewCourses, ViewLms])
            .with_grants(Role::Parent, [ViewCourses])
            .with_grants(
                Role::OperationsManager,
                [
                    ViewUser,
                    ViewCourses,
                    ViewBatches,
                    ManageBatches,
                    ApplyLeave,
                    ViewLeaves,
                    ApproveLeave,
                    ViewReports,
                ],
            )
            .with_grants(
                Role::ReportingManager,
                [ApplyLeave, ViewLeaves, ApproveLeave, ViewReports],
            )
            .with_grants(
                Role::AdmissionManager,
                [ViewCourses, ApplyLeave, ViewLeads, ManageLeads],
            )
            .with_grants(
                Role::Coordinator,
                [ViewCourses, ViewBatches, ApplyLeave, ViewLeads],
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_admin_gets_entire_registry() {
        let map = RolePermissionMap::default();
        let all: BTreeSet<_> = Permission::ALL.iter().copied().collect();
        assert_eq!(map.permissions_for_role(Role::SuperAdmin), all);
    }

    #[test]
    fn test_super_admin_superset_of_every_role() {
        let map = RolePermissionMap::default();
        let super_admin = map.permissions_for_role(Role::SuperAdmin);
        for role in Role::ALL.iter().filter(|r| !r.is_super_admin()) {
            assert!(
                super_admin.is_superset(&map.permissions_for_role(*role)),
                "{role} has a permission the super admin lacks"
            );
        }
    }

    #[test]
    fn test_super_admin_grants_cannot_be_narrowed() {
        let map = RolePermissionMap::empty().with_grants(Role::SuperAdmin, [Permission::ViewUser]);
        assert_eq!(
            map.permissions_for_role(Role::SuperAdmin).len(),
            Permission::ALL.len()
        );
    }

    #[test]
    fn test_every_role_has_an_entry() {
        let map = RolePermissionMap::default();
        for role in Role::ALL {
            assert!(role.is_super_admin() || map.grants.contains_key(role));
        }
    }

    #[test]
    fn test_admin_can_view_users_faculty_cannot() {
        let map = RolePermissionMap::default();
        assert!(map.permissions_for_role(Role::Admin).contains(&Permission::ViewUser));
        assert!(!map.permissions_for_role(Role::Faculty).contains(&Permission::ViewUser));
    }

    #[test]
    fn test_unknown_role_name_fails_closed() {
        let map = RolePermissionMap::default();
        assert!(map.permissions_for_role_name("DEAN").is_empty());
        assert!(map.permissions_for_role_name("").is_empty());
        assert_eq!(
            map.permissions_for_role_name("HR"),
            map.permissions_for_role(Role::Hr)
        );
    }

    #[test]
    fn test_system_admin_permission_only_through_super_admin() {
        let map = RolePermissionMap::default();
        for role in Role::ALL {
            assert_eq!(
                map.role_grants(*role, Permission::SystemAdmin),
                role.is_super_admin()
            );
        }
    }

    #[test]
    fn test_effective_permissions_is_union() {
        let map = RolePermissionMap::default();
        let user = SessionUser::new(Role::Parent)
            .with_permissions([Permission::ViewReports, Permission::ViewCourses]);

        let effective = map.effective_permissions(&user);

        assert_eq!(
            effective,
            BTreeSet::from([Permission::ViewCourses, Permission::ViewReports])
        );
    }

    #[test]
    fn test_holds_any_matches_effective_intersection() {
        let map = RolePermissionMap::default();
        let user = SessionUser::new(Role::Student).with_permissions([Permission::ViewLeads]);

        for permission in Permission::ALL {
            let required = BTreeSet::from([*permission]);
            let expected = map.effective_permissions(&user).contains(permission);
            assert_eq!(map.holds_any(&user, &required), expected, "{permission}");
        }
        assert!(!map.holds_any(&user, &BTreeSet::new()));
    }
}

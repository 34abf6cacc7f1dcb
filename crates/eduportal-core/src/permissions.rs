//! Permission registry for the EduPortal dashboard.
//!
//! Every permission the dashboard knows about is a variant of [`Permission`].
//! Permissions are atomic: holding one never implies holding another. The
//! only widening rule in the system is the super-admin override, which lives
//! in the role map and reads [`Permission::ALL`], so a variant added here is
//! granted to super admins without touching any other file.
//!
//! # Example
//!
//! ```ignore
//! use eduportal_core::Permission;
//!
//! let permission: Permission = "VIEW_USER".parse()?;
//! assert_eq!(permission.as_str(), "VIEW_USER");
//! assert_eq!(permission.category(), "users");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown permission: {0}")]
pub struct UnknownPermission(pub String);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    // =========================================================================
    // Users
    // =========================================================================
    ViewUser,
    AddUser,
    EditUser,
    DeleteUser,

    // =========================================================================
    // Content management
    // =========================================================================
    ManageCms,
    ManageBanners,
    ManageMedia,

    // =========================================================================
    // Courses and batches
    // =========================================================================
    ViewCourses,
    ManageCourses,
    ViewBatches,
    ManageBatches,

    // =========================================================================
    // Leaves
    // =========================================================================
    ApplyLeave,
    ViewLeaves,
    ApproveLeave,

    // =========================================================================
    // Learning management
    // =========================================================================
    ViewLms,
    ManageLms,

    // =========================================================================
    // Admissions
    // =========================================================================
    ViewLeads,
    ManageLeads,

    // =========================================================================
    // Reporting and system
    // =========================================================================
    ViewReports,
    SystemAdmin,
}

impl Permission {
    /// The full registry, in declaration order.
    pub const ALL: &'static [Permission] = &[
        Permission::ViewUser,
        Permission::AddUser,
        Permission::EditUser,
        Permission::DeleteUser,
        Permission::ManageCms,
        Permission::ManageBanners,
        Permission::ManageMedia,
        Permission::ViewCourses,
        Permission::ManageCourses,
        Permission::ViewBatches,
        Permission::ManageBatches,
        Permission::ApplyLeave,
        Permission::ViewLeaves,
        Permission::ApproveLeave,
        Permission::ViewLms,
        Permission::ManageLms,
        Permission::ViewLeads,
        Permission::ManageLeads,
        Permission::ViewReports,
        Permission::SystemAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewUser => "VIEW_USER",
            Permission::AddUser => "ADD_USER",
            Permission::EditUser => "EDIT_USER",
            Permission::DeleteUser => "DELETE_USER",
            Permission::ManageCms => "MANAGE_CMS",
            Permission::ManageBanners => "MANAGE_BANNERS",
            Permission::ManageMedia => "MANAGE_MEDIA",
            Permission::ViewCourses => "VIEW_COURSES",
            Permission::ManageCourses => "MANAGE_COURSES",
            Permission::ViewBatches => "VIEW_BATCHES",
            Permission::ManageBatches => "MANAGE_BATCHES",
            Permission::ApplyLeave => "APPLY_LEAVE",
            Permission::ViewLeaves => "VIEW_LEAVES",
            Permission::ApproveLeave => "APPROVE_LEAVE",
            Permission::ViewLms => "VIEW_LMS",
            Permission::ManageLms => "MANAGE_LMS",
            Permission::ViewLeads => "VIEW_LEADS",
            Permission::ManageLeads => "MANAGE_LEADS",
            Permission::ViewReports => "VIEW_REPORTS",
            Permission::SystemAdmin => "SYSTEM_ADMIN",
        }
    }

    /// Grouping used by the CLI listing.
    pub fn category(&self) -> &'static str {
        match self {
            Permission::ViewUser
            | Permission::AddUser
            | Permission::EditUser
            | Permission::DeleteUser => "users",
            Permission::ManageCms | Permission::ManageBanners | Permission::ManageMedia => "cms",
            Permission::ViewCourses
            | Permission::ManageCourses
            | Permission::ViewBatches
            | Permission::ManageBatches => "courses",
            Permission::ApplyLeave | Permission::ViewLeaves | Permission::ApproveLeave => "leaves",
            Permission::ViewLms | Permission::ManageLms => "lms",
            Permission::ViewLeads | Permission::ManageLeads => "leads",
            Permission::ViewReports => "reports",
            Permission::SystemAdmin => "system",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_no_duplicates() {
        let unique: HashSet<_> = Permission::ALL.iter().collect();
        assert_eq!(unique.len(), Permission::ALL.len());
    }

    /// Declaration-order successor. The match has no wildcard, so a new
    /// variant does not compile until it is linked in here.
    fn next(permission: Permission) -> Option<Permission> {
        use Permission::*;
        match permission {
            ViewUser => Some(AddUser),
            AddUser => Some(EditUser),
            EditUser => Some(DeleteUser),
            DeleteUser => Some(ManageCms),
            ManageCms => Some(ManageBanners),
            ManageBanners => Some(ManageMedia),
            ManageMedia => Some(ViewCourses),
            ViewCourses => Some(ManageCourses),
            ManageCourses => Some(ViewBatches),
            ViewBatches => Some(ManageBatches),
            ManageBatches => Some(ApplyLeave),
            ApplyLeave => Some(ViewLeaves),
            ViewLeaves => Some(ApproveLeave),
            ApproveLeave => Some(ViewLms),
            ViewLms => Some(ManageLms),
            ManageLms => Some(ViewLeads),
            ViewLeads => Some(ManageLeads),
            ManageLeads => Some(ViewReports),
            ViewReports => Some(SystemAdmin),
            SystemAdmin => None,
        }
    }

    #[test]
    fn test_registry_lists_every_variant() {
        let declared: Vec<Permission> =
            std::iter::successors(Some(Permission::ViewUser), |p| next(*p)).collect();
        assert_eq!(declared, Permission::ALL);
    }

    #[test]
    fn test_parse_every_registered_name() {
        for permission in Permission::ALL {
            assert_eq!(permission.as_str().parse::<Permission>(), Ok(*permission));
        }
    }

    #[test]
    fn test_parse_unknown_permission() {
        let err = "FLY_TO_MOON".parse::<Permission>().unwrap_err();
        assert_eq!(err, UnknownPermission("FLY_TO_MOON".to_string()));
        assert!("view_user".parse::<Permission>().is_err());
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        for permission in Permission::ALL {
            let json = serde_json::to_string(permission).unwrap();
            assert_eq!(json, format!("\"{}\"", permission.as_str()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Permission::ManageCms.to_string(), "MANAGE_CMS");
        assert_eq!(Permission::SystemAdmin.to_string(), "SYSTEM_ADMIN");
    }

    #[test]
    fn test_categories() {
        assert_eq!(Permission::DeleteUser.category(), "users");
        assert_eq!(Permission::ManageBanners.category(), "cms");
        assert_eq!(Permission::ApproveLeave.category(), "leaves");
        assert_eq!(Permission::SystemAdmin.category(), "system");
    }
}

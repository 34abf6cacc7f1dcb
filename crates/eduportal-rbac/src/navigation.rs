//! Sidebar navigation: the full catalog and the per-user filter.

use eduportal_models::{NavItem, SessionUser};

use crate::evaluator::AccessControl;

/// Every dashboard link, in sidebar order.
pub fn dashboard_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("Overview", "/dashboard").with_icon("home"),
        NavItem::new("Users", "/dashboard/admin/users").with_icon("users"),
        NavItem::new("Add User", "/dashboard/admin/users/new").with_icon("user-plus"),
        NavItem::new("CMS", "/dashboard/admin/cms").with_icon("layout"),
        NavItem::new("Banners", "/dashboard/admin/banners").with_icon("image"),
        NavItem::new("Media", "/dashboard/admin/media").with_icon("folder"),
        NavItem::new("Course Catalog", "/dashboard/admin/courses").with_icon("book"),
        NavItem::new("Courses", "/dashboard/courses").with_icon("book-open"),
        NavItem::new("Batches", "/dashboard/batches").with_icon("calendar"),
        NavItem::new("LMS", "/dashboard/lms").with_icon("monitor"),
        NavItem::new("Manage LMS", "/dashboard/lms/manage").with_icon("sliders"),
        NavItem::new("Leaves", "/dashboard/leaves").with_icon("clipboard"),
        NavItem::new("Leave Approvals", "/dashboard/leaves/approvals").with_icon("check-square"),
        NavItem::new("Leads", "/dashboard/leads").with_icon("phone"),
        NavItem::new("Reports", "/dashboard/reports").with_icon("bar-chart"),
        NavItem::new("HR", "/dashboard/hr").with_icon("briefcase"),
        NavItem::new("Faculty", "/dashboard/faculty").with_icon("award"),
        NavItem::new("My Learning", "/dashboard/student").with_icon("graduation-cap"),
        NavItem::new("My Child", "/dashboard/parent").with_icon("heart"),
        NavItem::new("Settings", "/dashboard/admin/settings").with_icon("settings"),
        NavItem::new("System", "/dashboard/system").with_icon("shield"),
        NavItem::new("Profile", "/dashboard/profile").with_icon("user"),
    ]
}

/// Keeps the items the user may open, in their original order. An anonymous
/// caller gets nothing.
pub fn filter_navigation<I>(access: &AccessControl, items: I, user: Option<&SessionUser>) -> Vec<NavItem>
where
    I: IntoIterator<Item = NavItem>,
{
    let Some(user) = user else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter(|item| access.can_access(&item.path, Some(user)))
        .collect()
}

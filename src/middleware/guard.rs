use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use eduportal_core::{AppError, Permission, Role};
use eduportal_models::AuthStatus;
use eduportal_observability::track_guard_redirect;
use eduportal_rbac::{GuardOutcome, RouteGuard, normalize_path};
use tracing::debug;

use crate::middleware::auth::MaybeAuthUser;
use crate::state::AppState;

/// Roles that may enter the `/dashboard/admin` section at all. The route
/// rule for each page still applies on top.
pub const ADMIN_SECTION_ROLES: [Role; 4] = [
    Role::Admin,
    Role::TechnicalHead,
    Role::Hr,
    Role::OperationsManager,
];

fn within(path: &str, section: &str) -> bool {
    path == section
        || path
            .strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Guard configuration for a dashboard path: the section's role and
/// permission requirements plus the rule registered for the exact path.
pub fn guard_for(path: &str) -> RouteGuard {
    let guard = RouteGuard::for_path(path);

    if within(path, "/dashboard/system") {
        guard.require_permissions([Permission::SystemAdmin])
    } else if within(path, "/dashboard/admin") {
        guard.allow_roles(ADMIN_SECTION_ROLES)
    } else {
        guard
    }
}

/// Gates `/dashboard` views. Paths with no access rule are not views and
/// get 404. Anonymous callers are sent to the login path, denied callers to
/// the unauthorized path.
pub async fn dashboard_guard(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    req: Request,
    next: Next,
) -> Response {
    let path = normalize_path(req.uri().path()).to_string();
    if !state.access.routes().contains(&path) {
        debug!(path = %path, "No dashboard view registered");
        return AppError::not_found(anyhow::anyhow!("No dashboard view at {}", path))
            .into_response();
    }

    let outcome = guard_for(&path).evaluate(AuthStatus::from_user(user.as_ref()), &state.access);

    match outcome {
        GuardOutcome::Render => next.run(req).await,
        GuardOutcome::RedirectToLogin => {
            debug!(path = %path, "Redirecting anonymous request to login");
            track_guard_redirect("login");
            Redirect::to(&state.access_config.login_path).into_response()
        }
        GuardOutcome::RedirectToUnauthorized => {
            track_guard_redirect("unauthorized");
            Redirect::to(&state.access_config.unauthorized_path).into_response()
        }
        GuardOutcome::Loading => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_section() {
        assert!(within("/dashboard/admin", "/dashboard/admin"));
        assert!(within("/dashboard/admin/users", "/dashboard/admin"));
        assert!(!within("/dashboard/administrator", "/dashboard/admin"));
        assert!(!within("/dashboard", "/dashboard/admin"));
    }

    #[test]
    fn test_guard_for_admin_section() {
        let guard = guard_for("/dashboard/admin/users");
        assert_eq!(guard.route_path.as_deref(), Some("/dashboard/admin/users"));
        assert!(guard.allowed_roles.contains(&Role::Hr));
        assert!(!guard.allowed_roles.contains(&Role::Faculty));
        assert!(guard.required_permissions.is_empty());
    }

    #[test]
    fn test_guard_for_system_section() {
        let guard = guard_for("/dashboard/system/logs");
        assert!(guard.allowed_roles.is_empty());
        assert!(guard.required_permissions.contains(&Permission::SystemAdmin));
    }

    #[test]
    fn test_guard_for_plain_page() {
        assert_eq!(guard_for("/dashboard/leaves"), RouteGuard::for_path("/dashboard/leaves"));
    }
}

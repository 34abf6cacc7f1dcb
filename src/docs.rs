use eduportal_core::{Permission, Role};
use eduportal_models::{
    AccessCheckResponse, CurrentUserResponse, DashboardView, ErrorResponse, NavItem,
    NavigationResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::get_current_user,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::access::controller::check_access,
        crate::modules::dashboard::controller::render_view,
    ),
    components(
        schemas(
            Role,
            Permission,
            CurrentUserResponse,
            NavItem,
            NavigationResponse,
            AccessCheckResponse,
            DashboardView,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signed-in user endpoints"),
        (name = "Navigation", description = "Role-filtered dashboard navigation"),
        (name = "Access", description = "Access decisions for dashboard paths"),
        (name = "Dashboard", description = "Guarded dashboard views")
    ),
    info(
        title = "EduPortal Dashboard API",
        version = "0.1.0",
        description = "Role and permission based access control for the institute dashboard.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

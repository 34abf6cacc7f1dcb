use std::sync::Arc;

use eduportal_config::{AccessConfig, CorsConfig, JwtConfig};
use eduportal_rbac::AccessControl;

#[derive(Clone, Debug)]
pub struct AppState {
    pub access: Arc<AccessControl>,
    pub jwt_config: JwtConfig,
    pub access_config: AccessConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(jwt_config: JwtConfig, access_config: AccessConfig, cors_config: CorsConfig) -> Self {
        Self {
            access: Arc::new(AccessControl::from_config(&access_config)),
            jwt_config,
            access_config,
            cors_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(
        JwtConfig::from_env(),
        AccessConfig::from_env(),
        CorsConfig::from_env(),
    )
}

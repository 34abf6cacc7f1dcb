use axum::{Router, routing::get};

use crate::modules::auth::controller::get_current_user;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/me", get(get_current_user))
}

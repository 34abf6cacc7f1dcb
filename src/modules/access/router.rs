use axum::{Router, routing::get};

use crate::modules::access::controller::check_access;
use crate::state::AppState;

pub fn init_access_router() -> Router<AppState> {
    Router::new().route("/", get(check_access))
}

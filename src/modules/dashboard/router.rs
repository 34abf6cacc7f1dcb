use axum::{Router, middleware, routing::get};

use crate::middleware::guard::dashboard_guard;
use crate::modules::dashboard::controller::render_view;
use crate::state::AppState;

pub fn init_dashboard_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(render_view))
        .route("/dashboard/{*rest}", get(render_view))
        .route_layer(middleware::from_fn_with_state(state, dashboard_guard))
}

//! Request extractors and middleware.
//!
//! - [`auth`]: bearer token extractors, [`auth::AuthUser`] (rejects with 401)
//!   and [`auth::MaybeAuthUser`] (anonymous on failure)
//! - [`guard`]: the dashboard route guard middleware
//!
//! # Example
//!
//! ```ignore
//! Router::new()
//!     .route("/dashboard/{*rest}", get(render_view))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), dashboard_guard));
//! ```

pub mod auth;
pub mod guard;

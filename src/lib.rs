//! # EduPortal Dashboard Server
//!
//! Serves the access-control core of the institute dashboard to the
//! single-page client. Every request is evaluated against the caller's bearer
//! token; no server-side session is kept.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Token extractors and the dashboard route guard
//! ├── modules/          # Feature modules
//! │   ├── auth/        # The signed-in user
//! │   ├── navigation/  # Role-filtered sidebar
//! │   ├── access/      # Access checks for arbitrary paths
//! │   └── dashboard/   # Guarded views
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! ```
//!
//! Each feature module has a `controller.rs` with the handlers and a
//! `router.rs` with its axum router.
//!
//! ## Access decisions
//!
//! 1. No valid token: anonymous. Navigation is empty and dashboard views
//!    redirect to `LOGIN_PATH`.
//! 2. A path without an access rule follows `ACCESS_DEFAULT_POLICY`.
//! 3. Role rules must match exactly; `SUPER_ADMIN` bypasses them.
//! 4. Permission rules need at least one of the listed permissions, from the
//!    role or granted to the user; `SUPER_ADMIN` bypasses them.
//!
//! Denied dashboard views redirect to `UNAUTHORIZED_PATH`.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! ACCESS_DEFAULT_POLICY=allow
//! LOGIN_PATH=/login
//! UNAUTHORIZED_PATH=/unauthorized
//! ```

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use eduportal_auth;
pub use eduportal_config;
pub use eduportal_core;
pub use eduportal_models;
pub use eduportal_rbac;

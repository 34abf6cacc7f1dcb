//! # EduPortal Models
//!
//! Data structures exchanged between the session layer, the access-control
//! engine and the HTTP surface.
//!
//! # Modules
//!
//! - [`auth`]: login response contract and access-check DTOs
//! - [`navigation`]: sidebar navigation items
//! - [`users`]: the session-scoped user and its authentication status

pub mod auth;
pub mod navigation;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{
    AccessCheckQuery, AccessCheckResponse, CurrentUserResponse, ErrorResponse, LoginResponse,
};
pub use navigation::{DashboardView, NavItem, NavigationResponse};
pub use users::{AuthStatus, SessionUser, UserPayload};

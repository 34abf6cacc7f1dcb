//! # EduPortal Core
//!
//! Foundational types shared by every EduPortal crate:
//!
//! - [`roles`]: the closed set of institute roles
//! - [`permissions`]: the closed set of atomic permissions
//! - [`errors`]: application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use eduportal_core::{Permission, Role};
//!
//! let role: Role = "ADMIN".parse()?;
//! assert!(Permission::ALL.contains(&Permission::ViewUser));
//! ```

pub mod errors;
pub mod permissions;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use permissions::{Permission, UnknownPermission};
pub use roles::{Role, UnknownRole};

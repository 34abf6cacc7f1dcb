//! # EduPortal Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`access`]: default policy for unregistered paths and redirect targets
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: session token signing configuration
//! - [`server`]: bind address
//! - [`session`]: persisted session location and bootstrap timeout
//!
//! # Example
//!
//! ```ignore
//! use eduportal_config::{AccessConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let access_config = AccessConfig::from_env();
//! ```

pub mod access;
pub mod cors;
pub mod jwt;
pub mod server;
pub mod session;

// Re-export commonly used types at crate root
pub use access::{AccessConfig, DefaultPolicy};
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;

//! # EduPortal Auth
//!
//! Identity for the dashboard: who is signed in, and how that survives a
//! restart.
//!
//! - [`claims`]: JWT claim structure carried by session tokens
//! - [`jwt`]: token creation and verification
//! - [`storage`]: key/value persistence for the signed-in session
//! - [`session`]: the session store and its bootstrap sequence
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use eduportal_auth::{FileStorage, JwtSessionValidator, SessionStore};
//! use eduportal_config::{JwtConfig, SessionConfig};
//!
//! let config = SessionConfig::from_env();
//! let store = SessionStore::new(Arc::new(FileStorage::new(&config.storage_path)), &config);
//! let state = store.bootstrap(&JwtSessionValidator::new(JwtConfig::from_env())).await;
//! ```

pub mod claims;
pub mod jwt;
pub mod session;
pub mod storage;

// Re-export commonly used items at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, session_user_from_token, verify_token};
pub use session::{JwtSessionValidator, Session, SessionState, SessionStore, SessionValidator};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};

//! # EduPortal CLI
//!
//! Text reports over the access-control tables, used by the `eduportal-cli`
//! binary.
//!
//! ```ignore
//! use eduportal_cli::report;
//! use eduportal_rbac::AccessControl;
//!
//! println!("{}", report::routes(&AccessControl::default()));
//! ```

pub mod report;

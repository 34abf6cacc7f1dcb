pub mod access;
pub mod auth;
pub mod dashboard;
pub mod navigation;

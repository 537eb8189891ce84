//! Configuration module
//!
//! Policies are plain data: defaults encode the product constants, and the
//! `with_*` builders exist so tests and embedders can tighten or loosen them.

pub mod auth;

// Re-export commonly used types
pub use auth::{OtpPolicy, PasswordPolicy};

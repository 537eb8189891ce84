//! Shared utilities and common types for the AuthFlow sign-in controller
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types (OTP and password policies)
//! - Field-level validation error collection
//! - Formatting utilities for the presentation layer

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{OtpPolicy, PasswordPolicy};
pub use utils::{format, validation};

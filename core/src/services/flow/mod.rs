//! Sign-in flow controller module
//!
//! This module provides the complete sign-in flow state machine:
//! - Mode selection between password and one-time code
//! - One-time code issuance with expiry and resend throttling
//! - Per-field validation and submission gating
//! - A countdown task scoped to one controller instance
//! - Trait seams for the external issuance and authentication backends

mod config;
mod countdown;
mod gate;
mod service;
mod traits;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use config::FlowConfig;
pub use countdown::Countdown;
pub use gate::{codes, fields};
pub use service::FlowController;
pub use traits::{AuthBackend, OtpIssuer};
pub use types::{AuthRequest, FlowSnapshot, OtpLifecycle, OtpRequestStatus, SessionToken};
pub use validation::{
    is_valid_identity, is_valid_otp_code, is_valid_password, mask_identity, sanitize_otp_input,
};

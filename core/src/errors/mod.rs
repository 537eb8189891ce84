//! Error types for the sign-in flow.
//!
//! Messages here are developer-facing; the presentation layer maps the
//! stable error codes to localized user copy. Field-scoped validation
//! problems travel as [`FieldErrors`] so every failing field is reported at
//! once. No variant is fatal: each one leaves the controller in a state the
//! user can act on.

use af_shared::utils::validation::FieldErrors;
use thiserror::Error;

/// Sign-in flow errors
#[derive(Error, Debug)]
pub enum FlowError {
    /// The identity draft does not match the mobile number pattern
    #[error("identity is not a valid mobile number")]
    InvalidIdentity,

    /// The draft failed the submission gate
    #[error("draft failed validation")]
    InvalidDraft { errors: FieldErrors },

    /// A resend was requested while the current challenge is still valid
    #[error("resend available in {seconds_remaining} seconds")]
    ResendThrottled { seconds_remaining: i64 },

    /// An external call of the same kind is already outstanding
    #[error("another request is in flight")]
    OperationInFlight,

    /// External code issuance failed; state was reverted and retry is allowed
    #[error("code issuance failed: {message}")]
    Issuance { message: String },

    /// The backend rejected the submitted credentials
    #[error("authentication rejected: {reason}")]
    Authentication { reason: String },
}

impl FlowError {
    /// Stable machine code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FlowError::InvalidIdentity => "INVALID_IDENTITY",
            FlowError::InvalidDraft { .. } => "INVALID_DRAFT",
            FlowError::ResendThrottled { .. } => "RESEND_THROTTLED",
            FlowError::OperationInFlight => "OPERATION_IN_FLIGHT",
            FlowError::Issuance { .. } => "ISSUANCE_FAILED",
            FlowError::Authentication { .. } => "AUTHENTICATION_REJECTED",
        }
    }
}

pub type FlowResult<T> = Result<T, FlowError>;

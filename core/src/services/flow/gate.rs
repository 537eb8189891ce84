//! Submission gate
//!
//! Combines the active mode with the credential predicates into a
//! field-level error set and a single submit decision. Rules are evaluated
//! in order per field; independent fields report simultaneously.

use af_shared::utils::validation::FieldErrors;

use crate::domain::entities::draft::{CredentialMode, LoginDraft};

use super::config::FlowConfig;
use super::types::OtpLifecycle;
use super::validation::{is_valid_identity, is_valid_otp_code, is_valid_password};

/// Field keys reported by the gate
pub mod fields {
    pub const IDENTITY: &str = "identity";
    pub const PASSWORD: &str = "password";
    pub const OTP: &str = "otp";
}

/// Stable machine codes for gate errors
pub mod codes {
    pub const REQUIRED: &str = "required";
    pub const INVALID_FORMAT: &str = "invalid_format";
    pub const TOO_SHORT: &str = "too_short";
    pub const EXPIRED: &str = "expired";
}

/// Field-level errors for the draft
///
/// The inactive mode's secret is never validated. In Otp mode an expired
/// challenge blocks submission even when a well-formed code is present,
/// since the typed code can no longer be verified.
pub fn field_errors(
    draft: &LoginDraft,
    config: &FlowConfig,
    lifecycle: OtpLifecycle,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.identity().is_empty() {
        errors.add_error(fields::IDENTITY, "Phone number is required", codes::REQUIRED);
    } else if !is_valid_identity(draft.identity()) {
        errors.add_error(
            fields::IDENTITY,
            "Phone number is not a valid mobile number",
            codes::INVALID_FORMAT,
        );
    }

    match draft.mode() {
        CredentialMode::Password => {
            if draft.password().is_empty() {
                errors.add_error(fields::PASSWORD, "Password is required", codes::REQUIRED);
            } else if !is_valid_password(draft.password(), config.password.min_length) {
                errors.add_error(
                    fields::PASSWORD,
                    format!(
                        "Password must be at least {} characters",
                        config.password.min_length
                    ),
                    codes::TOO_SHORT,
                );
            }
        }
        CredentialMode::Otp => {
            if draft.otp_code().is_empty() {
                errors.add_error(
                    fields::OTP,
                    "Verification code is required",
                    codes::REQUIRED,
                );
            } else if !is_valid_otp_code(draft.otp_code(), config.otp.code_length) {
                errors.add_error(
                    fields::OTP,
                    format!(
                        "Verification code must be {} digits",
                        config.otp.code_length
                    ),
                    codes::INVALID_FORMAT,
                );
            } else if lifecycle == OtpLifecycle::Expired {
                errors.add_error(
                    fields::OTP,
                    "Verification code has expired, request a new one",
                    codes::EXPIRED,
                );
            }
        }
    }

    errors
}

/// Whether the draft may be submitted
///
/// True iff no field errors exist and no external call is outstanding.
pub fn can_submit(
    draft: &LoginDraft,
    config: &FlowConfig,
    lifecycle: OtpLifecycle,
    call_in_flight: bool,
) -> bool {
    !call_in_flight && field_errors(draft, config, lifecycle).is_empty()
}

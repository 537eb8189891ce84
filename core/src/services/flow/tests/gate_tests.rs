//! Unit tests for the submission gate

use crate::domain::entities::draft::{CredentialMode, LoginDraft};
use crate::services::flow::config::FlowConfig;
use crate::services::flow::gate::{self, codes, fields};
use crate::services::flow::types::OtpLifecycle;

fn password_draft(identity: &str, password: &str) -> LoginDraft {
    let mut draft = LoginDraft::new();
    draft.set_identity(identity);
    draft.set_password(password);
    draft
}

fn otp_draft(identity: &str, code: &str) -> LoginDraft {
    let mut draft = LoginDraft::new();
    draft.set_mode(CredentialMode::Otp);
    draft.set_identity(identity);
    draft.set_otp_code(code);
    draft
}

#[test]
fn test_empty_identity_reports_required() {
    let config = FlowConfig::default();
    let errors = gate::field_errors(
        &password_draft("", "secret1"),
        &config,
        OtpLifecycle::NoChallenge,
    );

    assert_eq!(errors.get(fields::IDENTITY).unwrap().code, codes::REQUIRED);
}

#[test]
fn test_malformed_identity_reports_invalid_format() {
    let config = FlowConfig::default();
    let errors = gate::field_errors(
        &password_draft("0912345678", "secret1"),
        &config,
        OtpLifecycle::NoChallenge,
    );

    assert_eq!(
        errors.get(fields::IDENTITY).unwrap().code,
        codes::INVALID_FORMAT
    );
}

#[test]
fn test_password_rules_apply_only_in_password_mode() {
    let config = FlowConfig::default();

    let errors = gate::field_errors(
        &password_draft("09123456789", ""),
        &config,
        OtpLifecycle::NoChallenge,
    );
    assert_eq!(errors.get(fields::PASSWORD).unwrap().code, codes::REQUIRED);
    assert!(!errors.contains(fields::OTP));

    let errors = gate::field_errors(
        &password_draft("09123456789", "12345"),
        &config,
        OtpLifecycle::NoChallenge,
    );
    assert_eq!(errors.get(fields::PASSWORD).unwrap().code, codes::TOO_SHORT);
}

#[test]
fn test_otp_rules_apply_only_in_otp_mode() {
    let config = FlowConfig::default();

    let errors = gate::field_errors(
        &otp_draft("09123456789", ""),
        &config,
        OtpLifecycle::Pending,
    );
    assert_eq!(errors.get(fields::OTP).unwrap().code, codes::REQUIRED);
    assert!(!errors.contains(fields::PASSWORD));

    // Sanitation happens in the controller; a short code fails the format rule
    let errors = gate::field_errors(
        &otp_draft("09123456789", "123"),
        &config,
        OtpLifecycle::Pending,
    );
    assert_eq!(errors.get(fields::OTP).unwrap().code, codes::INVALID_FORMAT);
}

#[test]
fn test_independent_fields_report_simultaneously() {
    let config = FlowConfig::default();
    let errors = gate::field_errors(&password_draft("", ""), &config, OtpLifecycle::NoChallenge);

    assert_eq!(errors.len(), 2);
    assert!(errors.contains(fields::IDENTITY));
    assert!(errors.contains(fields::PASSWORD));
}

#[test]
fn test_expired_challenge_blocks_well_formed_code() {
    let config = FlowConfig::default();
    let draft = otp_draft("09123456789", "123456");

    let errors = gate::field_errors(&draft, &config, OtpLifecycle::Expired);
    assert_eq!(errors.get(fields::OTP).unwrap().code, codes::EXPIRED);

    // The same draft passes once a fresh challenge is pending
    let errors = gate::field_errors(&draft, &config, OtpLifecycle::Pending);
    assert!(errors.is_empty());
}

#[test]
fn test_required_wins_over_expired() {
    let config = FlowConfig::default();
    let errors = gate::field_errors(
        &otp_draft("09123456789", ""),
        &config,
        OtpLifecycle::Expired,
    );

    assert_eq!(errors.get(fields::OTP).unwrap().code, codes::REQUIRED);
}

#[test]
fn test_inactive_mode_errors_cleared_by_switch() {
    let config = FlowConfig::default();
    let mut draft = password_draft("09123456789", "123");

    let errors = gate::field_errors(&draft, &config, OtpLifecycle::NoChallenge);
    assert!(errors.contains(fields::PASSWORD));

    draft.set_mode(CredentialMode::Otp);
    let errors = gate::field_errors(&draft, &config, OtpLifecycle::NoChallenge);
    assert!(!errors.contains(fields::PASSWORD));
    assert!(errors.contains(fields::OTP));
}

#[test]
fn test_can_submit_requires_no_errors_and_no_in_flight_call() {
    let config = FlowConfig::default();
    let draft = password_draft("09123456789", "secret1");

    assert!(gate::can_submit(
        &draft,
        &config,
        OtpLifecycle::NoChallenge,
        false
    ));
    assert!(!gate::can_submit(
        &draft,
        &config,
        OtpLifecycle::NoChallenge,
        true
    ));
    assert!(!gate::can_submit(
        &password_draft("09123456789", ""),
        &config,
        OtpLifecycle::NoChallenge,
        false
    ));
}

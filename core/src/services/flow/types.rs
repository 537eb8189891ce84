//! Types for flow controller requests and results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::entities::draft::{Credential, CredentialMode};

/// Session token returned by the authentication backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Request dispatched to the authentication backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    /// The phone number acting as the login principal
    pub identity: String,
    /// The active mode's credential
    pub credential: Credential,
}

/// Outcome of a `request_otp` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpRequestStatus {
    /// A new challenge was installed
    Issued { expires_at: DateTime<Utc> },
    /// An issuance call was already outstanding; the call was a no-op
    AlreadyRequesting,
}

/// Lifecycle of the one-time code challenge as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpLifecycle {
    /// No challenge has been issued for the current identity
    NoChallenge,
    /// A challenge is live and not yet expired
    Pending,
    /// The challenge's validity window has elapsed
    Expired,
}

/// Aggregated view of the flow state for the presentation layer
///
/// Everything a render pass needs in one read: the draft values, the derived
/// validation and gating results, and the challenge countdown.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSnapshot {
    pub mode: CredentialMode,
    pub identity: String,
    pub password: String,
    pub otp_code: String,
    pub field_errors: HashMap<String, String>,
    pub can_submit: bool,
    pub lifecycle: OtpLifecycle,
    pub seconds_remaining: i64,
    pub resend_eligible: bool,
}

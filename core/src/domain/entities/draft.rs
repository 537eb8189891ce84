//! In-progress sign-in form state.

use serde::{Deserialize, Serialize};

/// Credential mode selected by the user
///
/// Exactly one mode is active at a time; the submission gate only looks at
/// the active mode's secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialMode {
    #[default]
    Password,
    Otp,
}

/// The active mode's credential as a tagged union
///
/// Carries only the field relevant to the active mode, so consumers
/// pattern-match on the variant instead of branching over a mode flag and
/// two optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Credential {
    Password(String),
    OtpCode(String),
}

/// In-progress form state owned by the flow controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    mode: CredentialMode,
    identity: String,
    password: String,
    otp_code: String,
}

impl LoginDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> CredentialMode {
        self.mode
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn otp_code(&self) -> &str {
        &self.otp_code
    }

    /// Switch the active credential mode
    ///
    /// The password draft survives switches in both directions; the one-time
    /// code input, a single-use secret, is cleared when leaving Otp mode.
    /// Returns `true` if the mode actually changed.
    pub fn set_mode(&mut self, mode: CredentialMode) -> bool {
        if self.mode == mode {
            return false;
        }
        if mode == CredentialMode::Password {
            self.otp_code.clear();
        }
        self.mode = mode;
        true
    }

    /// Update the identity; returns `true` if the value changed
    pub fn set_identity(&mut self, identity: impl Into<String>) -> bool {
        let identity = identity.into();
        if self.identity == identity {
            return false;
        }
        self.identity = identity;
        true
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Store an already-sanitized one-time code
    pub fn set_otp_code(&mut self, otp_code: impl Into<String>) {
        self.otp_code = otp_code.into();
    }

    /// The active mode's credential
    pub fn credential(&self) -> Credential {
        match self.mode {
            CredentialMode::Password => Credential::Password(self.password.clone()),
            CredentialMode::Otp => Credential::OtpCode(self.otp_code.clone()),
        }
    }
}

//! Traits for the external issuance and authentication backends

use async_trait::async_trait;

use super::types::{AuthRequest, SessionToken};

/// Trait for the external one-time code issuance service
///
/// Code generation and transmission are owned by the backend; the controller
/// only decides when a request is permitted.
#[async_trait]
pub trait OtpIssuer: Send + Sync {
    /// Dispatch a one-time code to an identity, returning a message id
    async fn issue_otp(&self, identity: &str) -> Result<String, String>;
}

/// Trait for the external authentication backend
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Verify the submitted credentials, returning a session token
    async fn authenticate(&self, request: &AuthRequest) -> Result<SessionToken, String>;
}

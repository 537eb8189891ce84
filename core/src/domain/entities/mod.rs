//! Domain entities representing the sign-in flow state.

pub mod challenge;
pub mod draft;

// Re-export commonly used types
pub use challenge::{ChallengePhase, OtpChallenge, DEFAULT_TTL_SECONDS};
pub use draft::{Credential, CredentialMode, LoginDraft};

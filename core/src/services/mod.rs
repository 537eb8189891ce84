//! Flow services composing the sign-in state machine.

pub mod flow;

// Re-export commonly used types
pub use flow::{
    AuthBackend, AuthRequest, Countdown, FlowConfig, FlowController, FlowSnapshot, OtpIssuer,
    OtpLifecycle, OtpRequestStatus, SessionToken,
};

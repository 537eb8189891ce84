//! Configuration for the flow controller

use af_shared::config::{OtpPolicy, PasswordPolicy};
use std::time::Duration;

/// Configuration for the flow controller
#[derive(Debug, Clone, Default)]
pub struct FlowConfig {
    /// One-time code policy (TTL, code length, countdown cadence)
    pub otp: OtpPolicy,
    /// Password policy (minimum length)
    pub password: PasswordPolicy,
}

impl FlowConfig {
    /// Countdown tick cadence as a [`Duration`]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.otp.tick_interval_ms)
    }
}

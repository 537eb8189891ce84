//! Credential policy configuration

use serde::{Deserialize, Serialize};

/// One-time code policy
///
/// Controls how long an issued code stays valid, how many digits it carries,
/// and how often the countdown is recomputed while a code is live.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpPolicy {
    /// Seconds an issued code remains valid
    pub ttl_seconds: i64,

    /// Number of digits in a code
    pub code_length: usize,

    /// Countdown recomputation cadence in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    1_000
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            ttl_seconds: 120, // 2 minutes
            code_length: 6,
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl OtpPolicy {
    /// Set the code time-to-live in seconds
    pub fn with_ttl_seconds(mut self, seconds: i64) -> Self {
        self.ttl_seconds = seconds;
        self
    }

    /// Set the number of digits in a code
    pub fn with_code_length(mut self, length: usize) -> Self {
        self.code_length = length;
        self
    }

    /// Set the countdown tick cadence in milliseconds
    pub fn with_tick_interval_ms(mut self, millis: u64) -> Self {
        self.tick_interval_ms = millis;
        self
    }
}

/// Password policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordPolicy {
    /// Minimum password length in characters
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 6 }
    }
}

impl PasswordPolicy {
    /// Set the minimum password length
    pub fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }
}

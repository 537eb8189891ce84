//! One-time code challenge entity for phone-based sign-in.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default time-to-live for an issued code (2 minutes)
pub const DEFAULT_TTL_SECONDS: i64 = 120;

/// Phase of a challenge, derived from its expiry timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengePhase {
    /// Issued and still within its validity window
    Pending,
    /// The validity window has elapsed
    Expired,
}

/// One issued one-time code request, bound to an identity
///
/// A challenge is never mutated in place: a resend creates a replacement
/// with a fresh expiry window. Only the absolute expiry timestamp is stored;
/// phase and remaining time are derived on read against a caller-supplied
/// clock reading, so there is no stored counter that can drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    /// Unique identifier, used for log correlation
    pub id: Uuid,

    /// Phone number this challenge was issued for
    pub identity: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpChallenge {
    /// Issue a new challenge for an identity, expiring `ttl_seconds` from now
    pub fn issue(identity: impl Into<String>, ttl_seconds: i64) -> Self {
        Self::issue_at(identity, Utc::now(), ttl_seconds)
    }

    /// Issue a new challenge with an explicit issuance instant
    pub fn issue_at(identity: impl Into<String>, now: DateTime<Utc>, ttl_seconds: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            identity: identity.into(),
            issued_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Whether the challenge was issued for the given identity
    pub fn is_for(&self, identity: &str) -> bool {
        self.identity == identity
    }

    /// Whether the validity window has elapsed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Phase of the challenge at `now`
    pub fn phase_at(&self, now: DateTime<Utc>) -> ChallengePhase {
        if self.is_expired_at(now) {
            ChallengePhase::Expired
        } else {
            ChallengePhase::Pending
        }
    }

    /// Whole seconds left at `now`, rounded up, floored at zero
    pub fn seconds_remaining_at(&self, now: DateTime<Utc>) -> i64 {
        let millis = (self.expires_at - now).num_milliseconds();
        if millis <= 0 {
            0
        } else {
            (millis + 999) / 1_000
        }
    }
}

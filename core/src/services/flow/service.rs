//! Main flow controller implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use af_shared::utils::validation::FieldErrors;

use crate::domain::entities::challenge::{ChallengePhase, OtpChallenge};
use crate::domain::entities::draft::{CredentialMode, LoginDraft};
use crate::errors::{FlowError, FlowResult};

use super::config::FlowConfig;
use super::countdown::Countdown;
use super::gate;
use super::traits::{AuthBackend, OtpIssuer};
use super::types::{AuthRequest, FlowSnapshot, OtpLifecycle, OtpRequestStatus, SessionToken};
use super::validation::{is_valid_identity, mask_identity, sanitize_otp_input};

/// Clears an in-flight flag when dropped, so a cancelled call cannot leave
/// the controller permanently marked busy.
struct InFlightGuard<'a>(&'a mut bool);

impl<'a> InFlightGuard<'a> {
    fn arm(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Flow controller for one sign-in attempt
///
/// Owns the login draft and the current challenge (at most one live at a
/// time), and mediates every call to the external backends. One instance per
/// attempt; operations take `&mut self`, so there is a single logical owner
/// and at most one outstanding external call of each kind. Dropping the
/// controller aborts the countdown task and abandons in-flight calls.
pub struct FlowController<I: OtpIssuer, A: AuthBackend> {
    /// External one-time code issuance service
    issuer: Arc<I>,
    /// External authentication backend
    backend: Arc<A>,
    /// Controller configuration
    config: FlowConfig,
    /// In-progress form state
    draft: LoginDraft,
    /// Current challenge, if one has been issued for the draft identity
    challenge: Option<OtpChallenge>,
    /// Countdown task of the current challenge
    countdown: Option<Countdown>,
    /// Whether an issuance call is outstanding
    requesting_otp: bool,
    /// Whether a submission is outstanding
    submitting: bool,
}

impl<I: OtpIssuer, A: AuthBackend> FlowController<I, A> {
    /// Create a new flow controller
    pub fn new(issuer: Arc<I>, backend: Arc<A>, config: FlowConfig) -> Self {
        Self {
            issuer,
            backend,
            config,
            draft: LoginDraft::new(),
            challenge: None,
            countdown: None,
            requesting_otp: false,
            submitting: false,
        }
    }

    pub fn mode(&self) -> CredentialMode {
        self.draft.mode()
    }

    pub fn identity(&self) -> &str {
        self.draft.identity()
    }

    pub fn password(&self) -> &str {
        self.draft.password()
    }

    pub fn otp_code(&self) -> &str {
        self.draft.otp_code()
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn challenge(&self) -> Option<&OtpChallenge> {
        self.challenge.as_ref()
    }

    /// Switch the active credential mode
    ///
    /// The challenge is not destroyed by a mode switch: switching to
    /// Password leaves it dormant, and switching back to Otp re-surfaces its
    /// timer state. Only an identity change destroys a challenge.
    pub fn set_mode(&mut self, mode: CredentialMode) {
        if self.draft.set_mode(mode) {
            debug!(?mode, event = "mode_switched", "Credential mode switched");
        }
    }

    /// Update the identity draft
    ///
    /// A challenge is bound to the identity it was issued for; editing the
    /// phone field to a different value drops the pending challenge and its
    /// countdown.
    pub fn set_identity(&mut self, identity: impl Into<String>) {
        if !self.draft.set_identity(identity) {
            return;
        }
        if let Some(challenge) = &self.challenge {
            if !challenge.is_for(self.draft.identity()) {
                info!(
                    challenge_id = %challenge.id,
                    event = "challenge_invalidated",
                    "Identity changed, dropping pending challenge"
                );
                self.challenge = None;
                self.countdown = None;
            }
        }
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.draft.set_password(password);
    }

    /// Update the one-time code draft, discarding non-digit characters and
    /// keeping at most the configured number of digits
    pub fn set_otp_code(&mut self, otp_code: &str) {
        let sanitized = sanitize_otp_input(otp_code, self.config.otp.code_length);
        self.draft.set_otp_code(sanitized);
    }

    /// Challenge lifecycle at an explicit instant
    pub fn lifecycle_at(&self, now: DateTime<Utc>) -> OtpLifecycle {
        match &self.challenge {
            None => OtpLifecycle::NoChallenge,
            Some(challenge) => match challenge.phase_at(now) {
                ChallengePhase::Pending => OtpLifecycle::Pending,
                ChallengePhase::Expired => OtpLifecycle::Expired,
            },
        }
    }

    pub fn lifecycle(&self) -> OtpLifecycle {
        self.lifecycle_at(Utc::now())
    }

    /// Whole seconds until the current challenge expires (zero without one)
    pub fn seconds_remaining_at(&self, now: DateTime<Utc>) -> i64 {
        self.challenge
            .as_ref()
            .map_or(0, |c| c.seconds_remaining_at(now))
    }

    pub fn seconds_remaining(&self) -> i64 {
        self.seconds_remaining_at(Utc::now())
    }

    /// Whether a new code may be requested at an explicit instant
    ///
    /// Requires a valid identity, no outstanding issuance call, and either
    /// no challenge or an expired one.
    pub fn resend_eligible_at(&self, now: DateTime<Utc>) -> bool {
        is_valid_identity(self.draft.identity())
            && !self.requesting_otp
            && self.challenge.as_ref().map_or(true, |c| c.is_expired_at(now))
    }

    pub fn resend_eligible(&self) -> bool {
        self.resend_eligible_at(Utc::now())
    }

    /// Field-level validation errors at an explicit instant
    pub fn field_errors_at(&self, now: DateTime<Utc>) -> FieldErrors {
        gate::field_errors(&self.draft, &self.config, self.lifecycle_at(now))
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.field_errors_at(Utc::now())
    }

    /// Whether the draft may be submitted at an explicit instant
    pub fn can_submit_at(&self, now: DateTime<Utc>) -> bool {
        gate::can_submit(
            &self.draft,
            &self.config,
            self.lifecycle_at(now),
            self.submitting || self.requesting_otp,
        )
    }

    pub fn can_submit(&self) -> bool {
        self.can_submit_at(Utc::now())
    }

    /// Subscribe to the countdown of the current challenge, if one is live
    pub fn subscribe_countdown(&self) -> Option<watch::Receiver<i64>> {
        self.countdown.as_ref().map(|c| c.subscribe())
    }

    /// Aggregated view of the flow state at an explicit instant
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> FlowSnapshot {
        FlowSnapshot {
            mode: self.draft.mode(),
            identity: self.draft.identity().to_string(),
            password: self.draft.password().to_string(),
            otp_code: self.draft.otp_code().to_string(),
            field_errors: self.field_errors_at(now).to_field_map(),
            can_submit: self.can_submit_at(now),
            lifecycle: self.lifecycle_at(now),
            seconds_remaining: self.seconds_remaining_at(now),
            resend_eligible: self.resend_eligible_at(now),
        }
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        self.snapshot_at(Utc::now())
    }

    /// Request a one-time code for the draft identity
    ///
    /// Preconditions: the identity is valid, no issuance call is
    /// outstanding, and no un-expired challenge exists. A duplicate call
    /// while one is outstanding is a no-op. The new challenge is installed
    /// only after the issuer acknowledges, so a failed call leaves the
    /// previous state untouched and retry is permitted immediately.
    pub async fn request_otp(&mut self) -> FlowResult<OtpRequestStatus> {
        if self.requesting_otp {
            return Ok(OtpRequestStatus::AlreadyRequesting);
        }

        let identity = self.draft.identity().to_string();
        if !is_valid_identity(&identity) {
            warn!(
                identity = %mask_identity(&identity),
                event = "otp_request_rejected",
                "Code requested for an invalid identity"
            );
            return Err(FlowError::InvalidIdentity);
        }

        let now = Utc::now();
        if let Some(challenge) = &self.challenge {
            if !challenge.is_expired_at(now) {
                let seconds_remaining = challenge.seconds_remaining_at(now);
                warn!(
                    identity = %mask_identity(&identity),
                    seconds_remaining,
                    event = "otp_resend_throttled",
                    "Code requested while the current challenge is still valid"
                );
                return Err(FlowError::ResendThrottled { seconds_remaining });
            }
        }

        let issuer = Arc::clone(&self.issuer);
        let result = {
            let _guard = InFlightGuard::arm(&mut self.requesting_otp);
            issuer.issue_otp(&identity).await
        };

        match result {
            Ok(message_id) => {
                let challenge = OtpChallenge::issue(&identity, self.config.otp.ttl_seconds);
                info!(
                    identity = %mask_identity(&identity),
                    challenge_id = %challenge.id,
                    message_id = %message_id,
                    event = "otp_requested",
                    "One-time code dispatched"
                );

                let expires_at = challenge.expires_at;
                self.countdown = Some(Countdown::start(&challenge, self.config.tick_interval()));
                self.challenge = Some(challenge);
                Ok(OtpRequestStatus::Issued { expires_at })
            }
            Err(message) => {
                warn!(
                    identity = %mask_identity(&identity),
                    error = %message,
                    event = "otp_issuance_failed",
                    "Code issuance failed, state reverted"
                );
                Err(FlowError::Issuance { message })
            }
        }
    }

    /// Submit the draft to the authentication backend
    ///
    /// The draft must pass the submission gate and no external call may be
    /// outstanding. On rejection the draft is left intact for correction;
    /// the rejected secret is not auto-cleared. On success the flow
    /// terminates and session establishment takes over externally.
    pub async fn submit(&mut self) -> FlowResult<SessionToken> {
        if self.submitting || self.requesting_otp {
            return Err(FlowError::OperationInFlight);
        }

        let errors = self.field_errors_at(Utc::now());
        if !errors.is_empty() {
            debug!(
                error_count = errors.len(),
                event = "submit_rejected",
                "Submission blocked by field validation"
            );
            return Err(FlowError::InvalidDraft { errors });
        }

        let request = AuthRequest {
            identity: self.draft.identity().to_string(),
            credential: self.draft.credential(),
        };

        let backend = Arc::clone(&self.backend);
        let result = {
            let _guard = InFlightGuard::arm(&mut self.submitting);
            backend.authenticate(&request).await
        };

        match result {
            Ok(token) => {
                info!(
                    identity = %mask_identity(&request.identity),
                    event = "authenticated",
                    "Authentication succeeded"
                );
                self.challenge = None;
                self.countdown = None;
                Ok(token)
            }
            Err(reason) => {
                warn!(
                    identity = %mask_identity(&request.identity),
                    reason = %reason,
                    event = "authentication_rejected",
                    "Backend rejected the submitted credentials"
                );
                Err(FlowError::Authentication { reason })
            }
        }
    }
}

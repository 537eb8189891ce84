//! Countdown task for a live challenge
//!
//! The expiry timestamp is the only authoritative state; the task is a wake
//! signal that recomputes the remaining seconds against the wall clock on a
//! fixed cadence and publishes them through a watch channel. It exits on its
//! own once the countdown reaches zero and is aborted when the challenge is
//! dropped or replaced, so no timer outlives the flow that started it.

use chrono::Utc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::entities::challenge::OtpChallenge;

/// Handle to the countdown task of one live challenge
#[derive(Debug)]
pub struct Countdown {
    seconds: watch::Receiver<i64>,
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Spawn a countdown for `challenge`, ticking at `tick_interval`
    pub fn start(challenge: &OtpChallenge, tick_interval: Duration) -> Self {
        let challenge = challenge.clone();
        let initial = challenge.seconds_remaining_at(Utc::now());
        let (tx, rx) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick_interval);

            loop {
                ticker.tick().await;

                let remaining = challenge.seconds_remaining_at(Utc::now());
                if tx.send(remaining).is_err() {
                    break;
                }
                if remaining == 0 {
                    debug!(
                        challenge_id = %challenge.id,
                        event = "countdown_finished",
                        "Challenge countdown reached zero"
                    );
                    break;
                }
            }
        });

        Self {
            seconds: rx,
            handle,
        }
    }

    /// Subscribe to the published remaining-seconds values
    pub fn subscribe(&self) -> watch::Receiver<i64> {
        self.seconds.clone()
    }

    /// Most recently published remaining seconds
    pub fn latest(&self) -> i64 {
        *self.seconds.borrow()
    }

    /// Whether the task has exited (countdown reached zero or was stopped)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the task without waiting for it
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

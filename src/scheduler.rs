//! One-shot tick deadline that can be re-armed or cancelled at any time.

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep, sleep};
use tracing::debug;

/// Holds at most one pending tick.
///
/// Arming replaces whatever was pending and cancelling drops it, so a tick
/// scheduled for a previous game can never fire into a new one.
#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Option<Pin<Box<Sleep>>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the next tick `after` from now. Must be called inside a
    /// tokio runtime.
    pub fn arm(&mut self, after: Duration) {
        self.pending = Some(Box::pin(sleep(after)));
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!("cancelled pending tick");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|sleep| sleep.deadline())
    }

    /// Resolves when the pending tick is due, and never if nothing is
    /// pending. Safe to drop mid-wait inside `tokio::select!`.
    pub async fn expired(&mut self) {
        match self.pending.as_mut() {
            Some(sleep) => {
                sleep.as_mut().await;
                self.pending = None;
            }
            None => future::pending().await,
        }
    }
}

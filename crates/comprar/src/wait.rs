//! Bounded polling waits.
//!
//! Two contracts are built on the same poll loop: `poll_until` returns a
//! plain `bool` for tolerant callers that fold a timeout into a default, and
//! the page facade's `wait_for_*` methods turn `false` into a hard
//! [`Timeout`](crate::ComprarError::Timeout) error.

use crate::locator::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Options for a bounded wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Total time to keep polling
    pub timeout: Duration,
    /// Pause between probes
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl WaitOptions {
    /// Create options with the default timeout and poll interval
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total timeout in milliseconds
    #[must_use]
    pub const fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout = Duration::from_millis(ms);
        self
    }

    /// Set the poll interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval = Duration::from_millis(ms);
        self
    }
}

/// Poll `probe` until it returns `true` or the timeout expires.
///
/// The probe always runs at least once, so a zero timeout still observes the
/// current state.
pub async fn poll_until<F, Fut>(options: WaitOptions, mut probe: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = Instant::now() + options.timeout;
    loop {
        if probe().await {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(options.poll_interval).await;
    }
}

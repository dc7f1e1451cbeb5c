//! Leading-edge rate limiter for the move callback.

use std::time::Duration;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Minimum interval between move-callback invocations.
pub const MOVE_THROTTLE: Duration = Duration::from_millis(10);

/// Rate limiter, not a debouncer: the first call in a window passes
/// immediately, later calls within the interval are dropped (never deferred).
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Whether a call at `now` is allowed through.
    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Forget the last pass so the next call fires immediately.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

//! Host-driven clock.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock whose current instant is set explicitly.
///
/// Embedders without a usable system clock feed it the host's time (for a
/// browser, `Date.now()`); tests use it to step time deterministically.
///
/// # Examples
///
/// ```
/// use mockable::Clock;
/// use tasklist::task::adapters::clock::ManualClock;
///
/// let clock = ManualClock::new(1_000);
/// clock.advance(500);
/// assert_eq!(clock.utc().timestamp_millis(), 1_500);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now_millis: AtomicI64,
}

impl ManualClock {
    /// Creates a clock reading `now_millis` milliseconds since the epoch.
    #[must_use]
    pub const fn new(now_millis: i64) -> Self {
        Self {
            now_millis: AtomicI64::new(now_millis),
        }
    }

    /// Returns the current reading in milliseconds.
    #[must_use]
    pub fn now_millis(&self) -> i64 {
        self.now_millis.load(Ordering::SeqCst)
    }

    /// Moves the clock to `now_millis`.
    pub fn set(&self, now_millis: i64) {
        self.now_millis.store(now_millis, Ordering::SeqCst);
    }

    /// Moves the clock forward by `delta_millis`.
    pub fn advance(&self, delta_millis: i64) {
        self.now_millis.fetch_add(delta_millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_millis()).unwrap_or_default()
    }
}

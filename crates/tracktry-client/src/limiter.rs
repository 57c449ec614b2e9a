//! Permit pacing for outbound Tracktry calls.
//!
//! [`ApiLimiter`] hands out permits spaced evenly at `1s / N`. There is no
//! burst allowance: an idle limiter grants the next permit immediately, and
//! every later permit waits for its own slot. Waiters queue on a fair mutex,
//! so permits are granted in arrival order and none are dropped.
//!
//! Time comes from `tokio::time`, which lets tests drive the limiter with a
//! paused clock.

use std::num::NonZeroU32;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Paces outbound calls to at most `N` per second.
///
/// Share one instance behind an `Arc` so every caller draws from the same
/// budget.
#[derive(Debug)]
pub struct ApiLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl ApiLimiter {
    /// Creates a limiter allowing `permits_per_second` permits each second.
    #[must_use]
    pub fn new(permits_per_second: NonZeroU32) -> Self {
        // Round up so N + 1 consecutive permits always span at least a second.
        let nanos = 1_000_000_000u64.div_ceil(u64::from(permits_per_second.get()));
        Self {
            interval: Duration::from_nanos(nanos),
            next_slot: Mutex::new(None),
        }
    }

    /// Minimum spacing between two granted permits.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until a permit is available and consumes it.
    ///
    /// The slot is reserved under the lock and the wait happens after it is
    /// released, so concurrent callers each sleep until their own slot.
    pub async fn acquire(&self) {
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(reserved) if reserved > now => reserved,
                _ => now,
            };
            *next = Some(slot + self.interval);
            slot
        };

        if slot > Instant::now() {
            tracing::trace!(
                wait = ?slot.saturating_duration_since(Instant::now()),
                "waiting for Tracktry rate-limit permit"
            );
            tokio::time::sleep_until(slot).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn limiter(permits: u32) -> ApiLimiter {
        ApiLimiter::new(NonZeroU32::new(permits).expect("non-zero permits"))
    }

    #[test]
    fn interval_divides_one_second() {
        assert_eq!(limiter(1).interval(), Duration::from_secs(1));
        assert_eq!(limiter(4).interval(), Duration::from_millis(250));
    }

    #[test]
    fn interval_rounds_up() {
        assert_eq!(limiter(3).interval(), Duration::from_nanos(333_333_334));
    }

    #[tokio::test(start_paused = true)]
    async fn first_permit_is_immediate() {
        let limiter = limiter(2);
        let start = Instant::now();
        limiter.acquire().await;
        assert_eq!(Instant::now(), start);
    }

    #[tokio::test(start_paused = true)]
    async fn sequential_permits_are_paced() {
        let limiter = limiter(2);
        let start = Instant::now();
        let mut granted = Vec::new();
        for _ in 0..5 {
            limiter.acquire().await;
            granted.push(Instant::now().duration_since(start));
        }
        for (i, elapsed) in granted.iter().enumerate() {
            let expected = Duration::from_millis(500 * u64::try_from(i).unwrap());
            assert!(
                *elapsed >= expected,
                "permit {i} granted after {elapsed:?}, expected at least {expected:?}"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn idle_limiter_does_not_bank_permits() {
        let limiter = limiter(1);
        limiter.acquire().await;
        tokio::time::sleep(Duration::from_secs(10)).await;

        let start = Instant::now();
        limiter.acquire().await;
        assert_eq!(Instant::now(), start, "permit after idle should be immediate");
        limiter.acquire().await;
        assert!(
            Instant::now().duration_since(start) >= Duration::from_secs(1),
            "idle time must not turn into a burst"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_callers_never_exceed_rate() {
        const PERMITS: u32 = 3;
        let limiter = Arc::new(limiter(PERMITS));
        let start = Instant::now();

        let mut handles = Vec::new();
        for _ in 0..10 {
            let limiter = Arc::clone(&limiter);
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
                Instant::now().duration_since(start)
            }));
        }

        let mut granted = Vec::new();
        for handle in handles {
            granted.push(handle.await.expect("task should not panic"));
        }
        granted.sort();

        assert_eq!(granted.len(), 10, "every caller gets a permit");
        let window = usize::try_from(PERMITS).unwrap();
        for pair in granted.windows(window + 1) {
            assert!(
                pair[window] - pair[0] >= Duration::from_secs(1),
                "more than {PERMITS} permits within one second: {pair:?}"
            );
        }
    }
}

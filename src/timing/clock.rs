use std::sync::OnceLock;
use std::time::{Duration, Instant};

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Process-wide monotonic clock.
///
/// The epoch is fixed the first time any method is called and never moves
/// afterwards, so timestamps from different threads and different runs are
/// directly comparable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Clock {
    /// The instant the epoch was established.
    pub fn epoch() -> Instant {
        *EPOCH.get_or_init(Instant::now)
    }

    /// Current monotonic instant.
    pub fn now() -> Instant {
        // Touch the epoch first so it can never be later than `now`.
        Self::epoch();
        Instant::now()
    }

    /// Time elapsed since the epoch.
    pub fn elapsed() -> Duration {
        Self::since_epoch(Self::now())
    }

    /// Converts an instant into a duration since the epoch.
    ///
    /// Instants taken before the epoch saturate to zero.
    pub fn since_epoch(instant: Instant) -> Duration {
        instant.saturating_duration_since(Self::epoch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let a = Clock::elapsed();
        let b = Clock::elapsed();
        assert!(b >= a);
    }

    #[test]
    fn epoch_is_stable() {
        assert_eq!(Clock::epoch(), Clock::epoch());
    }

    #[test]
    fn instants_before_epoch_saturate() {
        let epoch = Clock::epoch();
        let earlier = epoch.checked_sub(Duration::from_millis(1)).unwrap_or(epoch);
        assert_eq!(Clock::since_epoch(earlier), Duration::ZERO);
    }
}

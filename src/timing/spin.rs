use std::time::Instant;

use super::Clock;

/// Busy-waits, yielding the processor between polls, until `done` returns `true`.
///
/// Returns the number of times the condition was polled.
pub fn spin_until(mut done: impl FnMut() -> bool) -> u64 {
    let mut polls = 1;
    while !done() {
        std::thread::yield_now();
        polls += 1;
    }
    polls
}

/// Busy-waits until the monotonic clock reaches `deadline`.
pub fn spin_until_instant(deadline: Instant) -> u64 {
    spin_until(|| Clock::now() >= deadline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn returns_immediately_when_already_done() {
        assert_eq!(spin_until(|| true), 1);
    }

    #[test]
    fn polls_until_condition_flips() {
        let mut remaining = 3;
        let polls = spin_until(|| {
            remaining -= 1;
            remaining == 0
        });
        assert_eq!(polls, 3);
    }

    #[test]
    fn waits_for_deadline() {
        let start = Clock::now();
        let deadline = start + Duration::from_micros(300);
        spin_until_instant(deadline);
        assert!(Clock::now() >= deadline);
    }
}

//! # Start Fence
//!
//! A countdown barrier that holds every philosopher of a run at the starting
//! line until all of them have arrived, so their timelines begin from a
//! comparable zero point.
//!
//! A fence belongs to exactly one run. The orchestrator creates a fresh one per
//! run and hands each philosopher an `Arc` to it; nothing about it is global.

pub mod error;

pub use error::*;

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::timing::spin_until;

/// Per-run countdown barrier with spin-and-yield waiting.
#[derive(Debug)]
pub struct Fence {
    limit: usize,
    remaining: AtomicUsize,
}

impl Fence {
    /// Creates a fence that opens once `limit` philosophers have arrived.
    pub fn new(limit: usize) -> Result<Self, FenceError> {
        if limit == 0 {
            return Err(FenceError::NonPositiveLimit);
        }
        Ok(Self {
            limit,
            remaining: AtomicUsize::new(limit),
        })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Philosophers still expected before the fence opens.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    /// Registers one arrival without waiting.
    ///
    /// Fails if the countdown already reached zero.
    pub fn arrive(&self) -> Result<(), FenceError> {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .map(|_| ())
            .map_err(|_| FenceError::Overrun { limit: self.limit })
    }

    /// Spins (yielding) until every expected philosopher has arrived.
    pub fn wait(&self) {
        spin_until(|| self.remaining() == 0);
    }

    /// Registers this arrival and waits for the rest.
    pub fn arrive_and_wait(&self) -> Result<(), FenceError> {
        self.arrive()?;
        self.wait();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn zero_limit_is_rejected() {
        assert_eq!(Fence::new(0).unwrap_err(), FenceError::NonPositiveLimit);
    }

    #[test]
    fn overrun_is_reported() {
        let fence = Fence::new(1).unwrap();
        fence.arrive_and_wait().unwrap();
        assert_eq!(
            fence.arrive().unwrap_err(),
            FenceError::Overrun { limit: 1 }
        );
        assert_eq!(fence.remaining(), 0);
    }

    #[test]
    fn nobody_passes_before_everyone_arrives() {
        const N: usize = 6;
        let fence = Arc::new(Fence::new(N).unwrap());
        let arrived = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..N)
            .map(|_| {
                let fence = fence.clone();
                let arrived = arrived.clone();
                std::thread::spawn(move || {
                    arrived.fetch_add(1, Ordering::SeqCst);
                    fence.arrive_and_wait().unwrap();
                    arrived.load(Ordering::SeqCst)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), N);
        }
    }
}

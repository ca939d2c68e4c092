//! # Forks
//!
//! A [`Fork`] is the exclusive resource philosophers compete for. It exposes a
//! single non-blocking operation, [`Fork::try_acquire`], which either hands out
//! an owned [`ForkGuard`] or reports that somebody else is holding the fork.
//!
//! ## Ownership
//!
//! Holding a fork *is* holding its guard. The guard is a plain value: it can be
//! moved into a pair, passed down the state machine, and dropped (or
//! [`released`](ForkGuard::release)) to give the fork back. It cannot be cloned,
//! so the borrow checker rules out two owners of the same fork.
//!
//! The fork never emits events itself. The philosopher that acquires or
//! releases it records what happened in its own sink.

use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, TryLockError};

static NEXT_FORK_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-lifetime unique identity of a fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForkId(pub usize);

impl fmt::Display for ForkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fork<{}>", self.0)
    }
}

/// A single exclusive-access resource.
#[derive(Debug)]
pub struct Fork {
    id: ForkId,
    lock: Mutex<()>,
    acquisitions: AtomicU64,
    releases: AtomicU64,
}

impl Fork {
    /// Creates an unheld fork with the next process-wide id.
    pub fn new() -> Self {
        Self {
            id: ForkId(NEXT_FORK_ID.fetch_add(1, Ordering::Relaxed)),
            lock: Mutex::new(()),
            acquisitions: AtomicU64::new(0),
            releases: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> ForkId {
        self.id
    }

    /// Tries to take the fork without blocking.
    ///
    /// Returns `None` immediately if another guard is alive. Among racing
    /// callers exactly one wins; which one is up to the underlying mutex.
    pub fn try_acquire(&self) -> Option<ForkGuard<'_>> {
        let lock = match self.lock.try_lock() {
            Ok(lock) => lock,
            // The lock protects `()`, so a panic while holding it cannot have
            // left anything half-written.
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return None,
        };
        self.acquisitions.fetch_add(1, Ordering::Relaxed);
        Some(ForkGuard { fork: self, _lock: lock })
    }

    /// Number of successful acquisitions over the fork's lifetime.
    pub fn acquisitions(&self) -> u64 {
        self.acquisitions.load(Ordering::Relaxed)
    }

    /// Number of releases over the fork's lifetime.
    pub fn releases(&self) -> u64 {
        self.releases.load(Ordering::Relaxed)
    }

    /// `true` while some guard for this fork is alive.
    pub fn is_held(&self) -> bool {
        matches!(self.lock.try_lock(), Err(TryLockError::WouldBlock))
    }
}

impl Default for Fork {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(f)
    }
}

/// Exclusive ownership of one [`Fork`]. Dropping it releases the fork.
#[must_use = "dropping a ForkGuard releases the fork immediately"]
pub struct ForkGuard<'a> {
    fork: &'a Fork,
    _lock: MutexGuard<'a, ()>,
}

impl ForkGuard<'_> {
    pub fn id(&self) -> ForkId {
        self.fork.id
    }

    /// Gives the fork back and returns its id so the caller can log the release.
    pub fn release(self) -> ForkId {
        self.fork.id
    }
}

impl Drop for ForkGuard<'_> {
    fn drop(&mut self) {
        self.fork.releases.fetch_add(1, Ordering::Relaxed);
    }
}

impl fmt::Debug for ForkGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForkGuard").field("fork", &self.fork.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn ids_are_unique() {
        let a = Fork::new();
        let b = Fork::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn second_acquire_fails_while_held() {
        let fork = Fork::new();
        let guard = fork.try_acquire().expect("fresh fork is free");
        assert!(fork.is_held());
        assert!(fork.try_acquire().is_none());

        assert_eq!(guard.release(), fork.id());
        assert!(!fork.is_held());
        assert!(fork.try_acquire().is_some());
    }

    #[test]
    fn counters_balance() {
        let fork = Fork::new();
        for _ in 0..10 {
            let guard = fork.try_acquire().unwrap();
            drop(guard);
        }
        assert!(fork.try_acquire().is_some());
        assert_eq!(fork.acquisitions(), 11);
        assert_eq!(fork.releases(), 11);
    }

    #[test]
    fn poisoned_fork_is_still_usable() {
        let fork = Fork::new();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = fork.try_acquire().unwrap();
            panic!("philosopher choked");
        }));
        assert!(fork.try_acquire().is_some());
    }

    #[test]
    fn never_two_owners_under_contention() {
        let fork = Fork::new();
        let inside = AtomicUsize::new(0);
        let wins = AtomicUsize::new(0);

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..2_000 {
                        if let Some(guard) = fork.try_acquire() {
                            let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                            assert_eq!(now, 1, "two owners at once");
                            wins.fetch_add(1, Ordering::Relaxed);
                            std::thread::yield_now();
                            inside.fetch_sub(1, Ordering::SeqCst);
                            drop(guard);
                        }
                    }
                });
            }
        });

        let wins = wins.load(Ordering::Relaxed) as u64;
        assert!(wins > 0);
        assert_eq!(fork.acquisitions(), wins);
        assert_eq!(fork.releases(), wins);
    }
}

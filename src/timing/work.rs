use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{spin_until_instant, Clock};

/// Inclusive `[min, max]` bounds of a unit of work, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkBounds {
    pub min: u64,
    pub max: u64,
}

impl WorkBounds {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// A degenerate range that always draws `micros`.
    pub const fn exactly(micros: u64) -> Self {
        Self::new(micros, micros)
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    fn ordered(&self) -> (u64, u64) {
        (self.min.min(self.max), self.min.max(self.max))
    }
}

impl Default for WorkBounds {
    fn default() -> Self {
        Self::new(50, 200)
    }
}

/// Timestamps of one completed unit of work, relative to the [`Clock`] epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSpan {
    pub start: Duration,
    pub planned_end: Duration,
    pub end: Duration,
}

impl WorkSpan {
    pub fn planned(&self) -> Duration {
        self.planned_end.saturating_sub(self.start)
    }

    pub fn actual(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }

    /// Scheduling noise: how far past the planned end the work really finished.
    pub fn overrun(&self) -> Duration {
        self.end.saturating_sub(self.planned_end)
    }
}

impl fmt::Display for WorkSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time: {:.3} us - {:.3} us",
            micros(self.planned()),
            micros(self.actual())
        )
    }
}

pub(crate) fn micros(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1000.0
}

/// A unit of simulated work with a randomly drawn length.
///
/// The length is fixed at construction; [`BoundedWork::work`] then burns CPU
/// (spin + yield) until that much time has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedWork {
    duration: Duration,
}

impl BoundedWork {
    /// Draws a duration uniformly from `bounds` using the thread-local RNG.
    pub fn new(bounds: WorkBounds) -> Self {
        Self::with_rng(bounds, &mut rand::thread_rng())
    }

    /// Draws a duration uniformly from `bounds` using the given RNG.
    pub fn with_rng<R: Rng + ?Sized>(bounds: WorkBounds, rng: &mut R) -> Self {
        let (min, max) = bounds.ordered();
        Self {
            duration: Duration::from_micros(rng.gen_range(min..=max)),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Actively waits until the drawn duration has elapsed.
    pub fn work(&self) -> WorkSpan {
        let start = Clock::now();
        let planned_end = start + self.duration;
        spin_until_instant(planned_end);
        WorkSpan {
            start: Clock::since_epoch(start),
            planned_end: Clock::since_epoch(planned_end),
            end: Clock::elapsed(),
        }
    }
}

impl fmt::Display for BoundedWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for duration: {} us", self.duration.as_micros())
    }
}

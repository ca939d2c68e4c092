//! Error types for the start fence.

use thiserror::Error;

/// Misconfiguration of a [`Fence`](super::Fence).
///
/// Both variants mean the run was wired wrong (the fence was sized for a
/// different number of philosophers than actually arrived). Neither is a
/// contention outcome, so neither is retried.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FenceError {
    /// The fence was created for zero philosophers.
    #[error("fence limit must be positive")]
    NonPositiveLimit,

    /// More philosophers arrived than the fence was created for.
    #[error("fence overrun: more than {limit} philosophers arrived")]
    Overrun { limit: usize },
}

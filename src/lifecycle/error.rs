//! Error types for running a dinner.

use thiserror::Error;

use crate::config::ConfigError;
use crate::fence::FenceError;

/// Everything that can abort a dinner.
///
/// Failed fork acquisitions and starvation are *not* here: they are ordinary
/// outcomes of the protocol and show up as events on the timeline.
#[derive(Debug, Error)]
pub enum DinnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("start fence misconfigured: {0}")]
    Fence(#[from] FenceError),

    #[error("table has {table} seats but the dinner is configured for {config}")]
    SeatMismatch { table: usize, config: usize },

    #[error("philosopher {seat} panicked: {source}")]
    PhilosopherPanicked {
        seat: usize,
        source: tokio::task::JoinError,
    },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

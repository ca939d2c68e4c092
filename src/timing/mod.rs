//! # Timing Primitives
//!
//! Everything in the simulation that touches the wall clock lives here.
//!
//! - [`clock`]: the process-wide monotonic epoch every event is stamped against.
//! - [`spin`]: the single busy-wait loop used by both the start fence and work.
//! - [`work`]: [`BoundedWork`], a randomly sized slice of active waiting.
//!
//! Waiting is deliberately *active* (spin + yield) instead of sleeping. A
//! sleeping thread wakes up on the scheduler's terms, which smears the event
//! timeline; a spinning thread observes its deadline within a yield quantum.

pub mod clock;
pub mod spin;
pub mod work;

pub use clock::*;
pub use spin::*;
pub use work::*;

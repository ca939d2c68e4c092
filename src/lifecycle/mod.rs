//! # Dinner Lifecycle & Orchestration
//!
//! Philosophers are simple on their own. Seating them around a shared ring of
//! forks, starting them together and collecting what they recorded is where
//! the wiring lives. This module is that wiring.
//!
//! **Key Responsibilities:**
//! 1. **Ring construction** - one [`Fork`](crate::fork::Fork) per seat, created once per [`Table`]
//! 2. **Seating** - fork `i` is shared by philosophers `i` and `i + 1`; the last seat is right-handed
//! 3. **Start fence** - a fresh [`Fence`](crate::fence::Fence) per run, handed to every philosopher
//! 4. **Threads** - one blocking thread per philosopher, joined before the run ends
//! 5. **Assembly** - the returned sinks become one [`Timeline`](crate::timeline::Timeline)
//! 6. **Observability setup** - [`setup_tracing`]
//!
//! ## The Table Pattern
//!
//! ```rust,ignore
//! impl Table {
//!     pub async fn dine(&self, config: &DinnerConfig) -> Result<Timeline, DinnerError> {
//!         // 1. One fence per run
//!         let fence = Arc::new(Fence::new(self.seats())?);
//!
//!         // 2. One thread per philosopher
//!         let handles: Vec<_> = seatings
//!             .map(|seating| {
//!                 let philosopher = Philosopher::new(/* seat, hand, seating, sink, fence, menu */);
//!                 tokio::task::spawn_blocking(move || philosopher.run())
//!             })
//!             .collect();
//!
//!         // 3. Join and merge
//!         let mut sinks = Vec::new();
//!         for handle in handles {
//!             sinks.push(handle.await??);
//!         }
//!         Ok(Timeline::assemble(sinks))
//!     }
//! }
//! ```
//!
//! ## No Cancellation
//!
//! A run always goes to completion: every philosopher eats its fixed number of
//! meals and leaves. There is no shutdown channel. Callers that need a bound on
//! wall-clock time wrap [`Table::dine`] in `tokio::time::timeout`.

pub mod error;
pub mod table;
pub mod tracing;

pub use error::*;
pub use table::*;
pub use self::tracing::*;

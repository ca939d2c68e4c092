//! # Dining Table
//!
//! > **N philosophers, N forks, and a timeline of everything that happened.**
//!
//! This crate simulates the dining-philosophers problem on real OS threads and
//! records a precisely timestamped event timeline of every fork pickup, miss,
//! put-down, meal and bout of starvation.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Never Block on a Fork
//!
//! Philosophers only ever *try* to take a fork ([`Fork::try_acquire`](fork::Fork::try_acquire)).
//! If the second fork is busy, the first one goes straight back on the table and
//! the philosopher thinks before trying again. Combined with one right-handed
//! philosopher at the end of the ring, there is no way to build a cycle of
//! held-and-wanted forks, so every run terminates.
//!
//! ### Ownership Is Exclusion
//!
//! Holding a fork means owning its [`ForkGuard`](fork::ForkGuard). Guards move
//! but never clone, so "two philosophers hold the same fork" is not just
//! prevented at runtime by the mutex, it is unrepresentable in safe code.
//!
//! ### Lock-free Logging
//!
//! Each philosopher writes to its own [`EventSink`](philosopher::EventSink).
//! No sink is ever shared, so recording an event costs a clock read and a `Vec`
//! push. Ordering is imposed once, after the run, by
//! [`Timeline::assemble`](timeline::Timeline::assemble).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Primitives ([`timing`], [`fork`], [`fence`])
//! - **Role**: clock, busy-wait work, exclusive resources and the start barrier.
//! - **Key items**: [`Clock`](timing::Clock), [`BoundedWork`](timing::BoundedWork),
//!   [`Fork`](fork::Fork), [`Fence`](fence::Fence).
//!
//! ### 2. The Record ([`model`])
//! - **Role**: what gets written down.
//! - **Key items**: [`Action`](model::Action), [`Event`](model::Event), [`Hand`](model::Hand).
//!
//! ### 3. The Actor ([`philosopher`])
//! - **Role**: the acquisition protocol as a state machine.
//! - **Key items**: [`Philosopher`](philosopher::Philosopher), [`Seating`](philosopher::Seating).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: builds the ring, runs a thread per philosopher, repeats runs.
//! - **Key items**: [`Table`](lifecycle::Table), [`DinnerError`](lifecycle::DinnerError).
//!
//! ### 5. The Output ([`timeline`])
//! - **Role**: merged, ordered events plus statistics and a text renderer.
//! - **Key items**: [`Timeline`](timeline::Timeline), [`Summary`](timeline::Summary),
//!   [`render`](timeline::render()).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Five philosophers, 300 meals each, two runs
//! RUST_LOG=info cargo run
//!
//! # A tiny table, whole timeline, no colour
//! cargo run -- --philosophers 2 --meals 3 --print-all --color none
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod config;
pub mod fence;
pub mod fork;
pub mod lifecycle;
pub mod model;
pub mod philosopher;
pub mod timeline;
pub mod timing;

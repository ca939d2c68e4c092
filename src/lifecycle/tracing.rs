//! # Observability & Tracing
//!
//! Structured logging for the dinner, built on the `tracing` crate.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber that hides module
//! paths (`with_target(false)`) and takes its filter from `RUST_LOG`.
//!
//! ```bash
//! # Run lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every philosopher sitting down and leaving
//! RUST_LOG=debug cargo run
//!
//! # Every starvation as it happens (very verbose)
//! RUST_LOG=trace cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Runs**: `Run started` / `Run complete` with the run index and event count
//! - **Dinner span**: `dine{seats=5 meals=300}` wraps everything inside one run
//! - **Philosophers**: `Seated` with hand, `Finished` with meals, starvation and event totals
//! - **Starvation**: `Starving` at `trace` level with the running count
//! - **Failures**: panicking philosopher threads at `error` level
//!
//! Tracing is diagnostics only. The timeline itself never goes through it:
//! events are stored in each philosopher's sink and rendered afterwards, so
//! logging cannot perturb the ordering of what is recorded.
//!
//! ```text
//! INFO Run started run=0
//! DEBUG dine: Seated seat=3 hand=Left
//! DEBUG dine: Finished seat=3 meals=300 starved=41 events=3617
//! INFO dine: Dinner finished events=18011
//! INFO Run complete run=0 events=18011
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

//! Pure data structures recorded by philosophers and consumed by the timeline.

pub mod action;
pub mod event;

pub use action::*;
pub use event::*;

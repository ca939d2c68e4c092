//! # Philosophers
//!
//! A [`Philosopher`] is one actor of the dinner: it owns a private
//! [`EventSink`], reaches two forks through its [`Seating`], and runs the
//! acquisition protocol to completion on whatever thread invokes
//! [`Philosopher::run`].
//!
//! ## The Protocol
//!
//! ```text
//! Fencing → Thinking ⇄ Hungry → AcquiringPrimary → AcquiringSecondary
//!         → Dining → Releasing → (next meal) … → Finished
//! ```
//!
//! 1. Wait at the start [`Fence`] until the whole table has arrived.
//! 2. Think once.
//! 3. For each of the `meals` repetitions:
//!    - try the primary fork; on failure give up this attempt;
//!    - holding it, try the secondary fork; on failure put the primary back
//!      and give up this attempt;
//!    - with both forks, dine, then put down left first and right second;
//!    - a given-up attempt records `Starve`, thinks, and retries the same meal;
//!    - after a meal, think.
//! 4. Record `Finish`.
//!
//! No step ever blocks on a fork. A failed attempt always unwinds whatever it
//! holds before thinking again, and the last seat reaches for its right fork
//! first, so no cycle of held-and-wanted forks can form.

pub mod seating;
pub mod sink;

pub use seating::*;
pub use sink::*;

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::DinnerConfig;
use crate::fence::{Fence, FenceError};
use crate::fork::ForkGuard;
use crate::model::{Action, Detail, Hand};
use crate::timing::{BoundedWork, WorkBounds};

/// What a philosopher has to get through during one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub meals: usize,
    pub thinking: WorkBounds,
    pub eating: WorkBounds,
}

impl From<&DinnerConfig> for Menu {
    fn from(config: &DinnerConfig) -> Self {
        Self {
            meals: config.meals,
            thinking: config.thinking,
            eating: config.eating,
        }
    }
}

/// Both forks, sorted by hand regardless of which was picked up first.
struct Held<'a> {
    left: ForkGuard<'a>,
    right: ForkGuard<'a>,
}

impl<'a> Held<'a> {
    fn new(taken_hand: Hand, taken: ForkGuard<'a>, other: ForkGuard<'a>) -> Self {
        match taken_hand {
            Hand::Left => Self { left: taken, right: other },
            Hand::Right => Self { left: other, right: taken },
        }
    }
}

/// One diner. Constructed per run and consumed by [`run`](Self::run).
#[derive(Debug)]
pub struct Philosopher {
    id: usize,
    hand: Hand,
    seating: Seating,
    fence: Arc<Fence>,
    menu: Menu,
    sink: EventSink,
    meals_eaten: u32,
    times_starved: u32,
}

impl Philosopher {
    pub fn new(
        id: usize,
        hand: Hand,
        seating: Seating,
        sink: EventSink,
        fence: Arc<Fence>,
        menu: Menu,
    ) -> Self {
        Self {
            id,
            hand,
            seating,
            fence,
            menu,
            sink,
            meals_eaten: 0,
            times_starved: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// Runs the whole protocol and hands back the filled sink.
    ///
    /// Fails only if the start fence was sized wrong for this table.
    pub fn run(mut self) -> Result<EventSink, FenceError> {
        let seating = self.seating.clone();

        self.fence.arrive_and_wait()?;
        debug!(seat = self.id, hand = ?self.hand, "Seated");

        self.think();
        for _ in 0..self.menu.meals {
            loop {
                match self.take_forks(&seating) {
                    Some(held) => {
                        self.dine();
                        self.release_forks(held);
                        break;
                    }
                    None => {
                        self.starve();
                        self.think();
                    }
                }
            }
            self.think();
        }
        self.sink.record(Action::Finish, Detail::None);

        debug!(
            seat = self.id,
            meals = self.meals_eaten,
            starved = self.times_starved,
            events = self.sink.len(),
            "Finished"
        );
        Ok(self.sink)
    }

    fn think(&mut self) {
        let work = BoundedWork::new(self.menu.thinking);
        self.sink
            .record(Action::Thinking, Detail::Planned(work.duration()));
        let span = work.work();
        self.sink.record(Action::EndThinking, Detail::Worked(span));
    }

    fn dine(&mut self) {
        self.meals_eaten += 1;
        let work = BoundedWork::new(self.menu.eating);
        self.sink.record(
            Action::Dining,
            Detail::Meal {
                count: self.meals_eaten,
                planned: work.duration(),
            },
        );
        let span = work.work();
        self.sink.record(Action::EndDining, Detail::Worked(span));
    }

    fn starve(&mut self) {
        self.times_starved += 1;
        trace!(seat = self.id, starved = self.times_starved, "Starving");
        self.sink.record(
            Action::Starve,
            Detail::Starved {
                count: self.times_starved,
            },
        );
    }

    fn take_forks<'s>(&mut self, seating: &'s Seating) -> Option<Held<'s>> {
        let primary = self.take(seating, self.hand)?;
        self.take_holding(seating, self.hand.other(), primary)
    }

    /// Tries `hand`'s fork with both hands empty.
    fn take<'s>(&mut self, seating: &'s Seating, hand: Hand) -> Option<ForkGuard<'s>> {
        let fork = seating.fork(hand);
        let guard = fork.try_acquire();
        let action = match guard {
            Some(_) => Action::taking(hand),
            None => Action::not_taking(hand),
        };
        self.sink.record(action, Detail::Fork(fork.id()));
        guard
    }

    /// Tries `hand`'s fork while `holding` the other one. A miss puts `holding` back.
    fn take_holding<'s>(
        &mut self,
        seating: &'s Seating,
        hand: Hand,
        holding: ForkGuard<'s>,
    ) -> Option<Held<'s>> {
        let fork = seating.fork(hand);
        match fork.try_acquire() {
            Some(taken) => {
                self.sink
                    .record(Action::taking_holding(hand), Detail::Fork(fork.id()));
                Some(Held::new(hand, taken, holding))
            }
            None => {
                self.sink
                    .record(Action::not_taking_holding(hand), Detail::Fork(fork.id()));
                let put = holding.release();
                self.sink
                    .record(Action::put(hand.other()), Detail::Fork(put));
                None
            }
        }
    }

    /// Puts the left fork down first, then the right, whichever was primary.
    fn release_forks(&mut self, held: Held<'_>) {
        let Held { left, right } = held;
        let put = left.release();
        self.sink
            .record(Action::PutLeftHaveRight, Detail::Fork(put));
        let put = right.release();
        self.sink.record(Action::PutRight, Detail::Fork(put));
    }
}

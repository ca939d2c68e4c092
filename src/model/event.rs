use std::fmt;
use std::time::Duration;

use super::Action;
use crate::fork::ForkId;
use crate::timing::work::micros;
use crate::timing::WorkSpan;

/// Structured payload of an [`Event`].
///
/// Only numbers are stored; text is produced on demand by `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    None,
    /// The fork that was taken, missed or put down.
    Fork(ForkId),
    /// Planned length of the thinking that is about to start.
    Planned(Duration),
    /// Running meal number and planned length of the meal about to start.
    Meal { count: u32, planned: Duration },
    /// Realized timing of work that just finished.
    Worked(WorkSpan),
    /// Running number of failed attempts.
    Starved { count: u32 },
}

/// One immutable record on a philosopher's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub philosopher: usize,
    pub action: Action,
    /// Time since the [`Clock`](crate::timing::Clock) epoch.
    pub timestamp: Duration,
    pub detail: Detail,
}

impl Event {
    pub fn new(philosopher: usize, action: Action, timestamp: Duration, detail: Detail) -> Self {
        Self {
            philosopher,
            action,
            timestamp,
            detail,
        }
    }

    /// The fork this event refers to, if any.
    pub fn fork(&self) -> Option<ForkId> {
        match self.detail {
            Detail::Fork(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Philosopher<{}> ", self.philosopher)?;
        match (self.action, self.detail) {
            (Action::Thinking, Detail::Planned(planned)) => {
                write!(f, "thinking for duration: {} us", planned.as_micros())
            }
            (Action::Dining, Detail::Meal { count, planned }) => write!(
                f,
                "dining(times: {count}) for duration: {} us",
                planned.as_micros()
            ),
            (Action::EndThinking, Detail::Worked(span)) => write!(f, "finish thinking({span})"),
            (Action::EndDining, Detail::Worked(span)) => write!(f, "finish dining({span})"),
            (action, Detail::Fork(fork)) if action.is_take() => write!(f, "take {fork}"),
            (action, Detail::Fork(fork)) if action.is_failed_take() => {
                write!(f, "can't take {fork}")
            }
            (action, Detail::Fork(fork)) if action.is_put() => write!(f, "put {fork}"),
            (Action::Starve, Detail::Starved { count }) => write!(f, "hungry(times: {count})"),
            (Action::Finish, _) => f.write_str("finish"),
            (action, Detail::Worked(span)) => {
                write!(f, "{action:?} ({:.3} us)", micros(span.actual()))
            }
            (action, _) => write!(f, "{action:?}"),
        }
    }
}

//! # Timeline
//!
//! After a run, every philosopher's [`EventSink`] is handed to
//! [`Timeline::assemble`], which concatenates them and performs a *stable* sort
//! keyed by `(timestamp, action)`. Events that land on the same clock tick are
//! therefore ordered by [`Action`] declaration order, and events that tie on
//! both keep the order they were assembled in.
//!
//! The resulting [`Timeline`] is read-only. [`summary`] and [`render`] consume it.

pub mod render;
pub mod summary;

pub use render::*;
pub use summary::*;

use std::time::Duration;

use crate::model::{Action, Event};
use crate::philosopher::EventSink;

/// The merged, time-sorted events of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<Event>,
}

impl Timeline {
    /// Merges per-philosopher sinks into one ordered timeline.
    pub fn assemble(sinks: impl IntoIterator<Item = EventSink>) -> Self {
        let sinks: Vec<EventSink> = sinks.into_iter().collect();
        let mut events = Vec::with_capacity(sinks.iter().map(EventSink::len).sum());
        for sink in sinks {
            events.extend(sink.into_events());
        }
        Self::from_events(events)
    }

    /// Orders an arbitrary batch of events.
    pub fn from_events(mut events: Vec<Event>) -> Self {
        events.sort_by_key(|e| (e.timestamp, e.action));
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// How many events of the given kind were recorded.
    pub fn count(&self, action: Action) -> usize {
        self.events.iter().filter(|e| e.action == action).count()
    }

    /// Time between the first and the last event.
    pub fn duration(&self) -> Duration {
        match (self.events.first(), self.events.last()) {
            (Some(first), Some(last)) => last.timestamp.saturating_sub(first.timestamp),
            _ => Duration::ZERO,
        }
    }

    /// Number of seats, inferred from the highest philosopher id seen.
    pub fn philosophers(&self) -> usize {
        self.events
            .iter()
            .map(|e| e.philosopher + 1)
            .max()
            .unwrap_or(0)
    }

    /// One philosopher's events, in timeline order.
    pub fn for_philosopher(&self, philosopher: usize) -> impl Iterator<Item = &Event> + '_ {
        self.events
            .iter()
            .filter(move |e| e.philosopher == philosopher)
    }

    /// The first `n` events.
    pub fn head(&self, n: usize) -> &[Event] {
        &self.events[..n.min(self.events.len())]
    }

    /// The last `n` events.
    pub fn tail(&self, n: usize) -> &[Event] {
        &self.events[self.events.len().saturating_sub(n)..]
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Detail;

    fn at(philosopher: usize, micros: u64, action: Action) -> Event {
        Event::new(philosopher, action, Duration::from_micros(micros), Detail::None)
    }

    #[test]
    fn sorts_by_time_then_action() {
        let timeline = Timeline::from_events(vec![
            at(0, 30, Action::Finish),
            at(1, 10, Action::Starve),
            at(2, 10, Action::Thinking),
            at(0, 10, Action::Dining),
            at(1, 5, Action::EndDining),
        ]);
        let order: Vec<_> = timeline.iter().map(|e| (e.philosopher, e.action)).collect();
        assert_eq!(
            order,
            [
                (1, Action::EndDining),
                (2, Action::Thinking),
                (0, Action::Dining),
                (1, Action::Starve),
                (0, Action::Finish),
            ]
        );
    }

    #[test]
    fn full_ties_keep_assembly_order() {
        let mut a = EventSink::new(0);
        let mut b = EventSink::new(1);
        a.record(Action::Finish, Detail::None);
        b.record(Action::Finish, Detail::None);
        let (ta, tb) = (a.events()[0].timestamp, b.events()[0].timestamp);

        let timeline = Timeline::assemble([a, b]);
        assert_eq!(timeline.len(), 2);
        if ta == tb {
            assert_eq!(timeline.events()[0].philosopher, 0);
        }
        assert!(timeline.events()[0].timestamp <= timeline.events()[1].timestamp);
    }

    #[test]
    fn helpers() {
        let timeline = Timeline::from_events(vec![
            at(0, 1, Action::Thinking),
            at(3, 2, Action::Thinking),
            at(0, 9, Action::Finish),
        ]);
        assert_eq!(timeline.count(Action::Thinking), 2);
        assert_eq!(timeline.duration(), Duration::from_micros(8));
        assert_eq!(timeline.philosophers(), 4);
        assert_eq!(timeline.for_philosopher(0).count(), 2);
        assert_eq!(timeline.head(2).len(), 2);
        assert_eq!(timeline.tail(1)[0].action, Action::Finish);
        assert_eq!(timeline.tail(10).len(), 3);
        assert_eq!(timeline.head(10).len(), 3);
    }

    #[test]
    fn empty_timeline() {
        let timeline = Timeline::assemble(Vec::new());
        assert!(timeline.is_empty());
        assert_eq!(timeline.duration(), Duration::ZERO);
        assert_eq!(timeline.philosophers(), 0);
    }
}

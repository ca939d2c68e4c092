use crate::model::{Action, Detail, Event};
use crate::timing::Clock;

/// Append-only log owned by exactly one philosopher.
///
/// There is no locking here: the sink moves into the philosopher's thread and
/// comes back out when the philosopher finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSink {
    philosopher: usize,
    events: Vec<Event>,
}

impl EventSink {
    pub fn new(philosopher: usize) -> Self {
        Self {
            philosopher,
            events: Vec::new(),
        }
    }

    pub fn with_capacity(philosopher: usize, capacity: usize) -> Self {
        Self {
            philosopher,
            events: Vec::with_capacity(capacity),
        }
    }

    pub fn philosopher(&self) -> usize {
        self.philosopher
    }

    /// Stamps `action` with the current clock reading and appends it.
    pub fn record(&mut self, action: Action, detail: Detail) {
        let timestamp = Clock::elapsed();
        self.events
            .push(Event::new(self.philosopher, action, timestamp, detail));
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_with_owner_id() {
        let mut sink = EventSink::new(2);
        sink.record(Action::Thinking, Detail::None);
        sink.record(Action::EndThinking, Detail::None);
        sink.record(Action::Finish, Detail::None);

        assert_eq!(sink.len(), 3);
        assert!(sink.events().iter().all(|e| e.philosopher == 2));
        assert!(sink.events().windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        let actions: Vec<_> = sink.into_events().into_iter().map(|e| e.action).collect();
        assert_eq!(actions, [Action::Thinking, Action::EndThinking, Action::Finish]);
    }
}

use std::fmt;

use serde::Serialize;

use super::Timeline;
use crate::model::Action;
use crate::timing::work::micros;

/// Per-philosopher totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatSummary {
    pub philosopher: usize,
    pub meals: usize,
    pub starved: usize,
    pub thoughts: usize,
}

/// Aggregate statistics of one timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub philosophers: usize,
    pub events: usize,
    pub total_time_us: f64,
    pub starvation: usize,
    pub thinking: usize,
    pub dining: usize,
    pub seats: Vec<SeatSummary>,
}

impl Summary {
    pub fn of(timeline: &Timeline) -> Self {
        let philosophers = timeline.philosophers();
        let mut seats: Vec<SeatSummary> = (0..philosophers)
            .map(|philosopher| SeatSummary {
                philosopher,
                meals: 0,
                starved: 0,
                thoughts: 0,
            })
            .collect();

        for event in timeline {
            let seat = &mut seats[event.philosopher];
            match event.action {
                Action::Dining => seat.meals += 1,
                Action::Starve => seat.starved += 1,
                Action::Thinking => seat.thoughts += 1,
                _ => {}
            }
        }

        Self {
            philosophers,
            events: timeline.len(),
            total_time_us: micros(timeline.duration()),
            starvation: seats.iter().map(|s| s.starved).sum(),
            thinking: seats.iter().map(|s| s.thoughts).sum(),
            dining: seats.iter().map(|s| s.meals).sum(),
            seats,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total time of last run : {:.3} us", self.total_time_us)?;
        writeln!(f)?;
        writeln!(f, "total starvation count: {}", self.starvation)?;
        writeln!(f, "total thinking count: {}", self.thinking)?;
        writeln!(f, "total dining count: {}", self.dining)
    }
}

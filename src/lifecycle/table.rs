use std::sync::Arc;

use tracing::{error, info, instrument};

use super::DinnerError;
use crate::config::{ConfigError, DinnerConfig};
use crate::fence::Fence;
use crate::fork::Fork;
use crate::philosopher::{EventSink, Menu, Philosopher, Seating};
use crate::timeline::Timeline;

/// Rough number of events one meal produces when nobody starves.
const EVENTS_PER_MEAL: usize = 10;

/// The dinner table: a fixed ring of forks plus the orchestration that seats
/// philosophers around it.
///
/// `Table` is responsible for:
/// - **Topology**: owning the ring of forks, which outlives every run
/// - **Wiring**: giving each philosopher its seat, hand, sink and the run's fence
/// - **Lifecycle**: running every philosopher on its own thread and joining them
/// - **Assembly**: merging the returned sinks into a [`Timeline`]
///
/// # Example
///
/// ```ignore
/// let config = DinnerConfig::default();
/// let table = Table::new(config.philosophers)?;
///
/// // One run
/// let timeline = table.dine(&config).await?;
///
/// // `config.runs` runs on the same forks
/// let timelines = table.serve(&config).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    forks: Arc<[Fork]>,
}

impl Table {
    /// Lays out `philosophers` forks in a ring.
    pub fn new(philosophers: usize) -> Result<Self, DinnerError> {
        if philosophers < 2 {
            return Err(ConfigError::TooFewPhilosophers(philosophers).into());
        }
        Ok(Self {
            forks: (0..philosophers).map(|_| Fork::new()).collect(),
        })
    }

    pub fn seats(&self) -> usize {
        self.forks.len()
    }

    pub fn forks(&self) -> &[Fork] {
        &self.forks
    }

    pub fn seating(&self, seat: usize) -> Option<Seating> {
        Seating::at(self.forks.clone(), seat)
    }

    /// Runs one dinner to completion and returns its timeline.
    ///
    /// Every philosopher runs on a dedicated blocking thread, so all of them
    /// make progress in parallel regardless of the async runtime's worker count.
    #[instrument(skip_all, fields(seats = self.seats(), meals = config.meals))]
    pub async fn dine(&self, config: &DinnerConfig) -> Result<Timeline, DinnerError> {
        config.validate()?;
        if config.philosophers != self.seats() {
            return Err(DinnerError::SeatMismatch {
                table: self.seats(),
                config: config.philosophers,
            });
        }

        let fence = Arc::new(Fence::new(self.seats())?);
        let menu = Menu::from(config);
        let capacity = (config.meals + 1) * EVENTS_PER_MEAL;

        let handles: Vec<_> = (0..self.seats())
            .filter_map(|seat| self.seating(seat))
            .map(|seating| {
                let seat = seating.seat();
                let hand = seating.primary_hand();
                let philosopher = Philosopher::new(
                    seat,
                    hand,
                    seating,
                    EventSink::with_capacity(seat, capacity),
                    fence.clone(),
                    menu,
                );
                tokio::task::spawn_blocking(move || philosopher.run())
            })
            .collect();

        let mut sinks = Vec::with_capacity(handles.len());
        for (seat, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(sink) => sinks.push(sink?),
                Err(source) => {
                    error!(seat, error = %source, "Philosopher task failed");
                    return Err(DinnerError::PhilosopherPanicked { seat, source });
                }
            }
        }

        let timeline = Timeline::assemble(sinks);
        info!(events = timeline.len(), "Dinner finished");
        Ok(timeline)
    }

    /// Runs `config.runs` dinners back to back on the same forks.
    pub async fn serve(&self, config: &DinnerConfig) -> Result<Vec<Timeline>, DinnerError> {
        let mut timelines = Vec::with_capacity(config.runs);
        for run in 0..config.runs {
            info!(run, "Run started");
            let timeline = self.dine(config).await?;
            info!(run, events = timeline.len(), "Run complete");
            timelines.push(timeline);
        }
        Ok(timelines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Action;
    use crate::timing::WorkBounds;

    fn quick(philosophers: usize, meals: usize) -> DinnerConfig {
        DinnerConfig {
            philosophers,
            meals,
            runs: 1,
            thinking: WorkBounds::new(1, 20),
            eating: WorkBounds::new(1, 20),
        }
    }

    #[test]
    fn rejects_tiny_tables() {
        assert!(matches!(
            Table::new(1),
            Err(DinnerError::Config(ConfigError::TooFewPhilosophers(1)))
        ));
    }

    #[tokio::test]
    async fn rejects_mismatched_config() {
        let table = Table::new(3).unwrap();
        let err = table.dine(&quick(4, 1)).await.unwrap_err();
        assert!(matches!(err, DinnerError::SeatMismatch { table: 3, config: 4 }));
    }

    #[tokio::test]
    async fn rejects_invalid_config() {
        let table = Table::new(3).unwrap();
        let config = DinnerConfig {
            thinking: WorkBounds::new(9, 1),
            ..quick(3, 1)
        };
        assert!(matches!(
            table.dine(&config).await,
            Err(DinnerError::Config(ConfigError::InvertedBounds { .. }))
        ));
    }

    #[tokio::test]
    async fn one_run_finishes_everyone() {
        let table = Table::new(4).unwrap();
        let timeline = table.dine(&quick(4, 5)).await.unwrap();

        assert_eq!(timeline.count(Action::Dining), 20);
        assert_eq!(timeline.count(Action::Finish), 4);
        assert!(table.forks().iter().all(|f| !f.is_held()));
    }

    #[tokio::test]
    async fn serve_repeats_on_the_same_forks() {
        let table = Table::new(3).unwrap();
        let config = DinnerConfig {
            runs: 3,
            ..quick(3, 2)
        };
        let timelines = table.serve(&config).await.unwrap();

        assert_eq!(timelines.len(), 3);
        for timeline in &timelines {
            assert_eq!(timeline.count(Action::Dining), 6);
        }
        for fork in table.forks() {
            assert_eq!(fork.acquisitions(), fork.releases());
        }
    }
}

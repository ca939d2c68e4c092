//! # Run Configuration
//!
//! [`DinnerConfig`] gathers every parameter of a dinner: how many philosophers
//! sit at the table, how many meals each must eat, how many times the whole
//! dinner is repeated, and the thinking/eating duration bounds.
//!
//! The defaults reproduce the classic setup: five philosophers, 300 meals each,
//! two runs, and 50–200 µs for both thinking and eating.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timing::WorkBounds;

/// Parameters of one or more dinner runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DinnerConfig {
    /// Philosophers (and forks) around the table. At least two.
    pub philosophers: usize,
    /// Successful meals each philosopher must eat before finishing.
    pub meals: usize,
    /// How many times the whole dinner is repeated on the same forks.
    pub runs: usize,
    pub thinking: WorkBounds,
    pub eating: WorkBounds,
}

impl Default for DinnerConfig {
    fn default() -> Self {
        Self {
            philosophers: 5,
            meals: 300,
            runs: 2,
            thinking: WorkBounds::default(),
            eating: WorkBounds::default(),
        }
    }
}

/// Errors detected while validating a [`DinnerConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a table needs at least 2 philosophers, got {0}")]
    TooFewPhilosophers(usize),

    #[error("{phase} bounds are inverted: min {min} us > max {max} us")]
    InvertedBounds {
        phase: &'static str,
        min: u64,
        max: u64,
    },
}

impl DinnerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.philosophers < 2 {
            return Err(ConfigError::TooFewPhilosophers(self.philosophers));
        }
        for (phase, bounds) in [("thinking", self.thinking), ("eating", self.eating)] {
            if bounds.is_inverted() {
                return Err(ConfigError::InvertedBounds {
                    phase,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = DinnerConfig::default();
        assert_eq!(config.philosophers, 5);
        assert_eq!(config.meals, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_lonely_philosopher() {
        let config = DinnerConfig {
            philosophers: 1,
            ..DinnerConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooFewPhilosophers(1)));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = DinnerConfig {
            eating: WorkBounds::new(10, 5),
            ..DinnerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedBounds {
                phase: "eating",
                min: 10,
                max: 5
            })
        );
    }
}

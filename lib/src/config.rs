//! Simulation configuration.

use crate::error::Error;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default step interval.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(250);

/// Simulation configuration.
///
/// Owned by the [`Simulation`](crate::Simulation) and read afresh at every
/// scheduling point, so changing the interval while the simulation is
/// playing takes effect at the next step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// The delay between two generations while playing.
    step_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }
}

impl Config {
    /// Creates a configuration with the given step interval.
    ///
    /// # Errors
    ///
    /// [`Error::NonPositiveInterval`] if the interval is zero.
    pub fn new(step_interval: Duration) -> Result<Self, Error> {
        Config::default().with_step_interval(step_interval)
    }

    /// Sets the step interval, rejecting a zero duration.
    pub fn with_step_interval(mut self, step_interval: Duration) -> Result<Self, Error> {
        if step_interval.is_zero() {
            return Err(Error::NonPositiveInterval);
        }
        self.step_interval = step_interval;
        Ok(self)
    }

    /// The delay between two generations while playing.
    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }
}

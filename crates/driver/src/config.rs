use std::time::Duration;

use thiserror::Error;

/// Nominal tick length in seconds (30 ms, about 33 Hz).
pub const DEFAULT_TICK: f64 = 0.030;

/// Configuration for the tick loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    dt: f64,
    tick_interval: Duration,
}

/// Errors that can occur when validating a driver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("time step must be finite, positive and representable as a duration")]
    TimeStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dt: DEFAULT_TICK,
            tick_interval: Duration::from_secs_f64(DEFAULT_TICK),
        }
    }
}

impl Config {
    /// Creates a new config with a validated time step in seconds.
    ///
    /// The same value is used both as the simulated step and as the wall-clock
    /// interval between paced ticks.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and strictly positive.
    pub fn new(dt: f64) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::TimeStep);
        }
        let tick_interval = Duration::try_from_secs_f64(dt).map_err(|_| ConfigError::TimeStep)?;

        Ok(Self { dt, tick_interval })
    }

    /// Returns the simulated time step in seconds.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the wall-clock interval between paced ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

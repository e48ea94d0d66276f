//! Simulation parameters and configuration.
//!
//! This module provides the construction-time parameter structures for the
//! grid engine and the tick controller, along with their validation. All
//! parameters are fixed for the lifetime of one simulation instance.

use crate::base::InvalidConfig;
use serde::{Deserialize, Serialize};

/// Parameters for the initial grid and the life rule's age cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Probability that a cell starts alive
    pub live_probability: f64,
    /// Age at which survival stops increasing a cell's age
    pub max_age: u8,
    /// Optional RNG seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GridConfig {
    /// Create a new grid configuration with an unseeded RNG.
    pub fn new(width: usize, height: usize, live_probability: f64, max_age: u8) -> Self {
        Self {
            width,
            height,
            live_probability,
            max_age,
            seed: None,
        }
    }

    /// Set a fixed RNG seed so the initial grid is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check all parameters, returning the first violation found.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.width == 0 || self.height == 0 {
            return Err(InvalidConfig::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(InvalidConfig::ProbabilityOutOfRange(self.live_probability));
        }
        if self.max_age == 0 {
            return Err(InvalidConfig::ZeroMaxAge);
        }
        Ok(())
    }
}

/// Parameters for the tick cadence: the inter-generation delay and the
/// bounds within which speed commands may move it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay between generations at startup, in milliseconds
    pub initial_delay_ms: u64,
    /// Lower bound the delay saturates at when speeding up
    pub min_delay_ms: u64,
    /// Upper bound the delay saturates at when slowing down
    pub max_delay_ms: u64,
    /// Amount one speed command moves the delay by
    pub delay_step_ms: u64,
}

impl TimingConfig {
    /// Create a new timing configuration.
    pub fn new(
        initial_delay_ms: u64,
        min_delay_ms: u64,
        max_delay_ms: u64,
        delay_step_ms: u64,
    ) -> Self {
        Self {
            initial_delay_ms,
            min_delay_ms,
            max_delay_ms,
            delay_step_ms,
        }
    }

    /// Check all parameters, returning the first violation found.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.min_delay_ms > self.max_delay_ms {
            return Err(InvalidConfig::InvertedDelayBounds {
                min_ms: self.min_delay_ms,
                max_ms: self.max_delay_ms,
            });
        }
        if self.initial_delay_ms < self.min_delay_ms || self.initial_delay_ms > self.max_delay_ms {
            return Err(InvalidConfig::InitialDelayOutOfBounds {
                initial_ms: self.initial_delay_ms,
                min_ms: self.min_delay_ms,
                max_ms: self.max_delay_ms,
            });
        }
        if self.delay_step_ms == 0 {
            return Err(InvalidConfig::ZeroDelayStep);
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 100,
            min_delay_ms: 10,
            max_delay_ms: 1000,
            delay_step_ms: 10,
        }
    }
}

/// Complete construction-time configuration for a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Grid and life-rule parameters
    pub grid: GridConfig,
    /// Tick cadence parameters
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Configuration {
    /// Create a new configuration.
    pub fn new(grid: GridConfig, timing: TimingConfig) -> Self {
        Self { grid, timing }
    }

    /// Validate both parameter groups.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        self.grid.validate()?;
        self.timing.validate()
    }
}

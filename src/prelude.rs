//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use toruslife::prelude::*;
//!
//! let config = GridConfig::new(40, 30, 0.1, 10).with_seed(42);
//! let mut engine = GridEngine::new(&config).unwrap();
//! engine.step();
//! ```

pub use crate::base::{color_factor, Grid, InvalidConfig, Rgb};
pub use crate::simulation::{
    Command, Configuration, GridConfig, GridEngine, SimulationController, TickReport,
    TimingConfig,
};

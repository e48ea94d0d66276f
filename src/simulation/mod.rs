//! Simulation engine and tick scheduling.
//!
//! This module provides the generation-stepping engine and the controller
//! that owns its tick cadence, pause state, and delay management.

pub mod controller;
pub mod engine;
pub mod parameters;

pub use crate::base::InvalidConfig;
pub use controller::{Command, SimulationController, TickReport};
pub use engine::GridEngine;
pub use parameters::{Configuration, GridConfig, TimingConfig};

//! Toruslife: Conway's Game of Life on a toroidal grid with aging cells.
//!
//! This library provides a deterministic life-rule engine over a wrap-around
//! grid where live cells carry an age, plus a controller that schedules
//! generation updates, handles pause and speed commands, and pushes per-tick
//! reports to an injected observer. Rendering is deliberately left to
//! consumers; the bundled `toruslife` binary is one such consumer.

pub mod base;
pub mod prelude;
pub mod simulation;

// Re-export commonly used types for convenient external access.
//
// These form the public, stable surface most consumers will use when
// embedding the engine or wiring up their own renderer.
pub use base::{color_factor, Grid, InvalidConfig, Rgb};
pub use simulation::{Configuration, GridConfig, GridEngine, SimulationController, TimingConfig};

//! Core data types: the age grid, colors, and configuration errors.

pub mod color;
pub mod errors;
pub mod grid;

pub use color::{color_factor, Rgb};
pub use errors::InvalidConfig;
pub use grid::Grid;

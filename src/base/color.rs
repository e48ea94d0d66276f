//! Age-to-intensity color mapping.
//!
//! Cell age modulates how strongly the base cell color is rendered: newborn
//! cells appear dim and cells at the age cap appear fully saturated. The
//! mapping is display-only and has no effect on the life rule.

use serde::{Deserialize, Serialize};

/// Fraction of the base color always present, even for newborn cells.
const INTENSITY_FLOOR: f64 = 0.3;

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale this color by the intensity for a cell of the given age.
    ///
    /// Channels are mapped as `channel * (0.3 + 0.7 * factor)`, so a newborn
    /// cell keeps 30% of the base color and a cell at `max_age` keeps all of
    /// it.
    pub fn shaded(self, age: u8, max_age: u8) -> Rgb {
        let scale = INTENSITY_FLOOR + (1.0 - INTENSITY_FLOOR) * color_factor(age, max_age);
        Rgb {
            r: (f64::from(self.r) * scale).round() as u8,
            g: (f64::from(self.g) * scale).round() as u8,
            b: (f64::from(self.b) * scale).round() as u8,
        }
    }
}

/// Intensity factor for a cell age: `min(age, max_age) / max_age`.
///
/// Returns 0.0 for dead cells and 1.0 at the age cap, increasing
/// monotonically in between. `max_age` is expected to be at least 1, which
/// configuration validation guarantees.
pub fn color_factor(age: u8, max_age: u8) -> f64 {
    f64::from(age.min(max_age)) / f64::from(max_age)
}

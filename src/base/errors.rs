use std::error;
use std::fmt;

/// Error returned when a simulation is constructed from invalid parameters.
///
/// This is the only fallible point in the crate: once an engine or
/// controller has been built, every operation on it is total. Each variant
/// carries the offending values so callers can surface a useful message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidConfig {
    /// Grid width or height was zero.
    ZeroDimension { width: usize, height: usize },

    /// Live-cell probability was outside `[0, 1]` (or NaN).
    ProbabilityOutOfRange(f64),

    /// Maximum cell age was zero; live cells need at least age 1.
    ZeroMaxAge,

    /// Minimum delay exceeded maximum delay.
    InvertedDelayBounds { min_ms: u64, max_ms: u64 },

    /// Initial delay fell outside the configured delay bounds.
    InitialDelayOutOfBounds {
        initial_ms: u64,
        min_ms: u64,
        max_ms: u64,
    },

    /// Delay adjustment step was zero, so speed commands would be no-ops.
    ZeroDelayStep,
}

impl fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "Grid dimensions must be non-zero (got {width}x{height})")
            }
            Self::ProbabilityOutOfRange(p) => {
                write!(f, "Live-cell probability {p} must be between 0.0 and 1.0")
            }
            Self::ZeroMaxAge => write!(f, "Maximum cell age must be at least 1"),
            Self::InvertedDelayBounds { min_ms, max_ms } => {
                write!(f, "Minimum delay {min_ms}ms exceeds maximum delay {max_ms}ms")
            }
            Self::InitialDelayOutOfBounds {
                initial_ms,
                min_ms,
                max_ms,
            } => {
                write!(
                    f,
                    "Initial delay {initial_ms}ms outside bounds [{min_ms}ms, {max_ms}ms]"
                )
            }
            Self::ZeroDelayStep => write!(f, "Delay step must be at least 1ms"),
        }
    }
}

impl error::Error for InvalidConfig {}

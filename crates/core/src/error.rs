//! Construction-time error type
//!
//! The engine has no I/O and no runtime failure modes. The only recoverable
//! errors are rejected configurations, reported when an engine is built.

use std::fmt;

/// Reasons a [`ForestFireConfig`](crate::ForestFireConfig) or seed pattern is rejected
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid side length was zero
    ZeroSide,
    /// `side * side` does not fit in `usize`
    GridTooLarge {
        /// Requested side length
        side: usize,
    },
    /// A probability parameter was NaN or outside `[0, 1]`
    ProbabilityOutOfRange {
        /// Parameter name (e.g. `"growth"`, `"ignition"`)
        name: &'static str,
        /// Offending value
        value: f32,
    },
    /// The growth/ignition ratio `q` was not a positive finite number
    InvalidRatio {
        /// Offending ratio
        q: f32,
    },
    /// A seed pattern did not hold exactly `side * side` cells
    PatternSizeMismatch {
        /// Cells required by the grid
        expected: usize,
        /// Cells supplied
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSide => write!(f, "Grid side length must be at least 1"),
            ConfigError::GridTooLarge { side } => {
                write!(f, "Grid side length {side} overflows the cell count")
            }
            ConfigError::ProbabilityOutOfRange { name, value } => {
                write!(f, "Probability '{name}' must be within [0, 1], got {value}")
            }
            ConfigError::InvalidRatio { q } => {
                write!(f, "Ignition ratio q must be positive and finite, got {q}")
            }
            ConfigError::PatternSizeMismatch { expected, actual } => {
                write!(f, "Seed pattern holds {actual} cells, grid needs {expected}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConfigError::ZeroSide.to_string(),
            "Grid side length must be at least 1"
        );
        assert_eq!(
            ConfigError::ProbabilityOutOfRange {
                name: "growth",
                value: 1.5
            }
            .to_string(),
            "Probability 'growth' must be within [0, 1], got 1.5"
        );
        assert_eq!(
            ConfigError::PatternSizeMismatch {
                expected: 9,
                actual: 4
            }
            .to_string(),
            "Seed pattern holds 4 cells, grid needs 9"
        );
    }
}

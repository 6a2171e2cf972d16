//! Validated probability type for the automaton parameters
//!
//! Growth and ignition chances are compared against uniform draws in `[0, 1)`.
//! Wrapping them in [`Probability`] keeps out-of-range or NaN values from ever
//! reaching the transition rule.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// A probability in the range [0, 1]
///
/// Deserialization goes through [`TryFrom<f32>`], so a config file holding
/// `1.5` is rejected instead of silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
#[repr(transparent)]
pub struct Probability(f32);

impl Eq for Probability {}

impl PartialOrd for Probability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Probability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Probability {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Probability {
    /// Never happens
    pub const NEVER: Probability = Probability(0.0);

    /// Always happens (every draw in `[0, 1)` is below it)
    pub const ALWAYS: Probability = Probability(1.0);

    /// Create a new probability. Asserts value is within [0, 1].
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(
            value >= 0.0 && value <= 1.0,
            "Probability::new: value not in [0, 1]"
        );
        Probability(value)
    }

    /// Fallible constructor used by config validation
    ///
    /// `name` identifies the parameter in the returned error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ProbabilityOutOfRange`] if `value` is NaN or
    /// outside `[0, 1]`.
    pub fn try_new(name: &'static str, value: f32) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Probability(value))
        } else {
            Err(ConfigError::ProbabilityOutOfRange { name, value })
        }
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// True when a uniform draw in `[0, 1)` falls below this probability
    #[inline]
    #[must_use]
    pub fn admits(self, draw: f32) -> bool {
        draw < self.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl TryFrom<f32> for Probability {
    type Error = ConfigError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Probability::try_new("probability", value)
    }
}

impl From<Probability> for f32 {
    fn from(p: Probability) -> f32 {
        p.0
    }
}

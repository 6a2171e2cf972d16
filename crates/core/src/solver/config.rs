//! Engine configuration
//!
//! All parameters are fixed at construction. There is no config file; callers
//! build a [`ForestFireConfig`] directly or deserialize one with serde.

use super::rules::FireRates;
use crate::core_types::Probability;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default grid side length in cells
pub const DEFAULT_SIDE: usize = 512;

/// Default chance `p` that an empty cell grows a tree in one tick
pub const DEFAULT_GROWTH: f32 = 0.006;

/// Default ratio `q = p / f` between growth and spontaneous ignition
pub const DEFAULT_RATIO: f32 = 57.0;

/// How a tick traverses the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    /// One random stream, cells visited in row-major order
    #[default]
    Sequential,
    /// Rows processed by rayon, each with its own random stream seeded from
    /// the engine generator
    Parallel,
}

/// Construction-time parameters of a [`ForestFire`](crate::ForestFire)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestFireConfig {
    /// Grid side length (the grid is `side × side`)
    pub side: usize,
    /// Chance `p` that an empty cell grows a tree
    pub growth: Probability,
    /// Chance `f` that a tree ignites without a burning neighbour
    pub ignition: Probability,
    /// Generator seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Traversal strategy for [`ForestFire::tick`](crate::ForestFire::tick)
    pub schedule: Schedule,
}

impl Default for ForestFireConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            growth: Probability::new(DEFAULT_GROWTH),
            ignition: Probability::new(DEFAULT_GROWTH / DEFAULT_RATIO),
            seed: None,
            schedule: Schedule::Sequential,
        }
    }
}

impl ForestFireConfig {
    /// Config with `f` derived from `p` and the ratio `q = p / f`
    ///
    /// # Errors
    ///
    /// Propagates [`FireRates::from_ratio`] failures.
    pub fn from_ratio(side: usize, p: f32, q: f32) -> Result<Self, ConfigError> {
        let rates = FireRates::from_ratio(p, q)?;
        Ok(Self {
            side,
            growth: rates.growth,
            ignition: rates.ignition,
            ..Self::default()
        })
    }

    /// Set the generator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the traversal strategy
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Growth and ignition probabilities as used by the transition rule
    #[must_use]
    pub fn rates(&self) -> FireRates {
        FireRates::new(self.growth, self.ignition)
    }

    /// Check the grid dimensions
    ///
    /// Probabilities are valid by construction of [`Probability`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSide`] or [`ConfigError::GridTooLarge`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side == 0 {
            return Err(ConfigError::ZeroSide);
        }
        if self.side.checked_mul(self.side).is_none() {
            return Err(ConfigError::GridTooLarge { side: self.side });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ForestFireConfig::default();
        assert_eq!(config.side, 512);
        assert_eq!(config.growth.value(), 0.006);
        assert!((config.ignition.value() - 0.006 / 57.0).abs() < 1e-9);
        assert_eq!(config.schedule, Schedule::Sequential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_side() {
        let zero = ForestFireConfig {
            side: 0,
            ..ForestFireConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroSide));

        let huge = ForestFireConfig {
            side: usize::MAX,
            ..ForestFireConfig::default()
        };
        assert_eq!(
            huge.validate(),
            Err(ConfigError::GridTooLarge { side: usize::MAX })
        );
    }

    #[test]
    fn test_from_ratio_config() {
        let config = ForestFireConfig::from_ratio(64, 0.01, 100.0)
            .unwrap()
            .with_seed(3)
            .with_schedule(Schedule::Parallel);
        assert_eq!(config.side, 64);
        assert!((config.rates().ignition.value() - 0.0001).abs() < 1e-9);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.schedule, Schedule::Parallel);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ForestFireConfig =
            serde_json::from_str(r#"{"side": 32, "schedule": "parallel", "seed": 9}"#).unwrap();
        assert_eq!(config.side, 32);
        assert_eq!(config.schedule, Schedule::Parallel);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.growth, ForestFireConfig::default().growth);
    }

    #[test]
    fn test_deserialize_rejects_bad_probability() {
        let result = serde_json::from_str::<ForestFireConfig>(r#"{"growth": -0.5}"#);
        assert!(result.is_err());
    }
}

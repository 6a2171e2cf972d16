//! Forest-fire transition rule
//!
//! Clauses are evaluated in priority order and the first match wins:
//!
//! 1. A burning tree becomes empty ground
//! 2. A tree with a burning neighbour catches fire
//! 3. A tree ignites spontaneously when the draw is below `f`
//! 4. Empty ground grows a tree when the draw is below `p`
//! 5. Otherwise the cell keeps its state
//!
//! The draw is taken by the caller before dispatch, so every cell consumes
//! exactly one value from its random stream per tick whichever clause fires.

use crate::core_types::{CellState, Probability};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Growth and ignition probabilities applied every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireRates {
    /// Chance `p` that an empty cell grows a tree
    pub growth: Probability,
    /// Chance `f` that a tree ignites without a burning neighbour
    pub ignition: Probability,
}

impl FireRates {
    #[must_use]
    pub const fn new(growth: Probability, ignition: Probability) -> Self {
        Self { growth, ignition }
    }

    /// Build rates from `p` and the ratio `q = p / f`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRatio`] unless `q` is positive and
    /// finite, and [`ConfigError::ProbabilityOutOfRange`] if `p` is invalid.
    pub fn from_ratio(p: f32, q: f32) -> Result<Self, ConfigError> {
        if !(q.is_finite() && q > 0.0) {
            return Err(ConfigError::InvalidRatio { q });
        }
        let growth = Probability::try_new("growth", p)?;
        let ignition = Probability::try_new("ignition", p / q)?;
        Ok(Self { growth, ignition })
    }

    /// No growth, no spontaneous ignition
    pub const FROZEN: FireRates = FireRates::new(Probability::NEVER, Probability::NEVER);
}

/// Compute the next state of one cell
///
/// `draw` must come from a uniform `[0, 1)` source. `neighbors_on_fire` is
/// only called for tree cells.
#[inline]
pub fn next_state(
    cell: CellState,
    draw: f32,
    rates: FireRates,
    neighbors_on_fire: impl FnOnce() -> bool,
) -> CellState {
    match cell {
        CellState::Burning => CellState::Empty,
        CellState::Tree => {
            if neighbors_on_fire() || rates.ignition.admits(draw) {
                CellState::Burning
            } else {
                CellState::Tree
            }
        }
        CellState::Empty => {
            if rates.growth.admits(draw) {
                CellState::Tree
            } else {
                CellState::Empty
            }
        }
    }
}

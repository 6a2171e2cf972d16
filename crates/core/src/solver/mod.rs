//! Transition rule, engine configuration and tick scheduling
//!
//! The rule itself is a pure function of a cell's state, one uniform draw and
//! a lazily evaluated neighbour test. Everything that decides *which* random
//! stream feeds a cell lives in [`stepper`].
//!
//! # Example
//!
//! ```rust
//! use forest_fire_core::solver::{next_state, FireRates};
//! use forest_fire_core::CellState;
//!
//! let rates = FireRates::from_ratio(0.006, 57.0).unwrap();
//! // Fire spreads to a tree regardless of the draw
//! assert_eq!(next_state(CellState::Tree, 0.99, rates, || true), CellState::Burning);
//! ```

#[allow(clippy::module_name_repetitions)]
mod config;
pub mod profiler;
mod rules;
pub mod stepper;

// Re-exports
pub use config::{ForestFireConfig, Schedule, DEFAULT_GROWTH, DEFAULT_RATIO, DEFAULT_SIDE};
pub use profiler::{ProfilerScope, TickTimer};
pub use rules::{next_state, FireRates};

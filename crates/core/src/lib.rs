//! Forest Fire Automaton Core Library
//!
//! A stochastic forest-fire cellular automaton on a square toroidal grid.
//! Every cell is empty ground, a living tree, or a burning tree, and all
//! cells advance together once per tick:
//!
//! - A burning tree burns out and leaves empty ground
//! - A tree next to a burning tree catches fire
//! - A tree ignites spontaneously with probability `f`
//! - Empty ground grows a new tree with probability `p`
//!
//! ## Engine
//!
//! [`ForestFire`] owns two grid buffers. Each tick reads only the committed
//! buffer and writes the scratch buffer, then swaps them, so readers never
//! observe a half-updated grid.
//!
//! ```
//! use forest_fire_core::{CellState, ForestFire, ForestFireConfig, Probability};
//!
//! let config = ForestFireConfig {
//!     side: 64,
//!     seed: Some(7),
//!     ..ForestFireConfig::default()
//! };
//! let mut sim = ForestFire::new(config).unwrap();
//! sim.populate(Probability::new(0.6));
//! sim.set_cell(32, 32, CellState::Burning);
//! sim.tick();
//! assert_eq!(sim.query(32, 32), CellState::Empty);
//! ```

// Core types and utilities
pub mod core_types;

pub mod error;
pub mod grid;
pub mod simulation;
pub mod solver;

// Re-export core types
pub use core_types::{CellState, Probability};
pub use error::ConfigError;
pub use grid::CellGrid;
pub use simulation::{ForestFire, SimulationStats};
pub use solver::{FireRates, ForestFireConfig, Schedule};

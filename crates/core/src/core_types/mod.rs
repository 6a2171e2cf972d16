//! Core types and utilities

#[allow(clippy::module_name_repetitions)]
pub mod cell;
pub mod units;

pub use cell::CellState;
pub use units::Probability;

//! Grid storage and toroidal neighbourhood lookups

#[allow(clippy::module_name_repetitions)]
pub mod cell_grid;
pub mod neighborhood;

// Re-export main types
pub use cell_grid::CellGrid;
pub use neighborhood::{neighbors_on_fire, wrap, MOORE_OFFSETS};

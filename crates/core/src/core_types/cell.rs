//! Per-cell state of the forest-fire automaton

use serde::{Deserialize, Serialize};

/// State of a single grid cell
///
/// Cells carry no other attributes: no age, fuel load or identity. Only the
/// position of a cell and its state matter to the transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Bare ground that may grow a tree
    #[default]
    Empty,
    /// A living tree that may ignite
    Tree,
    /// A tree that burns out during the next tick
    Burning,
}

impl CellState {
    /// All states in declaration order
    pub const ALL: [CellState; 3] = [CellState::Empty, CellState::Tree, CellState::Burning];

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_tree(self) -> bool {
        matches!(self, CellState::Tree)
    }

    #[inline]
    #[must_use]
    pub const fn is_burning(self) -> bool {
        matches!(self, CellState::Burning)
    }
}

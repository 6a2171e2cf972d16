//! Square cell buffer
//!
//! Stores [`CellState`]s as a flat `Vec` in row-major order. The engine keeps
//! two of these (committed and scratch) and exchanges them after every tick.

use crate::core_types::CellState;
use crate::error::ConfigError;

/// Fixed-size square grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    /// Cell values in row-major order (y * side + x)
    cells: Vec<CellState>,
    /// Side length in cells
    side: usize,
}

impl CellGrid {
    /// Create a grid of `side × side` cells, all set to `state`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSide`] for `side == 0` and
    /// [`ConfigError::GridTooLarge`] when the cell count overflows `usize`.
    pub fn filled(side: usize, state: CellState) -> Result<Self, ConfigError> {
        let count = Self::cell_count_for(side)?;
        Ok(Self {
            cells: vec![state; count],
            side,
        })
    }

    /// Create an all-`Empty` grid
    ///
    /// # Errors
    ///
    /// Same conditions as [`CellGrid::filled`].
    pub fn new(side: usize) -> Result<Self, ConfigError> {
        Self::filled(side, CellState::Empty)
    }

    /// Wrap a caller-supplied row-major pattern
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PatternSizeMismatch`] unless `cells` holds
    /// exactly `side * side` entries, plus the [`CellGrid::filled`] conditions.
    pub fn from_cells(side: usize, cells: Vec<CellState>) -> Result<Self, ConfigError> {
        let expected = Self::cell_count_for(side)?;
        if cells.len() != expected {
            return Err(ConfigError::PatternSizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { cells, side })
    }

    fn cell_count_for(side: usize) -> Result<usize, ConfigError> {
        if side == 0 {
            return Err(ConfigError::ZeroSide);
        }
        side.checked_mul(side)
            .ok_or(ConfigError::GridTooLarge { side })
    }

    /// Side length in cells
    #[inline]
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells (`side²`)
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.side && y < self.side,
            "Coordinates out of bounds"
        );
        y * self.side + x
    }

    /// Get the state at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    /// Set the state at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    /// Fill entire grid with a state
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Number of cells currently in `state`
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Get reference to cell data
    #[must_use]
    pub fn as_slice(&self) -> &[CellState] {
        &self.cells
    }

    /// Get mutable reference to cell data
    pub fn as_mut_slice(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Iterate rows from `y = 0` upwards
    pub fn rows(&self) -> std::slice::ChunksExact<'_, CellState> {
        self.cells.chunks_exact(self.side)
    }
}

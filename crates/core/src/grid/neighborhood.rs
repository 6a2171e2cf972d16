//! Toroidal Moore neighbourhood
//!
//! The grid wraps on both axes: the row above `y = 0` is `y = side - 1` and
//! the column right of `x = side - 1` is `x = 0`. Each coordinate of a
//! neighbour is wrapped independently before the lookup, so the four corner
//! cells are mutually adjacent.

use super::CellGrid;

/// Offsets of the 8 cells surrounding a center cell (3×3 block minus center)
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Wrap a coordinate that is at most one step outside `[0, len - 1]`
///
/// `z < 0` maps to `len - 1` and `z >= len` maps to `0`. In-range values pass
/// through unchanged.
#[inline]
#[must_use]
pub fn wrap(z: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap on an empty axis");
    if z < 0 {
        len - 1
    } else if z as usize >= len {
        0
    } else {
        z as usize
    }
}

/// True if any of the 8 wrapped neighbours of `(x, y)` is burning
///
/// # Panics
///
/// Panics if `(x, y)` lies outside the grid
#[must_use]
pub fn neighbors_on_fire(grid: &CellGrid, x: usize, y: usize) -> bool {
    let side = grid.side();
    assert!(x < side && y < side, "Coordinates out of bounds");
    let cells = grid.as_slice();

    MOORE_OFFSETS.iter().any(|&(dx, dy)| {
        let nx = wrap(x as isize + dx, side);
        let ny = wrap(y as isize + dy, side);
        cells[ny * side + nx].is_burning()
    })
}

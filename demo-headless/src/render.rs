//! Terminal frame renderer
//!
//! Maps cell states to coloured glyphs: empty ground is blank, trees are
//! green, fire is red. Large grids are downsampled by blocks; a block shows
//! its most active cell so small fires stay visible.

use forest_fire_core::{CellGrid, CellState};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Display priority within a downsampled block
fn rank(state: CellState) -> u8 {
    match state {
        CellState::Empty => 0,
        CellState::Tree => 1,
        CellState::Burning => 2,
    }
}

/// Glyph for a single cell, with ANSI colour when `color` is set
pub fn glyph(state: CellState, color: bool) -> String {
    match (state, color) {
        (CellState::Empty, _) => " ".to_string(),
        (CellState::Tree, false) => "^".to_string(),
        (CellState::Burning, false) => "*".to_string(),
        (CellState::Tree, true) => format!("{GREEN}^{RESET}"),
        (CellState::Burning, true) => format!("{RED}*{RESET}"),
    }
}

/// Render the grid into at most `columns` characters per line
pub fn render_frame(grid: &CellGrid, columns: usize, color: bool) -> String {
    let side = grid.side();
    let block = side.div_ceil(columns.max(1));
    let mut out = String::new();

    for by in (0..side).step_by(block) {
        for bx in (0..side).step_by(block) {
            let mut shown = CellState::Empty;
            for y in by..(by + block).min(side) {
                for x in bx..(bx + block).min(side) {
                    let state = grid.get(x, y);
                    if rank(state) > rank(shown) {
                        shown = state;
                    }
                }
            }
            out.push_str(&glyph(shown, color));
        }
        out.push('\n');
    }
    out
}

//! Grid traversal for one tick
//!
//! Every function here reads only `current` and writes only `next`, so the
//! outcome of a cell never depends on the order in which cells are visited.
//! What differs between the sequential and parallel paths is which random
//! stream each cell draws from:
//!
//! - Sequential: the caller's generator, one draw per cell in row-major order
//! - Parallel: one `u64` per row is drawn from the caller's generator (in row
//!   order) and seeds an independent [`StdRng`] for that row
//!
//! Both are deterministic for a fixed seed; the parallel result does not
//! depend on the rayon thread count.

use super::rules::{next_state, FireRates};
use crate::core_types::CellState;
use crate::grid::{neighbors_on_fire, CellGrid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Next state of `(x, y)`, consuming exactly one draw from `rng`
#[inline]
pub fn step_cell<R: Rng>(
    current: &CellGrid,
    x: usize,
    y: usize,
    rng: &mut R,
    rates: FireRates,
) -> CellState {
    let draw: f32 = rng.random();
    next_state(current.get(x, y), draw, rates, || {
        neighbors_on_fire(current, x, y)
    })
}

/// Fill one row of the scratch buffer
fn step_row<R: Rng>(
    current: &CellGrid,
    y: usize,
    row: &mut [CellState],
    rng: &mut R,
    rates: FireRates,
) {
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = step_cell(current, x, y, rng, rates);
    }
}

/// Compute every cell of `next` from `current` on the calling thread
///
/// # Panics
///
/// Panics if the two grids differ in size
pub fn step_sequential<R: Rng>(
    current: &CellGrid,
    next: &mut CellGrid,
    rng: &mut R,
    rates: FireRates,
) {
    assert_eq!(current.side(), next.side(), "Grid size mismatch");
    let side = current.side();

    for (y, row) in next.as_mut_slice().chunks_exact_mut(side).enumerate() {
        step_row(current, y, row, rng, rates);
    }
}

/// Compute every cell of `next` from `current` with rayon, one stream per row
///
/// `row_seeds` is scratch space of exactly `side` entries, reused across ticks.
///
/// # Panics
///
/// Panics if the grids differ in size or `row_seeds` has the wrong length
pub fn step_parallel<R: Rng>(
    current: &CellGrid,
    next: &mut CellGrid,
    row_seeds: &mut [u64],
    rng: &mut R,
    rates: FireRates,
) {
    assert_eq!(current.side(), next.side(), "Grid size mismatch");
    let side = current.side();
    assert_eq!(row_seeds.len(), side, "One seed per row required");

    for seed in row_seeds.iter_mut() {
        *seed = rng.random();
    }

    next.as_mut_slice()
        .par_chunks_exact_mut(side)
        .zip(row_seeds.par_iter())
        .enumerate()
        .for_each(|(y, (row, &seed))| {
            let mut row_rng = StdRng::seed_from_u64(seed);
            step_row(current, y, row, &mut row_rng, rates);
        });
}

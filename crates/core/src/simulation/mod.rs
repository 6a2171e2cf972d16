//! Forest-fire automaton engine
//!
//! `ForestFire` owns two [`CellGrid`] buffers and a random generator:
//! - `current` is the committed grid, the only one readers ever see
//! - `next` is scratch, fully rewritten during a tick
//!
//! A tick computes every cell of `next` from `current` and then swaps the two
//! buffers. Reads go through `&self` and ticks through `&mut self`, so a
//! renderer can never observe a half-committed grid.

mod stats;

pub use stats::SimulationStats;

use crate::core_types::{CellState, Probability};
use crate::error::ConfigError;
use crate::grid::{self, CellGrid};
use crate::solver::{stepper, FireRates, ForestFireConfig, ProfilerScope, Schedule, TickTimer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Double-buffered forest-fire cellular automaton on a square torus
pub struct ForestFire<R = StdRng> {
    /// Committed state, readable between ticks
    current: CellGrid,
    /// Scratch buffer for the tick in progress
    next: CellGrid,

    rates: FireRates,
    schedule: Schedule,

    /// Owned random source, seeded once at construction
    rng: R,
    /// Per-row seeds for the parallel schedule (allocated once)
    row_seeds: Vec<u64>,

    /// Cells of `next` stepped since the last commit (allocated once)
    staged: Vec<bool>,
    /// Number of `true` entries in `staged`
    staged_count: usize,
    generation: u64,
    timer: TickTimer,
}

impl ForestFire<StdRng> {
    /// Create an all-empty automaton
    ///
    /// The generator is seeded from `config.seed`, or from OS entropy when no
    /// seed is given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: ForestFireConfig) -> Result<Self, ConfigError> {
        let rng = seeded_rng(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create an automaton whose committed grid starts as `cells`
    ///
    /// `cells` is row-major (`y * side + x`) and must hold `side²` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PatternSizeMismatch`] for a wrongly sized
    /// pattern, or any other [`ConfigError`] from validation.
    pub fn from_pattern(
        config: ForestFireConfig,
        cells: Vec<CellState>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let current = CellGrid::from_cells(config.side, cells)?;
        let rng = seeded_rng(config.seed);
        Ok(Self::build(&config, current, rng))
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

impl<R: Rng> ForestFire<R> {
    /// Create an all-empty automaton drawing from an injected generator
    ///
    /// `config.seed` is ignored; the generator is used as given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn with_rng(config: ForestFireConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let current = CellGrid::new(config.side)?;
        Ok(Self::build(&config, current, rng))
    }

    fn build(config: &ForestFireConfig, current: CellGrid, rng: R) -> Self {
        let side = current.side();
        let next = current.clone();

        info!(
            "Forest fire automaton initialized: {}x{} grid, p={}, f={}, schedule={:?}",
            side, side, config.growth, config.ignition, config.schedule
        );

        Self {
            current,
            next,
            rates: config.rates(),
            schedule: config.schedule,
            rng,
            row_seeds: vec![0; side],
            staged: vec![false; side * side],
            staged_count: 0,
            generation: 0,
            timer: TickTimer::new(),
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.current.side()
    }

    /// Grid height in cells (equal to the width)
    #[inline]
    pub fn height(&self) -> usize {
        self.current.side()
    }

    /// Committed state of `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[inline]
    pub fn query(&self, x: usize, y: usize) -> CellState {
        self.current.get(x, y)
    }

    /// True if any wrapped Moore neighbour of `(x, y)` is burning in the
    /// committed grid
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn neighbors_on_fire(&self, x: usize, y: usize) -> bool {
        grid::neighbors_on_fire(&self.current, x, y)
    }

    /// Compute the next state of one cell into the scratch buffer
    ///
    /// Consumes exactly one draw from the engine generator. Low-level
    /// building block of [`ForestFire::tick`]: every cell must be stepped
    /// before [`ForestFire::commit_tick`]. Stepping a cell again overwrites
    /// its staged state.
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn step_cell(&mut self, x: usize, y: usize) {
        let state = stepper::step_cell(&self.current, x, y, &mut self.rng, self.rates);
        self.next.set(x, y, state);
        let index = y * self.current.side() + x;
        if !std::mem::replace(&mut self.staged[index], true) {
            self.staged_count += 1;
        }
    }

    /// Make the scratch buffer the committed grid
    ///
    /// The buffers are exchanged, not copied. Debug builds assert that every
    /// cell was stepped since the previous commit. In release builds a cell
    /// that was never stepped keeps its committed state.
    pub fn commit_tick(&mut self) {
        let cell_count = self.current.cell_count();
        debug_assert_eq!(
            self.staged_count, cell_count,
            "commit_tick called before every cell was stepped"
        );
        if self.staged_count < cell_count {
            let committed = self.current.as_slice();
            for ((cell, &staged), &old) in self
                .next
                .as_mut_slice()
                .iter_mut()
                .zip(&self.staged)
                .zip(committed)
            {
                if !staged {
                    *cell = old;
                }
            }
        }
        self.clear_staged();
        self.swap_buffers();
    }

    fn clear_staged(&mut self) {
        if self.staged_count > 0 {
            self.staged.fill(false);
            self.staged_count = 0;
        }
    }

    fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Advance the automaton by exactly one generation
    pub fn tick(&mut self) {
        let scope = ProfilerScope::new("tick");

        match self.schedule {
            Schedule::Sequential => stepper::step_sequential(
                &self.current,
                &mut self.next,
                &mut self.rng,
                self.rates,
            ),
            Schedule::Parallel => stepper::step_parallel(
                &self.current,
                &mut self.next,
                &mut self.row_seeds,
                &mut self.rng,
                self.rates,
            ),
        }
        // Every cell was rewritten, so any partial staging is void
        self.clear_staged();
        self.swap_buffers();

        let elapsed_ms = scope.elapsed_ms();
        self.timer.record(elapsed_ms);
        debug!(generation = self.generation, elapsed_ms, "tick committed");
    }

    /// Advance by `ticks` generations
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Overwrite one committed cell (seeding between ticks)
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) {
        self.assert_between_ticks();
        self.current.set(x, y, state);
    }

    /// Overwrite every committed cell
    pub fn fill(&mut self, state: CellState) {
        self.assert_between_ticks();
        self.current.fill(state);
    }

    /// Plant trees on empty committed cells with probability `density`
    ///
    /// Consumes one draw per cell, empty or not, from the engine generator.
    pub fn populate(&mut self, density: Probability) {
        self.assert_between_ticks();
        let mut planted = 0_usize;
        for cell in self.current.as_mut_slice() {
            let draw: f32 = self.rng.random();
            if cell.is_empty() && density.admits(draw) {
                *cell = CellState::Tree;
                planted += 1;
            }
        }
        debug!("Populated grid: {} trees planted at density {}", planted, density);
    }

    fn assert_between_ticks(&self) {
        debug_assert_eq!(self.staged_count, 0, "committed grid modified mid-tick");
    }

    /// Committed grid
    pub fn grid(&self) -> &CellGrid {
        &self.current
    }

    /// Committed cells in row-major order
    pub fn cells(&self) -> &[CellState] {
        self.current.as_slice()
    }

    /// Committed rows from `y = 0` upwards
    pub fn rows(&self) -> std::slice::ChunksExact<'_, CellState> {
        self.current.rows()
    }

    /// Number of committed ticks
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Growth and ignition probabilities in effect
    pub fn rates(&self) -> FireRates {
        self.rates
    }

    /// Traversal strategy used by [`ForestFire::tick`]
    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Wall-clock duration of the most recent [`ForestFire::tick`]
    pub fn last_tick_ms(&self) -> f64 {
        self.timer.last_ms()
    }

    /// Mean wall-clock duration over every [`ForestFire::tick`]
    pub fn mean_tick_ms(&self) -> f64 {
        self.timer.mean_ms()
    }

    /// Count committed cells by state
    pub fn stats(&self) -> SimulationStats {
        let mut stats = SimulationStats {
            generation: self.generation,
            ..SimulationStats::default()
        };
        for &cell in self.current.as_slice() {
            match cell {
                CellState::Empty => stats.empty += 1,
                CellState::Tree => stats.trees += 1,
                CellState::Burning => stats.burning += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen(side: usize) -> ForestFireConfig {
        ForestFireConfig {
            side,
            growth: Probability::NEVER,
            ignition: Probability::NEVER,
            seed: Some(1),
            schedule: Schedule::Sequential,
        }
    }

    #[test]
    fn test_new_is_all_empty() {
        let sim = ForestFire::new(frozen(8)).unwrap();
        assert_eq!(sim.width(), 8);
        assert_eq!(sim.height(), 8);
        assert_eq!(sim.generation(), 0);
        assert!(sim.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_new_rejects_zero_side() {
        assert!(matches!(
            ForestFire::new(frozen(0)),
            Err(ConfigError::ZeroSide)
        ));
    }

    #[test]
    fn test_from_pattern() {
        let mut cells = vec![CellState::Tree; 9];
        cells[4] = CellState::Burning;
        let sim = ForestFire::from_pattern(frozen(3), cells).unwrap();
        assert_eq!(sim.query(1, 1), CellState::Burning);
        assert_eq!(sim.query(0, 2), CellState::Tree);

        assert!(matches!(
            ForestFire::from_pattern(frozen(3), vec![CellState::Tree; 4]),
            Err(ConfigError::PatternSizeMismatch {
                expected: 9,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_step_and_commit_match_tick() {
        let mut manual = ForestFire::new(frozen(5)).unwrap();
        let mut ticked = ForestFire::new(frozen(5)).unwrap();
        for sim in [&mut manual, &mut ticked] {
            sim.fill(CellState::Tree);
            sim.set_cell(0, 0, CellState::Burning);
        }

        for y in 0..5 {
            for x in 0..5 {
                manual.step_cell(x, y);
            }
        }
        // Nothing visible before the commit
        assert_eq!(manual.query(0, 0), CellState::Burning);
        assert_eq!(manual.query(1, 1), CellState::Tree);
        manual.commit_tick();

        ticked.tick();
        assert_eq!(manual.cells(), ticked.cells());
        assert_eq!(manual.generation(), 1);
    }

    #[test]
    fn test_stats_counts() {
        let mut sim = ForestFire::new(frozen(4)).unwrap();
        sim.set_cell(0, 0, CellState::Tree);
        sim.set_cell(1, 0, CellState::Tree);
        sim.set_cell(2, 0, CellState::Burning);
        let stats = sim.stats();
        assert_eq!(stats.empty, 13);
        assert_eq!(stats.trees, 2);
        assert_eq!(stats.burning, 1);
        assert_eq!(stats.total_cells(), 16);
    }

    #[test]
    fn test_populate_only_plants_on_empty() {
        let mut sim = ForestFire::new(frozen(6)).unwrap();
        sim.set_cell(2, 2, CellState::Burning);
        sim.populate(Probability::ALWAYS);
        let stats = sim.stats();
        assert_eq!(stats.trees, 35);
        assert_eq!(stats.burning, 1);
    }

    #[test]
    fn test_tick_records_timing() {
        let mut sim = ForestFire::new(frozen(16)).unwrap();
        sim.run(3);
        assert_eq!(sim.generation(), 3);
        assert!(sim.last_tick_ms() >= 0.0);
        assert!(sim.mean_tick_ms() >= 0.0);
    }

    #[test]
    #[should_panic(expected = "Coordinates out of bounds")]
    fn test_query_out_of_bounds() {
        let sim = ForestFire::new(frozen(4)).unwrap();
        let _ = sim.query(0, 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "commit_tick called before every cell was stepped")]
    fn test_partial_commit_is_rejected() {
        let mut sim = ForestFire::new(frozen(4)).unwrap();
        sim.step_cell(0, 0);
        sim.commit_tick();
    }

    /// 3x3 frozen grid after one tick burned out (2, 2), leaving the scratch
    /// buffer holding `Burning` there. Every cell except (2, 2) is then
    /// stepped, with (0, 0) stepped twice.
    fn staged_with_repeat_and_gap() -> ForestFire {
        let mut sim = ForestFire::new(frozen(3)).unwrap();
        sim.set_cell(2, 2, CellState::Burning);
        sim.tick();
        assert_eq!(sim.query(2, 2), CellState::Empty);

        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (2, 2) {
                    sim.step_cell(x, y);
                }
            }
        }
        sim.step_cell(0, 0);
        sim
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "commit_tick called before every cell was stepped")]
    fn test_repeated_step_does_not_cover_skipped_cell() {
        let mut sim = staged_with_repeat_and_gap();
        sim.commit_tick();
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_skipped_cell_keeps_committed_state() {
        let mut sim = staged_with_repeat_and_gap();
        sim.commit_tick();
        assert_eq!(sim.query(2, 2), CellState::Empty);
        assert!(sim.cells().iter().all(|c| c.is_empty()));
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_tick_discards_partial_staging() {
        let mut sim = ForestFire::new(frozen(3)).unwrap();
        sim.set_cell(1, 1, CellState::Burning);
        sim.step_cell(0, 0);
        sim.step_cell(1, 1);
        sim.tick();
        assert_eq!(sim.generation(), 1);
        assert!(sim.cells().iter().all(|c| c.is_empty()));

        // Staging is cleared, so seeding is allowed again
        sim.set_cell(2, 2, CellState::Tree);
        sim.tick();
        assert_eq!(sim.query(2, 2), CellState::Tree);
    }
}

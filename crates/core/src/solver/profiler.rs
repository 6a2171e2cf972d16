//! Tick timing helpers.
//!
//! Provides an RAII profiling scope and a running tick-duration summary.

use std::time::Instant;
use tracing::trace;

/// A profiling scope that measures elapsed time using RAII.
///
/// The elapsed time is emitted as a `trace` event when the scope is dropped.
pub struct ProfilerScope {
    start: Instant,
    name: &'static str,
}

impl ProfilerScope {
    /// Creates a new profiling scope.
    pub fn new(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    /// Gets elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ProfilerScope {
    fn drop(&mut self) {
        trace!(scope = self.name, elapsed_ms = self.elapsed_ms(), "scope finished");
    }
}

/// Last and mean duration of recorded ticks.
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    last_ms: f64,
    total_ms: f64,
    samples: u64,
}

impl TickTimer {
    /// Creates an empty timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one tick duration in milliseconds.
    pub fn record(&mut self, time_ms: f64) {
        self.last_ms = time_ms;
        self.total_ms += time_ms;
        self.samples += 1;
    }

    /// Duration of the most recent tick, 0 before the first.
    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }

    /// Mean duration over every recorded tick, 0 before the first.
    pub fn mean_ms(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.total_ms / self.samples as f64
        }
    }

    /// Number of recorded ticks.
    pub fn samples(&self) -> u64 {
        self.samples
    }
}

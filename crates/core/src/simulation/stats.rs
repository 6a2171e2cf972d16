//! Population counts for reporting

use serde::{Deserialize, Serialize};

/// Snapshot of the committed grid
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Committed ticks so far
    pub generation: u64,
    pub empty: usize,
    pub trees: usize,
    pub burning: usize,
}

impl SimulationStats {
    /// All cells in the grid
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.empty + self.trees + self.burning
    }

    /// Fraction of cells holding a living tree
    #[must_use]
    pub fn tree_density(&self) -> f32 {
        let total = self.total_cells();
        if total == 0 {
            0.0
        } else {
            self.trees as f32 / total as f32
        }
    }

    /// Fraction of cells currently on fire
    #[must_use]
    pub fn burning_fraction(&self) -> f32 {
        let total = self.total_cells();
        if total == 0 {
            0.0
        } else {
            self.burning as f32 / total as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractions() {
        let stats = SimulationStats {
            generation: 3,
            empty: 50,
            trees: 40,
            burning: 10,
        };
        assert_eq!(stats.total_cells(), 100);
        assert_eq!(stats.tree_density(), 0.4);
        assert_eq!(stats.burning_fraction(), 0.1);
    }

    #[test]
    fn test_empty_stats_do_not_divide_by_zero() {
        let stats = SimulationStats::default();
        assert_eq!(stats.tree_density(), 0.0);
        assert_eq!(stats.burning_fraction(), 0.0);
    }
}

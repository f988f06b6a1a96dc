//! Configuration for ELL assembly

use crate::error::EllError;
use crate::reordering::{create_index_planner, IndexPlanner};

/// Strategy used by the alternative index planners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterMethod {
    /// Stable sort of the row's indices by chunk label
    Sort,
    /// Explicit first-seen grouping of indices by chunk label
    Grouping,
}

/// Configuration for building an ELL matrix
#[derive(Debug, Clone)]
pub struct EllConfig {
    /// Number of rows, one per worker thread of the downstream consumer
    pub num_threads: usize,

    /// Index planner handed out by [`EllConfig::index_planner`]; not used
    /// by ELL assembly
    pub cluster_method: ClusterMethod,
}

impl Default for EllConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(), // One row per available core
            cluster_method: ClusterMethod::Sort,
        }
    }
}

impl EllConfig {
    /// Create a config with an explicit row count
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads,
            cluster_method: ClusterMethod::Sort,
        }
    }

    /// The index planner selected by `cluster_method`
    ///
    /// [`create_ell`](crate::create_ell) never consults the planner; it is
    /// for consumers that accumulate contiguous clusters themselves.
    pub fn index_planner(&self) -> Box<dyn IndexPlanner> {
        create_index_planner(self.cluster_method)
    }

    /// Row width `C` for `n` inputs split across `num_threads` rows
    ///
    /// # Errors
    ///
    /// Fails when `num_threads` is zero or does not divide `n`.
    pub fn rows_for(&self, n: usize) -> Result<usize, EllError> {
        row_width(n, self.num_threads)
    }
}

/// Width of each row when `n` entries are split into `num_threads` rows
pub fn row_width(n: usize, num_threads: usize) -> Result<usize, EllError> {
    if num_threads == 0 {
        return Err(EllError::ZeroThreads);
    }
    if n % num_threads != 0 {
        return Err(EllError::IndivisibleLength {
            len: n,
            num_threads,
        });
    }
    Ok(n / num_threads)
}

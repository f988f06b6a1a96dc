//! Index reordering strategies for clustered accumulation
//!
//! Instead of chaining merges in place, these planners permute a row's
//! global point indices so that every chunk label occupies one contiguous
//! run, and report where each run starts. A batch or SIMD accumulator can
//! then sum each run independently.
//!
//! Two interchangeable strategies are provided:
//! - Sort-based ([`prep_for_sort_method`]): stable sort by label
//! - Grouping-based ([`prep_for_cluster_method`]): explicit first-seen groups
//!
//! Neither is used by [`crate::create_ell`]. Both treat every label,
//! including 0, as a cluster key.

pub mod grouping;
pub mod sort;

use crate::group::{sum_points, GroupElement};
use crate::matrix::config::ClusterMethod;
use crate::ChunkLabel;

/// A permutation of a row's global point indices grouped by label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterLayout {
    /// Global point indices, with equal labels contiguous
    pub new_point_indices: Vec<usize>,

    /// Offset into `new_point_indices` where each cluster begins
    pub cluster_start_indices: Vec<usize>,
}

impl ClusterLayout {
    /// Number of clusters, i.e. distinct labels in the row
    pub fn num_clusters(&self) -> usize {
        self.cluster_start_indices.len()
    }

    /// Iterate over the global indices of each cluster
    pub fn clusters(&self) -> impl Iterator<Item = &[usize]> + '_ {
        let total = self.new_point_indices.len();
        let ends = self
            .cluster_start_indices
            .iter()
            .skip(1)
            .copied()
            .chain(std::iter::once(total));

        self.cluster_start_indices
            .iter()
            .copied()
            .zip(ends)
            .map(move |(start, end)| &self.new_point_indices[start..end])
    }

    /// Sum the points of each cluster
    ///
    /// `points` is the global point array the indices refer to.
    pub fn cluster_sums<P: GroupElement>(&self, points: &[P]) -> Vec<P> {
        self.clusters()
            .map(|cluster| sum_points(cluster.iter().map(|&idx| points[idx].clone())))
            .collect()
    }
}

/// Strategy that arranges one row's indices into label clusters
pub trait IndexPlanner {
    /// Plan the layout of row `thread_idx`, whose labels are `labels`
    ///
    /// Output indices are global: row-local position `j` becomes
    /// `thread_idx * labels.len() + j`.
    fn plan(&self, labels: &[ChunkLabel], thread_idx: usize) -> ClusterLayout;
}

/// Create the index planner for a clustering method
///
/// # Returns
///
/// A boxed planner trait object for the given method.
pub fn create_index_planner(method: ClusterMethod) -> Box<dyn IndexPlanner> {
    match method {
        ClusterMethod::Sort => Box::new(sort::SortPlanner),
        ClusterMethod::Grouping => Box::new(grouping::GroupingPlanner),
    }
}

// Re-export key functions for convenient access
pub use grouping::{prep_for_cluster_method, GroupingPlanner};
pub use sort::{prep_for_sort_method, SortPlanner};

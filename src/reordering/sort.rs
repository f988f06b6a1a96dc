//! Sort-based index planner

use crate::reordering::{ClusterLayout, IndexPlanner};
use crate::utils::run_starts;
use crate::ChunkLabel;

/// Planner that stably sorts a row's indices by label
#[derive(Debug, Clone, Copy, Default)]
pub struct SortPlanner;

impl IndexPlanner for SortPlanner {
    fn plan(&self, labels: &[ChunkLabel], thread_idx: usize) -> ClusterLayout {
        prep_for_sort_method(labels, thread_idx)
    }
}

/// Arrange a row's global indices in ascending label order
///
/// The sort is stable, so indices with equal labels keep their row order.
/// A cluster starts wherever the label changes between consecutive sorted
/// entries.
///
/// # Examples
///
/// ```
/// use chunk_ell::prep_for_sort_method;
///
/// let layout = prep_for_sort_method(&[3, 1, 3, 2], 1);
/// assert_eq!(layout.new_point_indices, vec![5, 7, 4, 6]);
/// assert_eq!(layout.cluster_start_indices, vec![0, 1, 2]);
/// ```
#[tracing::instrument(skip_all, fields(width = labels.len(), thread_idx = thread_idx))]
pub fn prep_for_sort_method(labels: &[ChunkLabel], thread_idx: usize) -> ClusterLayout {
    let base = thread_idx * labels.len();

    let mut pt_and_labels: Vec<(usize, ChunkLabel)> = labels
        .iter()
        .enumerate()
        .map(|(j, &label)| (base + j, label))
        .collect();

    pt_and_labels.sort_by_key(|&(_, label)| label);

    let cluster_start_indices = run_starts(pt_and_labels.iter().map(|&(_, label)| label));
    let new_point_indices = pt_and_labels.into_iter().map(|(idx, _)| idx).collect();

    ClusterLayout {
        new_point_indices,
        cluster_start_indices,
    }
}

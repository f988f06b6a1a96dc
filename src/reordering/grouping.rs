//! Grouping-based index planner
//!
//! Groups are collected per label in first-seen order. When the groups are
//! laid out, a singleton is appended at the back, while each member of a
//! larger group is pushed to the front one at a time. Multi-member groups
//! therefore come first, in reverse order, and within each of them the
//! members are reversed. Either way equal labels stay contiguous.

use std::collections::{HashMap, VecDeque};

use crate::reordering::{ClusterLayout, IndexPlanner};
use crate::utils::run_starts;
use crate::ChunkLabel;

/// Planner that groups a row's indices by label explicitly
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupingPlanner;

impl IndexPlanner for GroupingPlanner {
    fn plan(&self, labels: &[ChunkLabel], thread_idx: usize) -> ClusterLayout {
        prep_for_cluster_method(labels, thread_idx)
    }
}

/// Arrange a row's global indices into explicit label groups
///
/// Cluster boundaries are found by looking up each arranged index's label
/// and comparing it to its predecessor's.
///
/// # Examples
///
/// ```
/// use chunk_ell::prep_for_cluster_method;
///
/// // Label 1 is a singleton and goes to the back; label 2's members are
/// // pushed to the front one by one.
/// let layout = prep_for_cluster_method(&[1, 2, 2], 0);
/// assert_eq!(layout.new_point_indices, vec![2, 1, 0]);
/// assert_eq!(layout.cluster_start_indices, vec![0, 2]);
/// ```
#[tracing::instrument(skip_all, fields(width = labels.len(), thread_idx = thread_idx))]
pub fn prep_for_cluster_method(labels: &[ChunkLabel], thread_idx: usize) -> ClusterLayout {
    let base = thread_idx * labels.len();

    let mut slot_of: HashMap<ChunkLabel, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (j, &label) in labels.iter().enumerate() {
        let slot = *slot_of.entry(label).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(base + j);
    }

    let mut arranged: VecDeque<usize> = VecDeque::with_capacity(labels.len());
    for group in &groups {
        if let [single] = group.as_slice() {
            arranged.push_back(*single);
        } else {
            for &idx in group {
                arranged.push_front(idx);
            }
        }
    }

    let new_point_indices: Vec<usize> = arranged.into_iter().collect();
    let cluster_start_indices = run_starts(new_point_indices.iter().map(|&idx| labels[idx - base]));

    ClusterLayout {
        new_point_indices,
        cluster_start_indices,
    }
}

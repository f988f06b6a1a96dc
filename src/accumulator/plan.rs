//! Merge planning for a single row
//!
//! The planner decides, for every position of a row, which later position
//! (if any) absorbs its point. Positions sharing a nonzero chunk label form a
//! forward chain that ends at the label's last occurrence, so a single
//! left-to-right pass of the accumulator leaves each cluster's sum there.

use std::collections::HashMap;

use crate::utils::exclusive_scan;
use crate::ChunkLabel;

/// Positions of every nonzero label in a row, grouped by label
///
/// Labels are kept in first-seen order. The positions of all labels share
/// one arena laid out like a CSR row: label slot `s` owns
/// `positions[offsets[s]..offsets[s + 1]]`, in ascending position order.
#[derive(Debug, Clone)]
pub struct OccurrenceIndex {
    slot_of: HashMap<ChunkLabel, usize>,
    labels: Vec<ChunkLabel>,
    offsets: Vec<usize>,
    positions: Vec<usize>,
}

impl OccurrenceIndex {
    /// Index the nonzero labels of a row
    ///
    /// Two passes: the first assigns slots and counts occurrences, the second
    /// scatters positions into the arena at the scanned offsets.
    pub fn build(labels: &[ChunkLabel]) -> Self {
        let mut slot_of: HashMap<ChunkLabel, usize> = HashMap::new();
        let mut order: Vec<ChunkLabel> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();

        for &label in labels {
            if label == 0 {
                continue;
            }
            let slot = *slot_of.entry(label).or_insert_with(|| {
                order.push(label);
                counts.push(0);
                order.len() - 1
            });
            counts[slot] += 1;
        }

        let offsets = exclusive_scan(&counts);
        let mut fill = offsets[..order.len()].to_vec();
        let mut positions = vec![0; offsets[order.len()]];

        for (pos, &label) in labels.iter().enumerate() {
            if label == 0 {
                continue;
            }
            let slot = slot_of[&label];
            positions[fill[slot]] = pos;
            fill[slot] += 1;
        }

        Self {
            slot_of,
            labels: order,
            offsets,
            positions,
        }
    }

    /// Number of distinct nonzero labels
    pub fn num_labels(&self) -> usize {
        self.labels.len()
    }

    /// Distinct nonzero labels in first-seen order
    pub fn labels(&self) -> &[ChunkLabel] {
        &self.labels
    }

    /// Slot of a label, `None` for zero or absent labels
    pub fn slot(&self, label: ChunkLabel) -> Option<usize> {
        self.slot_of.get(&label).copied()
    }

    /// Ascending positions of the label in `slot`
    pub fn positions_at(&self, slot: usize) -> &[usize] {
        &self.positions[self.offsets[slot]..self.offsets[slot + 1]]
    }

    /// Ascending positions carrying `label`; empty for zero or absent labels
    pub fn positions(&self, label: ChunkLabel) -> &[usize] {
        match self.slot(label) {
            Some(slot) => self.positions_at(slot),
            None => &[],
        }
    }
}

/// Forward-merge plan for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    add_to: Vec<Option<usize>>,
    reduced_labels: Vec<ChunkLabel>,
}

impl MergePlan {
    /// Row width
    pub fn len(&self) -> usize {
        self.add_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.add_to.is_empty()
    }

    /// For each position, the row-local position that absorbs it
    pub fn targets(&self) -> &[Option<usize>] {
        &self.add_to
    }

    /// Label still emitted at each position; `0` once merged away
    pub fn reduced_labels(&self) -> &[ChunkLabel] {
        &self.reduced_labels
    }

    /// Number of group additions the plan performs
    pub fn num_merges(&self) -> usize {
        self.add_to.iter().filter(|t| t.is_some()).count()
    }

    pub fn into_parts(self) -> (Vec<Option<usize>>, Vec<ChunkLabel>) {
        (self.add_to, self.reduced_labels)
    }
}

/// Compute the forward-merge plan for one row of chunk labels
///
/// Every position carrying a nonzero label that is not the label's last
/// occurrence points at the label's next occurrence and has its label
/// cleared. Zero labels and last occurrences are left untouched.
///
/// # Examples
///
/// ```
/// use chunk_ell::gen_add_to;
///
/// let plan = gen_add_to(&[1, 1, 2, 3]);
/// assert_eq!(plan.targets(), &[Some(1), None, None, None]);
/// assert_eq!(plan.reduced_labels(), &[0, 1, 2, 3]);
/// ```
pub fn gen_add_to(labels: &[ChunkLabel]) -> MergePlan {
    let index = OccurrenceIndex::build(labels);

    // Per-label position in its occurrence list
    let mut cursor = vec![0usize; index.num_labels()];

    let mut add_to = vec![None; labels.len()];
    let mut reduced_labels = labels.to_vec();

    for (pos, &label) in labels.iter().enumerate() {
        let Some(slot) = index.slot(label) else {
            continue;
        };
        let occurrences = index.positions_at(slot);
        let t = cursor[slot];
        debug_assert_eq!(occurrences[t], pos);

        if t + 1 == occurrences.len() {
            continue;
        }

        add_to[pos] = Some(occurrences[t + 1]);
        reduced_labels[pos] = 0;
        cursor[slot] = t + 1;
    }

    assert_eq!(add_to.len(), labels.len(), "plan must cover every position");
    assert_eq!(
        reduced_labels.len(),
        labels.len(),
        "reduced labels must cover every position"
    );

    MergePlan {
        add_to,
        reduced_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_index() {
        let index = OccurrenceIndex::build(&[3, 0, 1, 3, 0, 1, 3]);

        assert_eq!(index.num_labels(), 2);
        assert_eq!(index.labels(), &[3, 1]);
        assert_eq!(index.positions(3), &[0, 3, 6]);
        assert_eq!(index.positions(1), &[2, 5]);
        assert!(index.positions(0).is_empty());
        assert!(index.positions(9).is_empty());
        assert_eq!(index.slot(0), None);
    }

    #[test]
    fn test_plan_basic() {
        let plan = gen_add_to(&[1, 1, 2, 3]);
        assert_eq!(plan.targets(), &[Some(1), None, None, None]);
        assert_eq!(plan.reduced_labels(), &[0, 1, 2, 3]);
        assert_eq!(plan.num_merges(), 1);
    }

    #[test]
    fn test_plan_chains_forward() {
        let plan = gen_add_to(&[5, 2, 5, 2, 5]);
        assert_eq!(plan.targets(), &[Some(2), Some(3), Some(4), None, None]);
        assert_eq!(plan.reduced_labels(), &[0, 0, 0, 2, 5]);
    }

    #[test]
    fn test_position_zero_is_a_real_target() {
        // Position 0 can only be a source, but it must never be confused
        // with "no target"
        let plan = gen_add_to(&[4, 4]);
        assert_eq!(plan.targets(), &[Some(1), None]);
    }

    #[test]
    fn test_zero_labels_are_ignored() {
        let plan = gen_add_to(&[0, 1, 1, 0]);
        assert_eq!(plan.targets(), &[None, Some(2), None, None]);
        assert_eq!(plan.reduced_labels(), &[0, 0, 1, 0]);

        let plan = gen_add_to(&[0, 0, 0]);
        assert!(plan.targets().iter().all(Option::is_none));
        assert_eq!(plan.reduced_labels(), &[0, 0, 0]);
        assert_eq!(plan.num_merges(), 0);
    }

    #[test]
    fn test_empty_row() {
        let plan = gen_add_to(&[]);
        assert!(plan.is_empty());
        assert!(plan.reduced_labels().is_empty());
    }
}

//! Per-row pre-aggregation of points sharing a chunk label
//!
//! Two steps, both operating on a single row:
//!
//! 1. [`gen_add_to`] builds a forward-merge plan from the row's labels.
//! 2. [`merge_points`] walks the plan once and folds every cluster into the
//!    position of its last occurrence.

pub mod merge;
pub mod plan;

pub use merge::merge_points;
pub use plan::{gen_add_to, MergePlan, OccurrenceIndex};

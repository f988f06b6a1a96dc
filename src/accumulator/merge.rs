//! Applying a merge plan to a row of points

use crate::group::GroupElement;

/// Accumulate the points of a row along a forward-merge plan
///
/// Positions are visited in ascending order. A position with a target adds
/// its current value into the target and is reset to `zero`. Targets always
/// lie strictly ahead, so by the time a position is absorbed it already
/// holds everything merged into it, and the last occurrence of each cluster
/// ends up with the full cluster sum.
///
/// The input slice is left untouched; a merged copy is returned.
///
/// # Panics
///
/// Panics if `points` and `add_to` differ in length.
///
/// # Examples
///
/// ```
/// use chunk_ell::{gen_add_to, merge_points};
///
/// let plan = gen_add_to(&[1, 1, 2, 3]);
/// let merged = merge_points(&[10i64, 20, 30, 40], plan.targets(), &0);
/// assert_eq!(merged, vec![0, 30, 30, 40]);
/// ```
pub fn merge_points<P: GroupElement>(points: &[P], add_to: &[Option<usize>], zero: &P) -> Vec<P> {
    assert_eq!(
        points.len(),
        add_to.len(),
        "points.len() must equal add_to.len()"
    );

    let mut merged = points.to_vec();

    for (i, target) in add_to.iter().enumerate() {
        let Some(target) = *target else {
            continue;
        };
        debug_assert!(target > i, "merge targets must point forward");

        let current = std::mem::replace(&mut merged[i], zero.clone());
        let acc = std::mem::replace(&mut merged[target], zero.clone());
        merged[target] = acc + current;

        tracing::trace!(source = i, target, "merged point");
    }

    merged
}

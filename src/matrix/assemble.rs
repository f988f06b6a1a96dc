//! # Row partitioning and ELL assembly
//!
//! The global point and label arrays are cut into `T` contiguous rows of
//! width `C = N / T`. Each row is planned, accumulated and compacted on its
//! own; no row reads anything outside its slice. Row-local position `j` of
//! row `r` corresponds to global position `r * C + j`.

use crate::accumulator::{gen_add_to, merge_points};
use crate::error::EllError;
use crate::group::GroupElement;
use crate::matrix::config::{row_width, EllConfig};
use crate::matrix::ell::{EllSparseMatrix, SparseRow};
use crate::ChunkLabel;

/// Pre-aggregate one row and keep its surviving entries
///
/// Points sharing a nonzero label are summed into the label's last
/// occurrence; zero-label positions and absorbed positions are dropped.
/// Survivors keep ascending position order.
///
/// # Panics
///
/// Panics if `points` and `labels` differ in length.
pub fn create_ell_row<P: GroupElement>(
    points: &[P],
    labels: &[ChunkLabel],
    zero: &P,
) -> SparseRow<P> {
    assert_eq!(
        points.len(),
        labels.len(),
        "points.len() must equal labels.len()"
    );

    let plan = gen_add_to(labels);
    let merged = merge_points(points, plan.targets(), zero);
    assert_eq!(merged.len(), labels.len());

    let survivors = plan.reduced_labels().iter().filter(|&&l| l != 0).count();
    let mut row = SparseRow::with_capacity(survivors);

    for (point, &label) in merged.into_iter().zip(plan.reduced_labels()) {
        if label != 0 {
            row.push(point, label);
        }
    }

    tracing::debug!(
        width = labels.len(),
        nnz = row.len(),
        merges = plan.num_merges(),
        "assembled row"
    );

    row
}

/// Build the ELL matrix, reporting malformed input as an error
///
/// # Errors
///
/// - [`EllError::LengthMismatch`] if points and labels are not paired
/// - [`EllError::ZeroThreads`] if `num_threads` is zero
/// - [`EllError::IndivisibleLength`] if `num_threads` does not divide the input length
#[tracing::instrument(skip_all, fields(n = points.len(), num_threads = num_threads))]
pub fn try_create_ell<P: GroupElement>(
    points: &[P],
    labels: &[ChunkLabel],
    num_threads: usize,
) -> Result<EllSparseMatrix<P>, EllError> {
    if points.len() != labels.len() {
        return Err(EllError::LengthMismatch {
            points: points.len(),
            labels: labels.len(),
        });
    }
    let num_cols = row_width(labels.len(), num_threads)?;

    let zero = P::zero();
    let rows: Vec<SparseRow<P>> = (0..num_threads)
        .map(|r| {
            let start = r * num_cols;
            let end = start + num_cols;
            create_ell_row(&points[start..end], &labels[start..end], &zero)
        })
        .collect();

    let matrix = EllSparseMatrix::from_rows(rows);
    assert_eq!(matrix.n_rows(), num_threads);
    debug_assert!(matrix.nnz() <= labels.len());

    tracing::debug!(nnz = matrix.nnz(), max_row_length = matrix.max_row_length(), "built ELL matrix");

    Ok(matrix)
}

/// Build the ELL matrix of pre-aggregated points
///
/// # Panics
///
/// Fails fast with a descriptive message on malformed input; see
/// [`try_create_ell`] for the conditions.
///
/// # Examples
///
/// ```
/// use chunk_ell::create_ell;
///
/// let points = vec![1i64, 2, 4, 8];
/// let matrix = create_ell(&points, &[1, 1, 2, 3], 1);
///
/// assert_eq!(matrix.data[0], vec![3, 4, 8]);
/// assert_eq!(matrix.col_idx[0], vec![1, 2, 3]);
/// assert_eq!(matrix.row_length, vec![3]);
/// ```
pub fn create_ell<P: GroupElement>(
    points: &[P],
    labels: &[ChunkLabel],
    num_threads: usize,
) -> EllSparseMatrix<P> {
    match try_create_ell(points, labels, num_threads) {
        Ok(matrix) => matrix,
        Err(err) => panic!("{}", err),
    }
}

/// [`create_ell`] with the row count taken from a config
///
/// Only `num_threads` matters here; `cluster_method` selects the planner
/// returned by [`EllConfig::index_planner`].
pub fn create_ell_with_config<P: GroupElement>(
    points: &[P],
    labels: &[ChunkLabel],
    config: &EllConfig,
) -> EllSparseMatrix<P> {
    create_ell(points, labels, config.num_threads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::config::ClusterMethod;

    #[test]
    fn test_single_row() {
        let matrix = create_ell(&[1i64, 2, 4, 8], &[1, 1, 2, 3], 1);

        assert_eq!(matrix.n_rows(), 1);
        assert_eq!(matrix.data[0], vec![3, 4, 8]);
        assert_eq!(matrix.col_idx[0], vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_labels_dropped() {
        let matrix = create_ell(&[1i64, 2, 4, 8], &[0, 1, 1, 0], 1);

        assert_eq!(matrix.data[0], vec![6]);
        assert_eq!(matrix.col_idx[0], vec![1]);
        assert_eq!(matrix.row_length, vec![1]);
    }

    #[test]
    fn test_rows_do_not_mix() {
        // Label 1 appears in both rows but is merged only within each row
        let matrix = create_ell(&[1i64, 2, 4, 8], &[1, 1, 1, 1], 2);

        assert_eq!(matrix.data, vec![vec![3], vec![12]]);
        assert_eq!(matrix.col_idx, vec![vec![1], vec![1]]);
    }

    #[test]
    fn test_empty_input() {
        let matrix = create_ell::<i64>(&[], &[], 3);
        assert_eq!(matrix.n_rows(), 3);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_try_create_ell_errors() {
        assert_eq!(
            try_create_ell(&[1i64, 2, 3], &[1, 2, 3], 2).unwrap_err(),
            EllError::IndivisibleLength { len: 3, num_threads: 2 }
        );
        assert_eq!(
            try_create_ell(&[1i64, 2], &[1, 2, 3], 1).unwrap_err(),
            EllError::LengthMismatch { points: 2, labels: 3 }
        );
        assert_eq!(
            try_create_ell(&[1i64], &[1], 0).unwrap_err(),
            EllError::ZeroThreads
        );
    }

    #[test]
    #[should_panic(expected = "not divisible")]
    fn test_create_ell_fails_fast() {
        create_ell(&[1i64, 2, 3], &[1, 2, 3], 2);
    }

    #[test]
    fn test_with_config() {
        let config = EllConfig {
            num_threads: 2,
            cluster_method: ClusterMethod::Grouping,
        };
        let matrix = create_ell_with_config(&[1i64, 2, 4, 8], &[1, 1, 2, 2], &config);
        assert_eq!(matrix.data, vec![vec![3], vec![12]]);
        assert_eq!(matrix.col_idx, vec![vec![1], vec![2]]);
    }
}

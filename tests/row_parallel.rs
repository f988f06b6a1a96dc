//! Rows can be assembled concurrently by a host and gathered afterwards

mod common;

use ark_std::Zero;
use common::{sample_labels, sample_points, Point};
use chunk_ell::{create_ell, create_ell_row, EllSparseMatrix, SparseRow};
use rayon::prelude::*;

#[test]
fn test_parallel_rows_match_sequential() {
    let num_threads = 8;
    let width = 64;
    let n = num_threads * width;

    let points = sample_points(n, 2024);
    // Small label range so every row has plenty of collisions
    let labels = sample_labels(n, 13, 7);

    let zero = Point::zero();
    let rows: Vec<SparseRow<Point>> = (0..num_threads)
        .into_par_iter()
        .map(|r| {
            let range = r * width..(r + 1) * width;
            create_ell_row(&points[range.clone()], &labels[range], &zero)
        })
        .collect();

    let parallel = EllSparseMatrix::from_rows(rows);
    let sequential = create_ell(&points, &labels, num_threads);

    assert_eq!(parallel, sequential);
    assert!(parallel.nnz() <= num_threads * 12);
}

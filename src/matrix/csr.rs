//! Flattened (CSR) view of an ELL matrix
//!
//! Bucket accumulators usually want one contiguous stream of
//! `(label, point)` pairs plus row offsets rather than a vector per row.
//! Built only through [`EllSparseMatrix::to_csr`](crate::EllSparseMatrix::to_csr).

use std::fmt;

use crate::ChunkLabel;

/// Row-compressed (point, chunk label) entries
///
/// Row `i` owns `col_idx[row_ptr[i]..row_ptr[i + 1]]` and the matching
/// `values`. Labels keep last-occurrence order and are not sorted.
#[derive(Clone, PartialEq)]
pub struct SparseMatrixCSR<T> {
    pub n_rows: usize,

    /// One past the largest label, i.e. the number of buckets addressed
    pub n_cols: usize,

    pub row_ptr: Vec<usize>,
    pub col_idx: Vec<ChunkLabel>,
    pub values: Vec<T>,
}

impl<T> SparseMatrixCSR<T> {
    pub(crate) fn from_parts(
        row_ptr: Vec<usize>,
        col_idx: Vec<ChunkLabel>,
        values: Vec<T>,
    ) -> Self {
        debug_assert!(!row_ptr.is_empty());
        debug_assert_eq!(row_ptr.last().copied(), Some(col_idx.len()));
        debug_assert_eq!(col_idx.len(), values.len());

        let n_cols = col_idx.iter().max().map_or(0, |&max| max as usize + 1);

        Self {
            n_rows: row_ptr.len() - 1,
            n_cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Labels and points of row i
    pub fn row(&self, i: usize) -> (&[ChunkLabel], &[T]) {
        assert!(i < self.n_rows, "Row index out of bounds");
        let range = self.row_ptr[i]..self.row_ptr[i + 1];
        (&self.col_idx[range.clone()], &self.values[range])
    }

    /// `(label, point)` pairs of row i
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (ChunkLabel, &T)> {
        let (labels, values) = self.row(i);
        labels.iter().copied().zip(values)
    }
}

impl<T> fmt::Debug for SparseMatrixCSR<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SparseMatrixCSR {{ rows: {}, buckets: {}, nnz: {} }}",
            self.n_rows,
            self.n_cols,
            self.nnz()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let matrix = SparseMatrixCSR::from_parts(vec![0, 2, 2, 3], vec![3, 1, 2], vec![10, 20, 30]);

        assert_eq!(matrix.n_rows, 3);
        assert_eq!(matrix.n_cols, 4);
        assert_eq!(matrix.nnz(), 3);

        let row0: Vec<_> = matrix.row_iter(0).collect();
        assert_eq!(row0, vec![(3, &10), (1, &20)]);
        assert_eq!(matrix.row_iter(1).count(), 0);
        assert_eq!(matrix.row(2), (&[2][..], &[30][..]));
    }

    #[test]
    fn test_no_rows() {
        let matrix = SparseMatrixCSR::<i64>::from_parts(vec![0], vec![], vec![]);
        assert_eq!(matrix.n_rows, 0);
        assert_eq!(matrix.n_cols, 0);
        assert_eq!(format!("{:?}", matrix), "SparseMatrixCSR { rows: 0, buckets: 0, nnz: 0 }");
    }

    #[test]
    #[should_panic(expected = "Row index out of bounds")]
    fn test_row_out_of_bounds() {
        SparseMatrixCSR::from_parts(vec![0, 1], vec![1], vec![5]).row(1);
    }
}

//! ELLPACK-style ragged sparse matrix of (point, chunk label) pairs

use std::fmt;

use crate::error::EllError;
use crate::matrix::csr::SparseMatrixCSR;
use crate::utils::exclusive_scan;
use crate::ChunkLabel;

/// The surviving entries of one row after pre-aggregation
///
/// Entries keep the ascending order of the row positions they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseRow<P> {
    /// Accumulated points
    pub points: Vec<P>,

    /// Nonzero chunk label of each point
    pub labels: Vec<ChunkLabel>,
}

impl<P> SparseRow<P> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry
    pub fn push(&mut self, point: P, label: ChunkLabel) {
        debug_assert_ne!(label, 0, "label 0 is never emitted");
        self.points.push(point);
        self.labels.push(label);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over `(point, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&P, ChunkLabel)> {
        self.points.iter().zip(self.labels.iter().copied())
    }
}

impl<P> Default for SparseRow<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sparse matrix in ELL layout with ragged rows
///
/// The ELL format here keeps three parallel arrays:
/// - data: one vector of points per row
/// - col_idx: the chunk label of every point, row by row
/// - row_length: number of entries in each row
///
/// Rows are not padded to a common width; consumers must read
/// `row_length` rather than assume [`EllSparseMatrix::max_row_length`].
#[derive(Clone, PartialEq)]
pub struct EllSparseMatrix<P> {
    /// Points, one vector per row
    pub data: Vec<Vec<P>>,

    /// Chunk labels, parallel to `data`
    pub col_idx: Vec<Vec<ChunkLabel>>,

    /// Entry count of each row
    pub row_length: Vec<usize>,
}

impl<P> EllSparseMatrix<P> {
    /// Creates a new ELL matrix from its three arrays
    ///
    /// # Panics
    ///
    /// Panics if the arrays are inconsistent:
    /// - data, col_idx and row_length must have one entry per row
    /// - every row's data and col_idx must have row_length entries
    /// - no chunk label may be 0
    pub fn new(data: Vec<Vec<P>>, col_idx: Vec<Vec<ChunkLabel>>, row_length: Vec<usize>) -> Self {
        match Self::try_new(data, col_idx, row_length) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible version of [`EllSparseMatrix::new`]
    pub fn try_new(
        data: Vec<Vec<P>>,
        col_idx: Vec<Vec<ChunkLabel>>,
        row_length: Vec<usize>,
    ) -> Result<Self, EllError> {
        if data.len() != col_idx.len() || data.len() != row_length.len() {
            return Err(EllError::InvalidMatrix(format!(
                "data ({}), col_idx ({}) and row_length ({}) must have the same number of rows",
                data.len(),
                col_idx.len(),
                row_length.len()
            )));
        }

        for (i, ((points, labels), &len)) in data.iter().zip(&col_idx).zip(&row_length).enumerate() {
            if points.len() != len || labels.len() != len {
                return Err(EllError::InvalidMatrix(format!(
                    "row {} has {} points and {} labels but row_length {}",
                    i,
                    points.len(),
                    labels.len(),
                    len
                )));
            }
            if labels.contains(&0) {
                return Err(EllError::InvalidMatrix(format!(
                    "row {} contains the reserved chunk label 0",
                    i
                )));
            }
        }

        Ok(Self {
            data,
            col_idx,
            row_length,
        })
    }

    /// Packs assembled rows into a matrix
    pub fn from_rows(rows: Vec<SparseRow<P>>) -> Self {
        let mut data = Vec::with_capacity(rows.len());
        let mut col_idx = Vec::with_capacity(rows.len());
        let mut row_length = Vec::with_capacity(rows.len());

        for row in rows {
            row_length.push(row.len());
            data.push(row.points);
            col_idx.push(row.labels);
        }

        Self {
            data,
            col_idx,
            row_length,
        }
    }

    /// Number of rows (one per thread)
    pub fn n_rows(&self) -> usize {
        self.row_length.len()
    }

    /// Total number of stored entries
    pub fn nnz(&self) -> usize {
        self.row_length.iter().sum()
    }

    /// Length of the longest row, the width a padded ELL layout would need
    pub fn max_row_length(&self) -> usize {
        self.row_length.iter().copied().max().unwrap_or(0)
    }

    /// Points and labels of row i
    pub fn row(&self, i: usize) -> (&[P], &[ChunkLabel]) {
        assert!(i < self.n_rows(), "Row index out of bounds");
        (&self.data[i], &self.col_idx[i])
    }

    /// Returns an iterator over the entries of row i
    ///
    /// Each item is a tuple (point, label).
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (&P, ChunkLabel)> {
        let (points, labels) = self.row(i);
        points.iter().zip(labels.iter().copied())
    }

    /// Iterate over all rows as `(points, labels)` slices
    pub fn rows(&self) -> impl Iterator<Item = (&[P], &[ChunkLabel])> {
        self.data
            .iter()
            .zip(&self.col_idx)
            .map(|(points, labels)| (points.as_slice(), labels.as_slice()))
    }

    /// Flattens the rows into CSR form, labels acting as column indices
    pub fn to_csr(&self) -> SparseMatrixCSR<P>
    where
        P: Clone,
    {
        let row_ptr = exclusive_scan(&self.row_length);
        let col_idx = self.col_idx.concat();
        let values = self.data.concat();

        SparseMatrixCSR::from_parts(row_ptr, col_idx, values)
    }
}

impl<P: fmt::Debug> fmt::Debug for EllSparseMatrix<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EllSparseMatrix {{")?;
        writeln!(f, "  rows: {}", self.n_rows())?;
        writeln!(f, "  nnz: {}", self.nnz())?;
        writeln!(f, "  row lengths: {:?}", self.row_length)?;

        let max_rows_to_print = 5.min(self.n_rows());

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let len = self.row_length[i];

                if len == 0 {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(len);

                    for j in 0..max_elements {
                        write!(f, "({}, {:?}) ", self.col_idx[i][j], self.data[i][j])?;
                    }

                    if len > max_elements {
                        write!(f, "... ({} more)", len - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n_rows() > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows() - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

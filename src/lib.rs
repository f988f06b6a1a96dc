//! # chunk-ell: chunk-clustered ELL layout for multi-scalar multiplication
//!
//! Bucket-based MSM splits every scalar into small windowed "chunks" and adds
//! each point into the bucket named by its chunk. Points that share a chunk
//! within the same worker's slice can be added together up front, which
//! saves work in the bucket stage. This crate does that pre-aggregation and
//! packs the result as a ragged ELLPACK sparse matrix, one row per worker.
//!
//! ## Pipeline
//!
//! 1. **Row partitioning**: `N` points and labels are cut into `T` rows of
//!    width `N / T`.
//! 2. **Merge planning** ([`gen_add_to`]): for every row, each occurrence of
//!    a nonzero label points forward at the next occurrence.
//! 3. **Accumulation** ([`merge_points`]): one pass folds every cluster into
//!    its last occurrence.
//! 4. **Assembly** ([`create_ell`]): surviving `(point, label)` pairs are
//!    kept in order; label 0 never survives.
//!
//! Alternative index planners ([`prep_for_sort_method`],
//! [`prep_for_cluster_method`]) produce contiguous cluster layouts for
//! consumers that prefer to sum clusters in batches.
//!
//! ## Usage
//!
//! Any type with an identity, a commutative `+` and equality works as a
//! point (see [`GroupElement`]), including arkworks projective points:
//!
//! ```
//! use ark_ed_on_bls12_377::EdwardsProjective;
//! use ark_std::UniformRand;
//! use chunk_ell::create_ell;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(0);
//! let points: Vec<EdwardsProjective> = (0..4).map(|_| EdwardsProjective::rand(&mut rng)).collect();
//! let matrix = create_ell(&points, &[1, 1, 2, 2], 2);
//!
//! assert_eq!(matrix.row_length, vec![1, 1]);
//! assert_eq!(matrix.data[0][0], points[0] + points[1]);
//! assert_eq!(matrix.data[1][0], points[2] + points[3]);
//! ```

pub mod accumulator;
pub mod error;
pub mod group;
pub mod matrix;
pub mod reordering;
pub mod utils;

/// Chunk label of a point; `0` means "no contribution"
pub type ChunkLabel = u32;

// Re-export primary components
pub use accumulator::{gen_add_to, merge_points, MergePlan, OccurrenceIndex};
pub use error::EllError;
pub use group::{sum_points, GroupElement};
pub use matrix::{create_ell, create_ell_row, create_ell_with_config, try_create_ell};
pub use matrix::{ClusterMethod, EllConfig, EllSparseMatrix, SparseMatrixCSR, SparseRow};
pub use reordering::{create_index_planner, prep_for_cluster_method, prep_for_sort_method};
pub use reordering::{ClusterLayout, GroupingPlanner, IndexPlanner, SortPlanner};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

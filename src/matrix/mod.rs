// Matrix data structures and ELL assembly

pub mod assemble;
pub mod config;
pub mod csr;
pub mod ell;

pub use assemble::{create_ell, create_ell_row, create_ell_with_config, try_create_ell};
pub use config::{row_width, ClusterMethod, EllConfig};
pub use csr::SparseMatrixCSR;
pub use ell::{EllSparseMatrix, SparseRow};

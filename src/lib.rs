//! # Dense and sparse linear algebra
//!
//! Vectors and matrices over a generic element type, stored either densely or sparsely. A matrix
//! is a row-major view over a single vector, and every operation on it is expressed through
//! element access, such that the results are the same for both storage strategies.
//!
//! Matrices can be transposed, added, multiplied, raised to integer powers and inverted with
//! Gauss-Jordan elimination.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use algorithm::InverseSettings;
pub use data::linear_algebra::matrix::Matrix;
pub use data::linear_algebra::vector::{Backing, BackingVector, DenseVector, SparseVector, Vector};
pub use data::number_types::traits::Number;
pub use error::{LinearAlgebraError, Result};

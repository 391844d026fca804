//! # Error reporting
//!
//! All fallible operations on vectors and matrices report one of the variants of
//! `LinearAlgebraError`. Errors are detected before any value is changed, so a failed operation
//! leaves its operands untouched.
use thiserror::Error;

/// Result type of all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, LinearAlgebraError>;

/// A `LinearAlgebraError` is returned when an operation can't be performed on its operands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinearAlgebraError {
    /// An index outside of `[0, len)` was used to read or write a vector element.
    #[error("Index {index} is out of range, min index = 0, max index = {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the vector that was indexed.
        len: usize,
    },
    /// The shapes of the operands are incompatible.
    ///
    /// Both shapes are given as `(width, height)`; vectors have height `1`.
    #[error("Dimension mismatch in {operation}: {left:?} and {right:?}")]
    DimensionMismatch {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Shape of the left hand side.
        left: (usize, usize),
        /// Shape of the right hand side.
        right: (usize, usize),
    },
    /// Division by the additive identity.
    #[error("Division by zero")]
    DivideByZero,
    /// The operation is only defined for square matrices.
    #[error("Matrix must be square, but is {width}x{height}")]
    NotSquare {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
    },
    /// A zero pivot was found during elimination.
    #[error("Matrix is singular and cannot be inverted: pivot {pivot} is zero")]
    Singular {
        /// Index of the diagonal element that was zero.
        pivot: usize,
    },
    /// The result of a numeric operation is not defined for the element type.
    #[error("Numeric domain error: {base} ^ {exponent} is undefined")]
    Domain {
        /// The value that was raised to a power.
        base: String,
        /// The exponent.
        exponent: String,
    },
}

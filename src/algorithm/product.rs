//! # Products
//!
//! Transposition and matrix multiplication.
use itertools::{Itertools, iproduct};

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::{BackingVector, Vector};
use crate::data::number_types::traits::Number;
use crate::error::{LinearAlgebraError, Result};

impl<F: Number> Matrix<F> {
    /// Swap rows and columns.
    ///
    /// # Return value
    ///
    /// A dense matrix of `height` columns and `width` rows, with value `(j, i)` equal to value
    /// `(i, j)` of this matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let (width, height) = (self.width(), self.height());
        let values = self.iter_values().collect::<Vec<_>>();

        let transposed = (0..width)
            .cartesian_product(0..height)
            .map(|(x, y)| values[y * width + x])
            .collect();

        Self::from_parts(BackingVector::from_values(transposed), height, width)
    }

    /// Multiply this matrix from the right with another matrix.
    ///
    /// Value `(j, i)` of the result is the inner product of row `i` of this matrix with column
    /// `j` of `other`. Computed with a plain triple loop.
    ///
    /// # Return value
    ///
    /// A dense matrix of `other.width()` columns and `self.height()` rows.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the width of this matrix differs from the height of `other`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.width() != other.height() {
            return Err(LinearAlgebraError::DimensionMismatch {
                operation: "matrix multiplication",
                left: (self.width(), self.height()),
                right: (other.width(), other.height()),
            });
        }

        let mut result = Self::new(other.width(), self.height());
        for (i, j) in iproduct!(0..self.height(), 0..other.width()) {
            let mut sum = F::zero();
            for k in 0..self.width() {
                sum = sum.plus(self.get(k, i)?.times(other.get(j, k)?));
            }
            result.set(j, i, sum)?;
        }

        Ok(result)
    }
}

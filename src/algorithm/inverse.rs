//! # Inversion
//!
//! Gauss-Jordan elimination without pivoting: the diagonal elements are used as pivots in order,
//! and a pivot that is zero makes the inversion fail, even if the matrix is invertible with
//! another pivot order.
//!
//! The elimination works on a copy of the matrix, next to an identity matrix that accumulates the
//! same operations. Both have the backing of the matrix that is being inverted.
use log::{debug, trace};

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Number;
use crate::error::{LinearAlgebraError, Result};

/// Settings for `Matrix::inverse_with`.
///
/// The default settings only consider a pivot singular when it is exactly zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InverseSettings<F> {
    pivot_tolerance: Option<F>,
}

impl<F: Number> InverseSettings<F> {
    /// Only exactly zero pivots are singular.
    pub fn exact() -> Self {
        Self { pivot_tolerance: None, }
    }

    /// Also consider pivots singular when their magnitude is at most `tolerance`.
    #[must_use]
    pub fn with_pivot_tolerance(mut self, tolerance: F) -> Self {
        self.pivot_tolerance = Some(tolerance);
        self
    }

    /// The tolerance, if any.
    pub fn pivot_tolerance(&self) -> Option<F> {
        self.pivot_tolerance
    }

    fn is_singular_pivot(&self, pivot: F) -> bool {
        pivot.is_zero() || self.pivot_tolerance.is_some_and(|tolerance| pivot.magnitude() <= tolerance)
    }
}

impl<F: Number> Default for InverseSettings<F> {
    fn default() -> Self {
        Self::exact()
    }
}

impl<F: Number> Matrix<F> {
    /// Compute the inverse of this matrix.
    ///
    /// # Return value
    ///
    /// The inverse, with the same backing as this matrix.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the matrix isn't square, `Singular` if a pivot is zero.
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(&InverseSettings::default())
    }

    /// Compute the inverse of this matrix, detecting singular pivots according to `settings`.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the matrix isn't square, `Singular` if a pivot is singular according to
    /// the settings.
    pub fn inverse_with(&self, settings: &InverseSettings<F>) -> Result<Self> {
        self.check_square()?;

        let n = self.width();
        let backing = self.backing();
        debug!("Inverting a {}x{} matrix with {:?} backing", n, n, backing);

        let mut temp = self.to_backing(backing);
        let mut result = Self::identity_with_backing(n, backing);

        // Elimination happens along the columns: element `(i, j)` is in column `i`, row `j`.
        for i in 0..n {
            let pivot = temp.get(i, i)?;
            if settings.is_singular_pivot(pivot) {
                debug!("Pivot {} is {}, the matrix is singular", i, pivot);
                return Err(LinearAlgebraError::Singular { pivot: i, });
            }
            trace!("Eliminating with pivot {} ({})", i, pivot);

            for j in (0..n).filter(|&j| j != i) {
                let factor = temp.get(j, i)?.divided_by(pivot);

                for k in 0..n {
                    let value = temp.get(j, k)?.minus(temp.get(i, k)?.times(factor));
                    temp.set(j, k, value)?;
                    let value = result.get(j, k)?.minus(result.get(i, k)?.times(factor));
                    result.set(j, k, value)?;
                }
            }
        }

        for i in 0..n {
            let pivot = temp.get(i, i)?;
            // With integer division, elimination is not exact and a pivot might have become zero.
            if pivot.is_zero() {
                debug!("Pivot {} became zero during elimination", i);
                return Err(LinearAlgebraError::Singular { pivot: i, });
            }

            for j in 0..n {
                let value = result.get(i, j)?.divided_by(pivot);
                result.set(i, j, value)?;
            }
        }

        debug!("Inverted a {}x{} matrix, {} values stored", n, n, result.stored_len());
        Ok(result)
    }
}

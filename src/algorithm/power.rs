//! # Matrix powers
//!
//! Integer powers of square matrices by repeated squaring.
use log::debug;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Backing;
use crate::data::number_types::traits::Number;
use crate::error::Result;

impl<F: Number> Matrix<F> {
    /// Raise this matrix to an integer power.
    ///
    /// A power of zero is the identity matrix, a negative power is the positive power of the
    /// inverse.
    ///
    /// Not to be confused with `pow_scalar`, which raises each element to a power.
    ///
    /// # Return value
    ///
    /// A dense matrix of the same size.
    ///
    /// # Errors
    ///
    /// `NotSquare` if the matrix isn't square. For negative exponents, the errors of `inverse`.
    pub fn pow_elements(&self, exponent: i32) -> Result<Self> {
        self.check_square()?;

        debug!("Raising a {}x{} matrix to the power {}", self.width(), self.height(), exponent);
        if exponent == 0 {
            return Ok(Self::identity(self.width()));
        }

        let magnitude = exponent.unsigned_abs();
        if exponent < 0 {
            self.inverse()?.positive_power(magnitude)
        } else {
            self.positive_power(magnitude)
        }
    }

    fn positive_power(&self, exponent: u32) -> Result<Self> {
        debug_assert!(exponent > 0);

        let mut base = self.to_backing(Backing::Dense);
        let mut result = base.clone();
        let mut remaining = exponent - 1;
        let mut multiplications = 0_u32;

        while remaining > 0 {
            if remaining % 2 == 1 {
                result = result.multiply(&base)?;
                multiplications += 1;
            }
            remaining /= 2;
            if remaining > 0 {
                base = base.multiply(&base)?;
                multiplications += 1;
            }
        }

        debug!("Computed power {} using {} multiplications", exponent, multiplications);
        Ok(result)
    }
}

//! # Matrix
//!
//! A two dimensional view over a single vector. Element `(x, y)`, with `x` the column and `y` the
//! row, is stored at index `y * width + x` of the vector (row-major order).
//!
//! The operations in this module are elementwise; transposition, multiplication, powers and
//! inversion are defined in the `algorithm` module.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Div, Mul, Sub};

use itertools::{Itertools, izip};

use crate::data::linear_algebra::vector::{Backing, BackingVector, Vector, check_divisor, pow_real};
use crate::data::number_types::traits::Number;
use crate::error::{LinearAlgebraError, Result};

/// Uses a single vector of length `width * height` as underlying data structure. Dimensions are
/// fixed at creation.
///
/// The vector is owned exclusively by the matrix and can only be accessed through coordinates.
#[derive(Debug, Clone)]
pub struct Matrix<F> {
    data: BackingVector<F>,
    width: usize,
    height: usize,
}

impl<F: Number> Matrix<F> {
    /// Create a dense matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `width`: Number of columns.
    /// * `height`: Number of rows.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_backing(width, height, Backing::default())
    }

    /// Create a matrix of zeros with the given backing.
    ///
    /// # Panics
    ///
    /// If `width * height` overflows a `usize`.
    pub fn with_backing(width: usize, height: usize, backing: Backing) -> Self {
        Self {
            data: BackingVector::with_backing(Self::len_of(width, height), backing),
            width,
            height,
        }
    }

    /// Create a dense square identity matrix of size `size`.
    pub fn identity(size: usize) -> Self {
        Self::identity_with_backing(size, Backing::default())
    }

    /// Create a square identity matrix of size `size` with the given backing.
    pub fn identity_with_backing(size: usize, backing: Backing) -> Self {
        let values = (0..size)
            .cartesian_product(0..size)
            .map(|(y, x)| if x == y { F::one() } else { F::zero() })
            .collect();

        Self::from_parts(BackingVector::from_values_with_backing(values, backing), size, size)
    }

    /// Create a matrix from its rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Values of each row, all rows having the same length.
    /// * `backing`: Storage strategy of the matrix.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if not all rows have the same length.
    pub fn from_rows(rows: Vec<Vec<F>>, backing: Backing) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(LinearAlgebraError::DimensionMismatch {
                operation: "matrix construction",
                left: (width, 1),
                right: (row.len(), 1),
            });
        }

        let values = rows.into_iter().flatten().collect();
        Ok(Self::from_parts(BackingVector::from_values_with_backing(values, backing), width, height))
    }

    pub(crate) fn from_parts(data: BackingVector<F>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), Self::len_of(width, height), "data doesn't match a {}x{} matrix", width, height);

        Self { data, width, height, }
    }

    /// Length of the vector behind a `width` by `height` matrix.
    fn len_of(width: usize, height: usize) -> usize {
        match width.checked_mul(height) {
            Some(len) => len,
            None => panic!("matrix size overflow: {}x{} elements don't fit in a usize", width, height),
        }
    }

    /// Copy this matrix into a matrix with another backing.
    #[must_use]
    pub fn to_backing(&self, backing: Backing) -> Self {
        let values = self.data.iter_values().collect();

        Self::from_parts(BackingVector::from_values_with_backing(values, backing), self.width, self.height)
    }

    fn linear_index(&self, x: usize, y: usize) -> usize {
        // Saturates to an index that is out of range for any vector.
        y.saturating_mul(self.width).saturating_add(x)
    }

    /// Get the value at coordinate (`x`, `y`).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `y * width + x` is not a valid index of the underlying vector.
    pub fn get(&self, x: usize, y: usize) -> Result<F> {
        self.data.get(self.linear_index(x, y))
    }

    /// Set the value at coordinate (`x`, `y`) to `value`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `y * width + x` is not a valid index of the underlying vector.
    pub fn set(&mut self, x: usize, y: usize, value: F) -> Result<()> {
        let index = self.linear_index(x, y);
        self.data.set(index, value)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// The storage strategy of this matrix.
    pub fn backing(&self) -> Backing {
        self.data.backing()
    }

    /// Number of values actually stored: all of them when dense, the nonzeros when sparse.
    pub fn stored_len(&self) -> usize {
        self.data.stored_len()
    }

    /// All values in row-major order, zeros included.
    pub fn iter_values(&self) -> impl Iterator<Item=F> + '_ {
        self.data.iter_values()
    }

    pub(crate) fn check_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinearAlgebraError::NotSquare { width: self.width, height: self.height, })
        }
    }

    /// Dense copy with an operation applied to all values.
    fn map_values<M: FnMut(F) -> F>(&self, operation: M) -> Self {
        let mut result = self.to_backing(Backing::Dense);
        result.data.map_values(operation);
        result
    }

    /// Add another matrix of the same shape, element by element.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the widths or heights differ.
    pub fn add_matrix(&self, other: &Self) -> Result<Self> {
        if self.width != other.width || self.height != other.height {
            return Err(LinearAlgebraError::DimensionMismatch {
                operation: "matrix addition",
                left: (self.width, self.height),
                right: (other.width, other.height),
            });
        }

        let values = izip!(self.data.iter_values(), other.data.iter_values())
            .map(|(left, right)| left.plus(right))
            .collect();
        Ok(Self::from_parts(BackingVector::from_values(values), self.width, self.height))
    }

    /// Add a constant to every element.
    #[must_use]
    pub fn add_scalar(&self, scalar: F) -> Self {
        self.map_values(|value| value.plus(scalar))
    }

    /// Subtract a constant from every element.
    #[must_use]
    pub fn subtract_scalar(&self, scalar: F) -> Self {
        self.map_values(|value| value.minus(scalar))
    }

    /// Multiply every element with a constant.
    #[must_use]
    pub fn mult_scalar(&self, scalar: F) -> Self {
        self.map_values(|value| value.times(scalar))
    }

    /// Divide every element by a constant.
    ///
    /// # Errors
    ///
    /// `DivideByZero` if `scalar` is zero.
    pub fn div_scalar(&self, scalar: F) -> Result<Self> {
        check_divisor(scalar)?;

        Ok(self.map_values(|value| value.divided_by(scalar)))
    }

    /// Raise every element to the power `exponent`.
    ///
    /// Not to be confused with `pow_elements`, which raises the matrix as a whole to a power.
    ///
    /// # Errors
    ///
    /// `Domain` if the power of any of the elements is undefined.
    pub fn pow_scalar(&self, exponent: F) -> Result<Self> {
        let mut result = self.to_backing(Backing::Dense);
        result.data.try_map_values(|value| pow_real(value, exponent))?;
        Ok(result)
    }
}

/// Logical equality: same shape and same values, regardless of backing.
impl<F: Number> PartialEq for Matrix<F> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl<F: Number> Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }

        let values = self.data.iter_values().collect::<Vec<_>>();
        for row in values.chunks(self.width) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}

impl<F: Number> Add<&Matrix<F>> for &Matrix<F> {
    type Output = Result<Matrix<F>>;

    fn add(self, rhs: &Matrix<F>) -> Self::Output {
        self.add_matrix(rhs)
    }
}

impl<F: Number> Mul<&Matrix<F>> for &Matrix<F> {
    type Output = Result<Matrix<F>>;

    fn mul(self, rhs: &Matrix<F>) -> Self::Output {
        self.multiply(rhs)
    }
}

macro_rules! impl_scalar_operators {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn add(self, rhs: $t) -> Self::Output {
                    self.add_scalar(rhs)
                }
            }

            impl Sub<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.subtract_scalar(rhs)
                }
            }

            impl Mul<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.mult_scalar(rhs)
                }
            }

            impl Div<$t> for &Matrix<$t> {
                type Output = Result<Matrix<$t>>;

                fn div(self, rhs: $t) -> Self::Output {
                    self.div_scalar(rhs)
                }
            }
        )*
    }
}

// `&Matrix` also adds and multiplies matrices, so a scalar operand needs a typed literal: `&m + 1i32`.
impl_scalar_operators!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

//! # Vector types
//!
//! Sparse and dense vectors, behind a single `Vector` trait. Which backing is best is a trade-off
//! between speed and space: a dense vector stores every value, a sparse vector only the nonzero
//! ones.
use std::fmt;
use std::fmt::{Debug, Display};

pub use dense::Dense as DenseVector;
pub use sparse::Sparse as SparseVector;

use crate::data::number_types::traits::Number;
use crate::error::{LinearAlgebraError, Result};

mod dense;
mod sparse;

/// Defines basic ways to create or change a vector, regardless of back-end.
///
/// The observable behavior of all implementations is identical; they differ only in complexity
/// and memory use.
pub trait Vector<F: Number>: PartialEq + Clone + Debug + Display {
    /// Create a new instance with all values zero.
    ///
    /// # Arguments
    ///
    /// * `len`: Length of the vector represented (and not necessarily of the internal data
    /// structure).
    fn new(len: usize) -> Self;
    /// Create a new instance holding the given values.
    ///
    /// The length of the vector is the number of values.
    fn from_values(values: Vec<F>) -> Self;
    /// Set the value at an index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not smaller than the length.
    fn set(&mut self, index: usize, value: F) -> Result<()>;
    /// Retrieve the value at an index.
    ///
    /// # Return value
    ///
    /// Zero if the value was never written.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not smaller than the length.
    fn get(&self, index: usize) -> Result<F>;
    /// Number of items represented by the vector.
    fn len(&self) -> usize;
    /// Whether the vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Get the size of the internal data structure (and not of the represented vector).
    fn stored_len(&self) -> usize;
    /// Iterate over all values represented, zeros included, in index order.
    fn iter_values(&self) -> impl Iterator<Item=F> + '_;
    /// Replace every value `v` by `operation(v)`.
    fn map_values<M: FnMut(F) -> F>(&mut self, operation: M);
    /// Replace every value `v` by `operation(v)`.
    ///
    /// If the operation fails for any of the values, the vector is not changed.
    fn try_map_values<M: FnMut(F) -> Result<F>>(&mut self, operation: M) -> Result<()>;

    /// Calculate the inner product between two vectors.
    ///
    /// # Arguments
    ///
    /// * `other`: Vector to calculate inner product with, of any backing.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the lengths differ.
    fn dot_product<V: Vector<F>>(&self, other: &V) -> Result<F> {
        check_same_len("dot product", self.len(), other.len())?;

        Ok(self.iter_values()
            .zip(other.iter_values())
            .fold(F::zero(), |total, (left, right)| total.plus(left.times(right))))
    }

    /// Add another vector to this one, element by element.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the lengths differ. This vector is not changed in that case.
    fn add<V: Vector<F>>(&mut self, other: &V) -> Result<()> {
        check_same_len("vector addition", self.len(), other.len())?;

        for (i, value) in other.iter_values().enumerate() {
            let current = self.get(i)?;
            self.set(i, current.plus(value))?;
        }

        Ok(())
    }

    /// Add a constant to every element.
    fn add_scalar(&mut self, scalar: F) {
        self.map_values(|value| value.plus(scalar));
    }

    /// Subtract a constant from every element.
    fn subtract_scalar(&mut self, scalar: F) {
        self.map_values(|value| value.minus(scalar));
    }

    /// Multiply every element with a constant.
    fn mult_scalar(&mut self, scalar: F) {
        self.map_values(|value| value.times(scalar));
    }

    /// Divide every element by a constant.
    ///
    /// # Errors
    ///
    /// `DivideByZero` if `scalar` is zero.
    fn div_scalar(&mut self, scalar: F) -> Result<()> {
        check_divisor(scalar)?;

        self.map_values(|value| value.divided_by(scalar));
        Ok(())
    }

    /// Raise every element to the power `exponent`.
    ///
    /// # Errors
    ///
    /// `Domain` if the power of any of the elements is undefined; the vector is not changed.
    fn pow_scalar(&mut self, exponent: F) -> Result<()> {
        self.try_map_values(|value| pow_real(value, exponent))
    }
}

/// Storage strategy behind a vector.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Backing {
    /// Contiguous storage, see `DenseVector`.
    #[default]
    Dense,
    /// Hash map storage of the nonzero values, see `SparseVector`.
    Sparse,
}

/// A vector of either backing, chosen at creation.
///
/// Dispatch happens with a `match` rather than through a trait object, such that a single
/// `Matrix` type can hold either backing.
#[derive(Debug, Clone)]
pub enum BackingVector<F> {
    #[allow(missing_docs)]
    Dense(DenseVector<F>),
    #[allow(missing_docs)]
    Sparse(SparseVector<F>),
}

macro_rules! dispatch {
    ($vector:expr, $inner:ident => $call:expr) => {
        match $vector {
            BackingVector::Dense($inner) => $call,
            BackingVector::Sparse($inner) => $call,
        }
    }
}

impl<F: Number> BackingVector<F> {
    /// Create a vector of zeros with the given backing.
    pub fn with_backing(len: usize, backing: Backing) -> Self {
        match backing {
            Backing::Dense => Self::Dense(DenseVector::new(len)),
            Backing::Sparse => Self::Sparse(SparseVector::new(len)),
        }
    }

    /// Create a vector with the given backing holding the given values.
    pub fn from_values_with_backing(values: Vec<F>, backing: Backing) -> Self {
        match backing {
            Backing::Dense => Self::Dense(DenseVector::from_values(values)),
            Backing::Sparse => Self::Sparse(SparseVector::from_values(values)),
        }
    }

    /// The backing used by this vector.
    pub fn backing(&self) -> Backing {
        match self {
            Self::Dense(_) => Backing::Dense,
            Self::Sparse(_) => Backing::Sparse,
        }
    }
}

impl<F: Number> Vector<F> for BackingVector<F> {
    /// Create a dense vector of zeros.
    fn new(len: usize) -> Self {
        Self::with_backing(len, Backing::default())
    }

    fn from_values(values: Vec<F>) -> Self {
        Self::from_values_with_backing(values, Backing::default())
    }

    fn set(&mut self, index: usize, value: F) -> Result<()> {
        dispatch!(self, vector => vector.set(index, value))
    }

    fn get(&self, index: usize) -> Result<F> {
        dispatch!(self, vector => vector.get(index))
    }

    fn len(&self) -> usize {
        dispatch!(self, vector => vector.len())
    }

    fn stored_len(&self) -> usize {
        dispatch!(self, vector => vector.stored_len())
    }

    fn iter_values(&self) -> impl Iterator<Item=F> + '_ {
        // The two iterator types differ, so they are unified through `Either`.
        match self {
            Self::Dense(vector) => itertools::Either::Left(vector.iter_values()),
            Self::Sparse(vector) => itertools::Either::Right(vector.iter_values()),
        }
    }

    fn map_values<M: FnMut(F) -> F>(&mut self, operation: M) {
        dispatch!(self, vector => vector.map_values(operation))
    }

    fn try_map_values<M: FnMut(F) -> Result<F>>(&mut self, operation: M) -> Result<()> {
        dispatch!(self, vector => vector.try_map_values(operation))
    }
}

/// Logical equality, independent of the backing.
impl<F: Number> PartialEq for BackingVector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_values().eq(other.iter_values())
    }
}

impl<F: Number> Display for BackingVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        dispatch!(self, vector => Display::fmt(vector, f))
    }
}

/// Verify that `index` can be used for a vector of length `len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinearAlgebraError::IndexOutOfRange { index, len, })
    }
}

fn check_same_len(operation: &'static str, left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(LinearAlgebraError::DimensionMismatch { operation, left: (left, 1), right: (right, 1), })
    }
}

/// Verify that a value can be divided by.
pub(crate) fn check_divisor<F: Number>(divisor: F) -> Result<()> {
    if divisor.is_zero() {
        Err(LinearAlgebraError::DivideByZero)
    } else {
        Ok(())
    }
}

/// Raise `base` to `exponent`, reporting undefined results as an error.
pub(crate) fn pow_real<F: Number>(base: F, exponent: F) -> Result<F> {
    base.pow_real(exponent).ok_or_else(|| LinearAlgebraError::Domain {
        base: base.to_string(),
        exponent: exponent.to_string(),
    })
}

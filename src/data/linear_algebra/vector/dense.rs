//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size and can interact with sparse vectors.
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;

use itertools::Itertools;

use crate::data::linear_algebra::vector::{Vector, check_index};
use crate::data::number_types::traits::Number;
use crate::error::Result;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
///
/// Every index has a slot, zero values are stored explicitly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
}

impl<F: Number> Dense<F> {
    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    ///
    /// # Return value
    ///
    /// A constant `DenseVector`.
    pub fn constant(value: F, len: usize) -> Self {
        Self { data: vec![value; len], }
    }

    /// View the values as a slice.
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }
}

impl<F: Number> Vector<F> for Dense<F> {
    fn new(len: usize) -> Self {
        Self::constant(F::zero(), len)
    }

    fn from_values(values: Vec<F>) -> Self {
        Self { data: values, }
    }

    /// Set the value at index `i` to `value`, also if that value is zero.
    fn set(&mut self, i: usize, value: F) -> Result<()> {
        check_index(i, self.len())?;

        self.data[i] = value;
        Ok(())
    }

    fn get(&self, i: usize) -> Result<F> {
        check_index(i, self.len())?;

        Ok(self.data[i])
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    /// Every element is stored.
    fn stored_len(&self) -> usize {
        self.data.len()
    }

    fn iter_values(&self) -> impl Iterator<Item=F> + '_ {
        self.data.iter().copied()
    }

    fn map_values<M: FnMut(F) -> F>(&mut self, mut operation: M) {
        for value in &mut self.data {
            *value = operation(*value);
        }
    }

    fn try_map_values<M: FnMut(F) -> Result<F>>(&mut self, mut operation: M) -> Result<()> {
        let data = self.data.iter()
            .map(|&value| operation(value))
            .collect::<Result<Vec<_>>>()?;

        self.data = data;
        Ok(())
    }
}

impl<F: Number> FromIterator<F> for Dense<F> {
    fn from_iter<I: IntoIterator<Item=F>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect(), }
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::vector::{DenseVector, Vector};

    #[test]
    fn stores_explicit_zeros() {
        let mut v = DenseVector::from_values(vec![1, 2, 3]);
        v.set(1, 0).unwrap();

        assert_eq!(v.as_slice(), &[1, 0, 3]);
        assert_eq!(v.stored_len(), 3);
    }

    #[test]
    fn constant() {
        let v = DenseVector::constant(4.5f64, 3);
        assert_eq!(v.to_string(), "4.5 4.5 4.5");
        assert_eq!(DenseVector::<i32>::new(0).to_string(), "");
    }
}

//! # Sparse vector
//!
//! Wrapping a `HashMap<usize, _>`, fixed size.
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;

use itertools::Itertools;

use crate::data::linear_algebra::vector::{Vector, check_index};
use crate::data::number_types::traits::Number;
use crate::error::Result;

/// A sparse vector using a `HashMap` with index keys as back-end. Indices start at `0`.
///
/// Only values not equal to zero are stored: writing a zero removes the entry, and reading an
/// index without an entry yields zero. Memory use is proportional to the number of nonzeros.
#[derive(Clone, Debug)]
pub struct Sparse<F> {
    data: HashMap<usize, F>,
    len: usize,
}

impl<F: Number> Sparse<F> {
    fn value(&self, i: usize) -> F {
        debug_assert!(i < self.len);

        self.data.get(&i).copied().unwrap_or_else(F::zero)
    }

    fn insert_or_remove(data: &mut HashMap<usize, F>, i: usize, value: F) {
        if value.is_zero() {
            data.remove(&i);
        } else {
            data.insert(i, value);
        }
    }
}

impl<F: Number> Vector<F> for Sparse<F> {
    fn new(len: usize) -> Self {
        Self { data: HashMap::new(), len, }
    }

    /// Create a vector from all of its values; zeros are not stored.
    fn from_values(values: Vec<F>) -> Self {
        values.into_iter().collect()
    }

    /// Set the value at index `i` to `value`.
    ///
    /// Writing a zero removes the entry, reclaiming its space.
    fn set(&mut self, i: usize, value: F) -> Result<()> {
        check_index(i, self.len)?;

        Self::insert_or_remove(&mut self.data, i, value);
        Ok(())
    }

    fn get(&self, i: usize) -> Result<F> {
        check_index(i, self.len)?;

        Ok(self.value(i))
    }

    fn len(&self) -> usize {
        self.len
    }

    /// The number of nonzero values.
    fn stored_len(&self) -> usize {
        self.data.len()
    }

    fn iter_values(&self) -> impl Iterator<Item=F> + '_ {
        (0..self.len).map(move |i| self.value(i))
    }

    /// Apply an operation to all values, including the ones that are not stored.
    fn map_values<M: FnMut(F) -> F>(&mut self, mut operation: M) {
        let mut data = HashMap::with_capacity(self.data.len());
        for i in 0..self.len {
            Self::insert_or_remove(&mut data, i, operation(self.value(i)));
        }

        self.data = data;
    }

    fn try_map_values<M: FnMut(F) -> Result<F>>(&mut self, mut operation: M) -> Result<()> {
        let mut data = HashMap::with_capacity(self.data.len());
        for i in 0..self.len {
            Self::insert_or_remove(&mut data, i, operation(self.value(i))?);
        }

        self.data = data;
        Ok(())
    }
}

impl<F: Number> FromIterator<F> for Sparse<F> {
    fn from_iter<I: IntoIterator<Item=F>>(iter: I) -> Self {
        let mut data = HashMap::new();
        let mut counter = 0;

        for item in iter.into_iter() {
            if !item.is_zero() {
                data.insert(counter, item);
            }
            counter += 1;
        }

        Self { data, len: counter, }
    }
}

/// Logical equality: the same length and the same value at every index.
impl<F: Number> PartialEq for Sparse<F> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.data == other.data
    }
}

impl<F: Number> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iter_values().join(" "))
    }
}
